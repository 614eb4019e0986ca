//! Validated viewport dimensions.

use serde::{Deserialize, Serialize};

/// Viewport size in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenSize {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
}

impl ScreenSize {
    /// Construct from known-valid pixel dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Validate raw host-reported dimensions.
    ///
    /// Host resize events arrive as floating-point CSS-pixel values and may
    /// be garbage (NaN, infinities, negative during teardown). Anything
    /// non-finite or negative is rejected; fractional parts truncate.
    #[must_use]
    pub fn from_raw(width: f64, height: f64) -> Option<Self> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return None;
        }
        Some(Self {
            width: width as u32,
            height: height as u32,
        })
    }
}

impl std::fmt::Display for ScreenSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
