//! Breakpoint classification with hysteresis.
//!
//! A viewport width maps to one of four ordered breakpoints. Plain
//! classification picks the largest breakpoint whose entry threshold the
//! width meets. Hysteresis-aware classification additionally resists leaving
//! the current breakpoint by a fixed pixel buffer, so a viewport oscillating
//! by a few pixels near a boundary does not flip back and forth.

use crate::model::error::ThresholdError;
use serde::{Deserialize, Serialize};

/// Width oscillation tolerance around a threshold, in pixels.
///
/// While at a breakpoint, classification only demotes once the width drops
/// more than this far below the breakpoint's entry threshold, and only
/// promotes once the width rises this far above the next entry threshold.
pub const HYSTERESIS_BUFFER: u32 = 20;

/// One of four discrete viewport-size classes, smallest first.
///
/// The derived ordering defines "smaller/larger than" for transition
/// direction and adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Breakpoint {
    /// Narrow single-column viewports (phones).
    Mobile,
    /// Mid-width viewports (tablets).
    Tablet,
    /// Standard laptop viewports.
    Laptop,
    /// Wide desktop viewports.
    Desktop,
}

impl Breakpoint {
    /// All breakpoints, smallest first.
    pub const ALL: [Breakpoint; 4] = [
        Breakpoint::Mobile,
        Breakpoint::Tablet,
        Breakpoint::Laptop,
        Breakpoint::Desktop,
    ];

    /// Short lowercase label, e.g. for log lines and summaries.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Laptop => "laptop",
            Breakpoint::Desktop => "desktop",
        }
    }

    /// Ordinal position in [`Breakpoint::ALL`] (0 = mobile).
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// The next larger breakpoint, if any.
    #[must_use]
    pub const fn step_up(self) -> Option<Breakpoint> {
        match self {
            Breakpoint::Mobile => Some(Breakpoint::Tablet),
            Breakpoint::Tablet => Some(Breakpoint::Laptop),
            Breakpoint::Laptop => Some(Breakpoint::Desktop),
            Breakpoint::Desktop => None,
        }
    }

    /// The next smaller breakpoint, if any.
    #[must_use]
    pub const fn step_down(self) -> Option<Breakpoint> {
        match self {
            Breakpoint::Mobile => None,
            Breakpoint::Tablet => Some(Breakpoint::Mobile),
            Breakpoint::Laptop => Some(Breakpoint::Tablet),
            Breakpoint::Desktop => Some(Breakpoint::Laptop),
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Entry thresholds for the four breakpoints, in pixels.
///
/// `entry(bp)` is the minimum viewport width at which `bp` becomes active
/// under plain classification. Thresholds must be strictly increasing from
/// mobile to desktop; construction enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointThresholds {
    mobile: u32,
    tablet: u32,
    laptop: u32,
    desktop: u32,
}

impl BreakpointThresholds {
    /// Default thresholds: 480 / 768 / 1024 / 1366.
    pub const DEFAULT: Self = Self {
        mobile: 480,
        tablet: 768,
        laptop: 1024,
        desktop: 1366,
    };

    /// Create custom thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdError::NotIncreasing`] unless
    /// `mobile < tablet < laptop < desktop`.
    pub fn new(
        mobile: u32,
        tablet: u32,
        laptop: u32,
        desktop: u32,
    ) -> Result<Self, ThresholdError> {
        if mobile < tablet && tablet < laptop && laptop < desktop {
            Ok(Self {
                mobile,
                tablet,
                laptop,
                desktop,
            })
        } else {
            Err(ThresholdError::NotIncreasing {
                mobile,
                tablet,
                laptop,
                desktop,
            })
        }
    }

    /// Entry threshold for a breakpoint.
    #[must_use]
    pub const fn entry(&self, bp: Breakpoint) -> u32 {
        match bp {
            Breakpoint::Mobile => self.mobile,
            Breakpoint::Tablet => self.tablet,
            Breakpoint::Laptop => self.laptop,
            Breakpoint::Desktop => self.desktop,
        }
    }

    /// Classify a width with no history: the largest breakpoint whose entry
    /// threshold the width meets. Widths below the tablet entry are mobile.
    #[must_use]
    pub fn classify_plain(&self, width: u32) -> Breakpoint {
        if width >= self.desktop {
            Breakpoint::Desktop
        } else if width >= self.laptop {
            Breakpoint::Laptop
        } else if width >= self.tablet {
            Breakpoint::Tablet
        } else {
            Breakpoint::Mobile
        }
    }

    /// Classify a width with hysteresis against the current breakpoint.
    ///
    /// A dead zone of [`HYSTERESIS_BUFFER`] pixels resists leaving `current`:
    /// a one-step demotion requires the width to fall below
    /// `entry(current) - buffer`, and a one-step promotion requires it to
    /// reach `entry(next) + buffer`. A jump spanning more than one breakpoint
    /// (e.g. a window snapped from mobile-sized to desktop-sized) resolves
    /// by the plain rule, since no single dead zone applies across it.
    #[must_use]
    pub fn classify(&self, width: u32, current: Breakpoint) -> Breakpoint {
        let plain = self.classify_plain(width);
        if plain == current {
            return current;
        }

        let steps = plain.ordinal() as i32 - current.ordinal() as i32;
        if steps.abs() > 1 {
            return plain;
        }

        if steps > 0 {
            // Promotion: the width must clear the buffer above the target's
            // entry threshold.
            if width >= self.entry(plain).saturating_add(HYSTERESIS_BUFFER) {
                plain
            } else {
                current
            }
        } else {
            // Demotion: hold the current breakpoint until the width falls
            // below its entry threshold by the full buffer.
            if width < self.entry(current).saturating_sub(HYSTERESIS_BUFFER) {
                plain
            } else {
                current
            }
        }
    }
}

impl Default for BreakpointThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}
