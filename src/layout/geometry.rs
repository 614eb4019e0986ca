//! Sidebar and content-column geometry per breakpoint.

use crate::model::{Breakpoint, ScreenSize};
use crate::prefs::{LayoutMode, LayoutPreferences};
use serde::{Deserialize, Serialize};

/// Horizontal split of the viewport: sidebar, padding, and content columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnGeometry {
    /// Sidebar width in pixels (0 on mobile).
    pub sidebar: u32,
    /// Total horizontal padding in pixels.
    pub padding: u32,
    /// Width of each content column. Columns are always equal; remainder
    /// pixels from the division are dropped.
    pub content: Vec<u32>,
}

impl ColumnGeometry {
    /// Number of content columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.content.len()
    }

    /// Width of one content column.
    #[must_use]
    pub fn column_width(&self) -> u32 {
        self.content.first().copied().unwrap_or(0)
    }
}

/// Expanded sidebar caps: fixed pixels and percent of viewport width. The
/// effective width is the smaller of the two.
const fn sidebar_caps(bp: Breakpoint) -> (u32, u32) {
    match bp {
        Breakpoint::Desktop => (240, 15),
        Breakpoint::Laptop => (200, 12),
        Breakpoint::Tablet => (160, 10),
        Breakpoint::Mobile => (0, 0),
    }
}

/// Total horizontal padding per breakpoint.
#[must_use]
pub const fn padding(bp: Breakpoint) -> u32 {
    match bp {
        Breakpoint::Desktop => 60,
        Breakpoint::Laptop => 40,
        Breakpoint::Tablet => 30,
        Breakpoint::Mobile => 20,
    }
}

/// Effective sidebar width for a viewport.
///
/// The collapsed form only exists on desktop (60 px) and laptop (50 px);
/// tablet and mobile ignore the flag.
#[must_use]
pub fn sidebar_width(bp: Breakpoint, screen: ScreenSize, collapsed: bool) -> u32 {
    if collapsed {
        match bp {
            Breakpoint::Desktop => return 60,
            Breakpoint::Laptop => return 50,
            Breakpoint::Tablet | Breakpoint::Mobile => {}
        }
    }
    let (fixed, percent) = sidebar_caps(bp);
    let proportional = (u64::from(screen.width) * u64::from(percent) / 100) as u32;
    fixed.min(proportional)
}

/// Content column count for a breakpoint. Tablet gets a second column when
/// the user picked grid mode for it.
#[must_use]
pub fn column_count(bp: Breakpoint, prefs: &LayoutPreferences) -> usize {
    match bp {
        Breakpoint::Desktop | Breakpoint::Laptop => 3,
        Breakpoint::Tablet => {
            if prefs.layout_mode(Breakpoint::Tablet) == LayoutMode::Grid {
                2
            } else {
                1
            }
        }
        Breakpoint::Mobile => 1,
    }
}

/// Compute the horizontal geometry for a viewport at a breakpoint.
#[must_use]
pub fn geometry(bp: Breakpoint, screen: ScreenSize, prefs: &LayoutPreferences) -> ColumnGeometry {
    let sidebar = sidebar_width(bp, screen, prefs.sidebar_collapsed);
    let padding = padding(bp);
    let columns = column_count(bp, prefs);
    let usable = screen.width.saturating_sub(sidebar).saturating_sub(padding);
    let width = usable / columns as u32;
    ColumnGeometry {
        sidebar,
        padding,
        content: vec![width; columns],
    }
}
