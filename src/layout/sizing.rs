//! Per-panel height, visibility, and position resolution.

use crate::model::{Breakpoint, GridPosition, Panel, ScreenSize};
use crate::prefs::{LayoutPreferences, MAX_PANEL_HEIGHT, MIN_PANEL_HEIGHT};

/// Application header height reserved at the top of the viewport, in pixels.
pub const HEADER_HEIGHT: u32 = 60;

/// Vertical margin reserved around the content area, in pixels.
pub const VERTICAL_MARGIN: u32 = 100;

/// Panel count the scale factor assumes shares the available height.
const ASSUMED_PANEL_COUNT: u32 = 4;

/// Shrink factor applied by compact mode.
const COMPACT_FACTOR: f64 = 0.8;

/// Minimum panel height per breakpoint, applied before compact mode.
/// Desktop has no floor.
const fn height_floor(bp: Breakpoint) -> Option<u32> {
    match bp {
        Breakpoint::Mobile => Some(200),
        Breakpoint::Tablet => Some(250),
        Breakpoint::Laptop => Some(280),
        Breakpoint::Desktop => None,
    }
}

/// Resolve a panel's height in pixels.
///
/// An explicit user height override wins outright. Otherwise the adaptive
/// pipeline runs: the base height is scaled down so four panels would share
/// the viewport height below the header and margins (never scaled up), then
/// raised to the breakpoint floor, shrunk by compact mode, and clamped to
/// the global `[100, 800]` bounds.
#[must_use]
pub fn resolve_height(
    panel: Panel,
    bp: Breakpoint,
    screen: ScreenSize,
    prefs: &LayoutPreferences,
) -> u32 {
    if let Some(height) = prefs.height_override(panel) {
        return height.clamp(MIN_PANEL_HEIGHT, MAX_PANEL_HEIGHT);
    }

    let base = f64::from(panel.base_height());
    let available = f64::from(
        screen
            .height
            .saturating_sub(HEADER_HEIGHT)
            .saturating_sub(VERTICAL_MARGIN),
    );
    let scale = (available / (base * f64::from(ASSUMED_PANEL_COUNT))).min(1.0);
    let mut height = base * scale;

    if let Some(floor) = height_floor(bp) {
        height = height.max(f64::from(floor));
    }
    if prefs.compact_mode {
        height *= COMPACT_FACTOR;
    }

    let rounded = height.round() as u32;
    rounded.clamp(MIN_PANEL_HEIGHT, MAX_PANEL_HEIGHT)
}

/// Resolve whether a panel is shown.
///
/// The user preference is necessary but not sufficient: on mobile with
/// auto-hide, and on mobile or tablet with performance mode, only essential
/// panels survive regardless of the preference.
#[must_use]
pub fn is_visible(panel: Panel, bp: Breakpoint, prefs: &LayoutPreferences) -> bool {
    if !prefs.visible(panel) {
        return false;
    }
    if panel.is_essential() {
        return true;
    }
    if prefs.auto_hide_components && bp == Breakpoint::Mobile {
        return false;
    }
    if prefs.performance_mode && matches!(bp, Breakpoint::Mobile | Breakpoint::Tablet) {
        return false;
    }
    true
}

/// Resolve a panel's grid cell, applying the user column permutation on
/// 3-column breakpoints. `column_order[i]` is the physical column rendered
/// for canonical column `i + 1`.
#[must_use]
pub fn resolve_position(panel: Panel, bp: Breakpoint, prefs: &LayoutPreferences) -> GridPosition {
    let canonical = panel.position(bp);
    match bp {
        Breakpoint::Desktop | Breakpoint::Laptop => {
            let order = prefs.column_order();
            let column = order[usize::from(canonical.column) - 1];
            GridPosition::new(column, canonical.row)
        }
        Breakpoint::Tablet | Breakpoint::Mobile => canonical,
    }
}
