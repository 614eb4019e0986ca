//! User layout preferences: defaults, validation, and partial-file merge.
//!
//! Preferences are stored as TOML with every field optional; loading merges
//! the file over [`LayoutPreferences::default`] so old files keep working as
//! fields are added. All values are clamped or validated on ingest, so the
//! rest of the crate can treat a `LayoutPreferences` as trusted.

pub mod store;

use crate::model::{Breakpoint, BreakpointThresholds, Panel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

pub use store::{MemoryPreferenceStore, PreferenceStore, TomlPreferenceStore};

/// Minimum resolved or requested panel height, in pixels.
pub const MIN_PANEL_HEIGHT: u32 = 100;
/// Maximum resolved or requested panel height, in pixels.
pub const MAX_PANEL_HEIGHT: u32 = 800;

/// How content is arranged within a breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Panels stacked vertically.
    Stack,
    /// Panels behind a tab strip.
    Tabs,
    /// Collapsible accordion sections.
    Accordion,
    /// Multi-column grid.
    Grid,
}

/// Per-panel user preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelPreference {
    /// Whether the user wants this panel shown (may still be overridden by
    /// auto-hide and performance rules).
    pub visible: bool,
    /// Explicit height override in pixels. `None` means the adaptive sizing
    /// pipeline decides.
    pub height: Option<u32>,
}

impl Default for PanelPreference {
    fn default() -> Self {
        Self {
            visible: true,
            height: None,
        }
    }
}

/// The complete, validated preference set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutPreferences {
    panels: BTreeMap<Panel, PanelPreference>,
    /// Render the sidebar in its narrow collapsed form (desktop/laptop only).
    pub sidebar_collapsed: bool,
    /// Shrink resolved panel heights by 20%.
    pub compact_mode: bool,
    /// On mobile, hide everything but the essential panels.
    pub auto_hide_components: bool,
    /// On mobile and tablet, hide everything but the essential panels.
    pub performance_mode: bool,
    column_order: [u8; 3],
    thresholds: BreakpointThresholds,
    layout_modes: BTreeMap<Breakpoint, LayoutMode>,
}

impl Default for LayoutPreferences {
    fn default() -> Self {
        let panels = Panel::ALL
            .into_iter()
            .map(|p| (p, PanelPreference::default()))
            .collect();
        let layout_modes = [
            (Breakpoint::Mobile, LayoutMode::Stack),
            (Breakpoint::Tablet, LayoutMode::Stack),
            (Breakpoint::Laptop, LayoutMode::Grid),
            (Breakpoint::Desktop, LayoutMode::Grid),
        ]
        .into_iter()
        .collect();
        Self {
            panels,
            sidebar_collapsed: false,
            compact_mode: false,
            auto_hide_components: false,
            performance_mode: false,
            column_order: [1, 2, 3],
            thresholds: BreakpointThresholds::DEFAULT,
            layout_modes,
        }
    }
}

impl LayoutPreferences {
    /// The user's visibility preference for a panel.
    #[must_use]
    pub fn visible(&self, panel: Panel) -> bool {
        self.panels.get(&panel).copied().unwrap_or_default().visible
    }

    /// Set the visibility preference for a panel.
    pub fn set_visible(&mut self, panel: Panel, visible: bool) {
        self.panels.entry(panel).or_default().visible = visible;
    }

    /// Explicit height override for a panel, if the user set one.
    #[must_use]
    pub fn height_override(&self, panel: Panel) -> Option<u32> {
        self.panels.get(&panel).copied().unwrap_or_default().height
    }

    /// Set an explicit height for a panel, silently clamped to
    /// [`MIN_PANEL_HEIGHT`]..=[`MAX_PANEL_HEIGHT`].
    pub fn set_height(&mut self, panel: Panel, height: u32) {
        let clamped = height.clamp(MIN_PANEL_HEIGHT, MAX_PANEL_HEIGHT);
        self.panels.entry(panel).or_default().height = Some(clamped);
    }

    /// Physical-column permutation applied on 3-column breakpoints. Always a
    /// permutation of `[1, 2, 3]`.
    #[must_use]
    pub fn column_order(&self) -> [u8; 3] {
        self.column_order
    }

    /// Set the column permutation; rejected (ignored with a warning) unless
    /// it is a permutation of `[1, 2, 3]`.
    pub fn set_column_order(&mut self, order: [u8; 3]) {
        if is_column_permutation(order) {
            self.column_order = order;
        } else {
            warn!(?order, "ignoring invalid column order");
        }
    }

    /// Active breakpoint thresholds.
    #[must_use]
    pub fn thresholds(&self) -> &BreakpointThresholds {
        &self.thresholds
    }

    /// Replace the breakpoint thresholds.
    pub fn set_thresholds(&mut self, thresholds: BreakpointThresholds) {
        self.thresholds = thresholds;
    }

    /// Layout mode for a breakpoint.
    #[must_use]
    pub fn layout_mode(&self, bp: Breakpoint) -> LayoutMode {
        self.layout_modes
            .get(&bp)
            .copied()
            .unwrap_or(LayoutMode::Stack)
    }

    /// Set the layout mode for a breakpoint.
    pub fn set_layout_mode(&mut self, bp: Breakpoint, mode: LayoutMode) {
        self.layout_modes.insert(bp, mode);
    }
}

fn is_column_permutation(order: [u8; 3]) -> bool {
    let mut sorted = order;
    sorted.sort_unstable();
    sorted == [1, 2, 3]
}

/// On-disk form of the preferences: every field optional so partial files
/// merge cleanly over the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferencesFile {
    /// Per-panel overrides, keyed by panel label.
    pub panels: Option<BTreeMap<Panel, PanelPreference>>,
    /// See [`LayoutPreferences::sidebar_collapsed`].
    pub sidebar_collapsed: Option<bool>,
    /// See [`LayoutPreferences::compact_mode`].
    pub compact_mode: Option<bool>,
    /// See [`LayoutPreferences::auto_hide_components`].
    pub auto_hide_components: Option<bool>,
    /// See [`LayoutPreferences::performance_mode`].
    pub performance_mode: Option<bool>,
    /// See [`LayoutPreferences::column_order`].
    pub column_order: Option<[u8; 3]>,
    /// Custom entry thresholds as `[mobile, tablet, laptop, desktop]`.
    pub thresholds: Option<[u32; 4]>,
    /// Per-breakpoint layout modes.
    pub layout_modes: Option<BTreeMap<Breakpoint, LayoutMode>>,
}

impl PreferencesFile {
    /// Merge this partial file over the defaults, clamping and validating
    /// every field. Invalid values fall back to their defaults with a
    /// warning rather than failing the load.
    #[must_use]
    pub fn resolve(self) -> LayoutPreferences {
        let mut prefs = LayoutPreferences::default();

        if let Some(panels) = self.panels {
            for (panel, pref) in panels {
                prefs.set_visible(panel, pref.visible);
                if let Some(height) = pref.height {
                    prefs.set_height(panel, height);
                }
            }
        }
        if let Some(v) = self.sidebar_collapsed {
            prefs.sidebar_collapsed = v;
        }
        if let Some(v) = self.compact_mode {
            prefs.compact_mode = v;
        }
        if let Some(v) = self.auto_hide_components {
            prefs.auto_hide_components = v;
        }
        if let Some(v) = self.performance_mode {
            prefs.performance_mode = v;
        }
        if let Some(order) = self.column_order {
            prefs.set_column_order(order);
        }
        if let Some([m, t, l, d]) = self.thresholds {
            match BreakpointThresholds::new(m, t, l, d) {
                Ok(thresholds) => prefs.set_thresholds(thresholds),
                Err(err) => warn!(%err, "ignoring invalid thresholds"),
            }
        }
        if let Some(modes) = self.layout_modes {
            for (bp, mode) in modes {
                prefs.set_layout_mode(bp, mode);
            }
        }
        prefs
    }

    /// Snapshot the full preference set into on-disk form.
    #[must_use]
    pub fn from_resolved(prefs: &LayoutPreferences) -> Self {
        Self {
            panels: Some(prefs.panels.clone()),
            sidebar_collapsed: Some(prefs.sidebar_collapsed),
            compact_mode: Some(prefs.compact_mode),
            auto_hide_components: Some(prefs.auto_hide_components),
            performance_mode: Some(prefs.performance_mode),
            column_order: Some(prefs.column_order),
            thresholds: Some([
                prefs.thresholds.entry(Breakpoint::Mobile),
                prefs.thresholds.entry(Breakpoint::Tablet),
                prefs.thresholds.entry(Breakpoint::Laptop),
                prefs.thresholds.entry(Breakpoint::Desktop),
            ]),
            layout_modes: Some(prefs.layout_modes.clone()),
        }
    }
}
