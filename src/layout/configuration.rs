//! Whole-layout configuration: the single derived artifact hosts consume.

use crate::layout::geometry::{self, ColumnGeometry};
use crate::layout::sizing;
use crate::model::{Breakpoint, ComponentConfig, Panel, ScreenSize};
use crate::prefs::LayoutPreferences;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// A complete resolved layout for one viewport, breakpoint, and preference
/// set.
///
/// Configurations are computed whole and never patched in place: the same
/// inputs always produce the same configuration, which is what makes the
/// preload cache safe to consult.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfiguration {
    /// Viewport this configuration was computed for.
    pub screen: ScreenSize,
    /// Active breakpoint.
    pub breakpoint: Breakpoint,
    /// Sidebar and content-column geometry.
    pub geometry: ColumnGeometry,
    /// Resolved state of every panel, hidden ones included.
    pub components: BTreeMap<Panel, ComponentConfig>,
}

impl LayoutConfiguration {
    /// Compute the configuration for a viewport at a breakpoint.
    #[must_use]
    pub fn compute(screen: ScreenSize, bp: Breakpoint, prefs: &LayoutPreferences) -> Self {
        let geometry = geometry::geometry(bp, screen, prefs);
        let components = Panel::ALL
            .into_iter()
            .map(|panel| {
                let config = ComponentConfig {
                    height: sizing::resolve_height(panel, bp, screen, prefs),
                    visible: sizing::is_visible(panel, bp, prefs),
                    collapsed: prefs.compact_mode,
                    position: sizing::resolve_position(panel, bp, prefs),
                };
                (panel, config)
            })
            .collect();
        Self {
            screen,
            breakpoint: bp,
            geometry,
            components,
        }
    }

    /// Resolved config for one panel.
    #[must_use]
    pub fn component(&self, panel: Panel) -> &ComponentConfig {
        // The map is total over Panel::ALL by construction.
        &self.components[&panel]
    }

    /// Panels currently visible, in canonical order.
    pub fn visible_panels(&self) -> impl Iterator<Item = Panel> + '_ {
        self.components
            .iter()
            .filter(|(_, c)| c.visible)
            .map(|(p, _)| *p)
    }

    /// Human-readable one-screen summary, used for logs and snapshot tests.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "screen {} breakpoint {}", self.screen, self.breakpoint);
        let _ = writeln!(
            out,
            "sidebar {} padding {} columns {} x {}",
            self.geometry.sidebar,
            self.geometry.padding,
            self.geometry.column_count(),
            self.geometry.column_width(),
        );
        for (panel, c) in &self.components {
            let _ = writeln!(
                out,
                "{panel}: h={} {} col={} row={}{}",
                c.height,
                if c.visible { "visible" } else { "hidden" },
                c.position.column,
                c.position.row,
                if c.collapsed { " collapsed" } else { "" },
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GridPosition;

    #[test]
    fn computation_is_idempotent() {
        let prefs = LayoutPreferences::default();
        let screen = ScreenSize::new(1366, 768);
        let a = LayoutConfiguration::compute(screen, Breakpoint::Desktop, &prefs);
        let b = LayoutConfiguration::compute(screen, Breakpoint::Desktop, &prefs);
        assert_eq!(a, b);
    }

    #[test]
    fn every_panel_is_present() {
        let prefs = LayoutPreferences::default();
        let config =
            LayoutConfiguration::compute(ScreenSize::new(400, 700), Breakpoint::Mobile, &prefs);
        assert_eq!(config.components.len(), Panel::ALL.len());
    }

    #[test]
    fn hidden_panels_still_carry_a_config() {
        let mut prefs = LayoutPreferences::default();
        prefs.set_visible(Panel::Settings, false);
        let config =
            LayoutConfiguration::compute(ScreenSize::new(1920, 1080), Breakpoint::Desktop, &prefs);
        let settings = config.component(Panel::Settings);
        assert!(!settings.visible);
        assert_eq!(settings.position, GridPosition::new(1, 2));
        let visible: Vec<Panel> = config.visible_panels().collect();
        assert_eq!(visible, vec![Panel::FileUpload, Panel::Player, Panel::Chat]);
    }

    #[test]
    fn summary_names_screen_and_breakpoint() {
        let prefs = LayoutPreferences::default();
        let config =
            LayoutConfiguration::compute(ScreenSize::new(1920, 1080), Breakpoint::Desktop, &prefs);
        let summary = config.summary();
        assert!(summary.contains("screen 1920x1080 breakpoint desktop"));
        assert!(summary.contains("chat:"));
    }
}
