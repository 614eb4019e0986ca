//! The fixed panel set and its per-breakpoint placement.

use crate::model::breakpoint::Breakpoint;
use serde::{Deserialize, Serialize};

/// One of the four application panels.
///
/// The panel domain is closed, so "unknown panel name" is unrepresentable:
/// host bindings that deal in strings convert at the boundary and drop
/// anything that does not match, which gives the no-op-on-unknown behavior
/// for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    /// Drag-and-drop upload surface.
    FileUpload,
    /// Media player.
    Player,
    /// Chat / conversation pane.
    Chat,
    /// Settings pane.
    Settings,
}

impl Panel {
    /// All panels, in canonical order.
    pub const ALL: [Panel; 4] = [Panel::FileUpload, Panel::Player, Panel::Chat, Panel::Settings];

    /// Stable snake_case label matching the serde representation.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Panel::FileUpload => "file_upload",
            Panel::Player => "player",
            Panel::Chat => "chat",
            Panel::Settings => "settings",
        }
    }

    /// Design base height in pixels, before any responsive scaling.
    #[must_use]
    pub const fn base_height(self) -> u32 {
        match self {
            Panel::FileUpload => 300,
            Panel::Player => 400,
            Panel::Chat => 500,
            Panel::Settings => 350,
        }
    }

    /// Whether the panel survives the auto-hide and performance-mode cuts.
    #[must_use]
    pub const fn is_essential(self) -> bool {
        matches!(self, Panel::FileUpload | Panel::Player)
    }

    /// Canonical grid position for this panel at a breakpoint, before the
    /// user column-order permutation is applied.
    #[must_use]
    pub const fn position(self, bp: Breakpoint) -> GridPosition {
        match (self, bp) {
            (Panel::FileUpload, _) => GridPosition::new(1, 1),

            (Panel::Player, Breakpoint::Desktop | Breakpoint::Laptop) => GridPosition::new(2, 1),
            (Panel::Player, Breakpoint::Tablet | Breakpoint::Mobile) => GridPosition::new(1, 2),

            (Panel::Chat, Breakpoint::Desktop | Breakpoint::Laptop) => GridPosition::new(3, 1),
            (Panel::Chat, Breakpoint::Tablet) => GridPosition::new(1, 3),
            (Panel::Chat, Breakpoint::Mobile) => GridPosition::new(1, 4),

            (Panel::Settings, Breakpoint::Desktop | Breakpoint::Laptop) => GridPosition::new(1, 2),
            (Panel::Settings, Breakpoint::Tablet) => GridPosition::new(1, 4),
            (Panel::Settings, Breakpoint::Mobile) => GridPosition::new(1, 3),
        }
    }
}

impl std::fmt::Display for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 1-based (column, row) cell in the layout grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    /// 1-based column index.
    pub column: u8,
    /// 1-based row index.
    pub row: u8,
}

impl GridPosition {
    /// Construct a grid cell.
    #[must_use]
    pub const fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }
}

/// Fully resolved per-panel layout output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentConfig {
    /// Resolved height in pixels, clamped to the global bounds.
    pub height: u32,
    /// Whether the panel is shown at all.
    pub visible: bool,
    /// Whether the panel should render in its reduced form.
    pub collapsed: bool,
    /// Grid cell after column-order permutation.
    pub position: GridPosition,
}
