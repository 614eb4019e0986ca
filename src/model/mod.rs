//! Core domain types: breakpoints, screen sizes, panels, transitions.

pub mod breakpoint;
pub mod error;
pub mod panel;
pub mod screen;
pub mod transition;

pub use breakpoint::{Breakpoint, BreakpointThresholds, HYSTERESIS_BUFFER};
pub use error::{StoreError, ThresholdError};
pub use panel::{ComponentConfig, GridPosition, Panel};
pub use screen::ScreenSize;
pub use transition::{
    BreakpointTransition, TransitionDirection, TransitionHistory, TRANSITION_HISTORY_CAPACITY,
};
