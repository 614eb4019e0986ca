//! Breakpoint transition records and their bounded history.

use crate::model::breakpoint::Breakpoint;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of transitions retained in [`TransitionHistory`].
pub const TRANSITION_HISTORY_CAPACITY: usize = 10;

/// Whether a transition moved to a larger or smaller breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionDirection {
    /// Toward a larger breakpoint.
    Up,
    /// Toward a smaller breakpoint.
    Down,
}

/// One confirmed breakpoint change. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointTransition {
    /// Breakpoint before the change.
    pub from: Breakpoint,
    /// Breakpoint after the change.
    pub to: Breakpoint,
    /// Host-clock timestamp of the change, in milliseconds.
    pub at_ms: u64,
    /// Direction derived from the breakpoint ordering.
    pub direction: TransitionDirection,
}

impl BreakpointTransition {
    /// Record a transition; direction follows from the breakpoint ordering.
    #[must_use]
    pub fn new(from: Breakpoint, to: Breakpoint, at_ms: u64) -> Self {
        let direction = if to > from {
            TransitionDirection::Up
        } else {
            TransitionDirection::Down
        };
        Self {
            from,
            to,
            at_ms,
            direction,
        }
    }
}

/// FIFO log of recent breakpoint transitions, oldest evicted at capacity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionHistory {
    entries: VecDeque<BreakpointTransition>,
}

impl TransitionHistory {
    /// Empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transition, evicting the oldest entry at capacity.
    pub fn push(&mut self, transition: BreakpointTransition) {
        if self.entries.len() == TRANSITION_HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(transition);
    }

    /// Number of retained transitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any transitions are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent transition, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&BreakpointTransition> {
        self.entries.back()
    }

    /// Transitions oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &BreakpointTransition> {
        self.entries.iter()
    }
}
