//! Transition coordination: breakpoint transition state, per-panel
//! animation deadlines with stagger, and styling directives.
//!
//! The crate executes no animation itself; it tells the host what to
//! animate (duration, delay, easing) and when each panel's transition is
//! over. Deadlines are logical, against the caller-supplied `now_ms`.

use crate::model::{BreakpointTransition, Panel, TransitionHistory};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Animation duration for breakpoint and panel transitions, in milliseconds.
pub const TRANSITION_DURATION_MS: u64 = 300;

/// Per-panel stagger step: the Nth panel entering a transition waits
/// `N * STAGGER_DELAY_MS` before animating.
pub const STAGGER_DELAY_MS: u64 = 50;

/// Easing curve the host should apply.
pub const EASING: &str = "ease-in-out";

/// Styling directive for one panel's transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransitionStyle {
    /// Animation duration in milliseconds; 0 when not transitioning.
    pub duration_ms: u64,
    /// Stagger delay in milliseconds; 0 when not transitioning.
    pub delay_ms: u64,
    /// Easing curve name.
    pub easing: &'static str,
}

impl TransitionStyle {
    /// Directive for a panel that is not transitioning.
    pub const IDLE: Self = Self {
        duration_ms: 0,
        delay_ms: 0,
        easing: EASING,
    };
}

/// Notification that a panel's transition finished at its new height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelResized {
    /// Panel whose transition completed.
    pub panel: Panel,
    /// Height the panel settled at, in pixels.
    pub height: u32,
}

#[derive(Debug, Clone, Copy)]
struct ActivePanel {
    panel: Panel,
    height: u32,
    stagger_index: usize,
    deadline_ms: u64,
}

/// Tracks the breakpoint transition window and the set of panels currently
/// animating.
#[derive(Debug, Default)]
pub struct TransitionCoordinator {
    history: TransitionHistory,
    breakpoint_until_ms: Option<u64>,
    active: Vec<ActivePanel>,
}

impl TransitionCoordinator {
    /// Idle coordinator with empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a confirmed breakpoint change and open the transition window.
    pub fn record_breakpoint_change(&mut self, transition: BreakpointTransition) {
        debug!(
            from = %transition.from,
            to = %transition.to,
            at_ms = transition.at_ms,
            "breakpoint transition",
        );
        self.breakpoint_until_ms = Some(transition.at_ms + TRANSITION_DURATION_MS);
        self.history.push(transition);
    }

    /// Whether the breakpoint transition window is open at `now_ms`.
    #[must_use]
    pub fn is_transitioning(&self, now_ms: u64) -> bool {
        self.breakpoint_until_ms.is_some_and(|until| now_ms < until)
    }

    /// Note that a panel's resolved height or visibility changed.
    ///
    /// A panel already mid-transition has its deadline restarted in place
    /// (timers never stack) and keeps its stagger slot; a new panel joins at
    /// the end of the active set and staggers behind the others.
    pub fn note_panel_change(&mut self, panel: Panel, height: u32, now_ms: u64) {
        if let Some(entry) = self.active.iter_mut().find(|e| e.panel == panel) {
            entry.height = height;
            entry.deadline_ms =
                now_ms + stagger_delay(entry.stagger_index) + TRANSITION_DURATION_MS;
            return;
        }
        let stagger_index = self.active.len();
        self.active.push(ActivePanel {
            panel,
            height,
            stagger_index,
            deadline_ms: now_ms + stagger_delay(stagger_index) + TRANSITION_DURATION_MS,
        });
    }

    /// Expire finished panel transitions, returning a notification for each.
    pub fn tick(&mut self, now_ms: u64) -> Vec<PanelResized> {
        let mut done = Vec::new();
        self.active.retain(|entry| {
            if now_ms >= entry.deadline_ms {
                done.push(PanelResized {
                    panel: entry.panel,
                    height: entry.height,
                });
                false
            } else {
                true
            }
        });
        done
    }

    /// Styling directive for a panel at `now_ms`.
    #[must_use]
    pub fn style_for(&self, panel: Panel, now_ms: u64) -> TransitionStyle {
        match self.active.iter().find(|e| e.panel == panel) {
            Some(entry) if now_ms < entry.deadline_ms => TransitionStyle {
                duration_ms: TRANSITION_DURATION_MS,
                delay_ms: stagger_delay(entry.stagger_index),
                easing: EASING,
            },
            _ => TransitionStyle::IDLE,
        }
    }

    /// Recorded breakpoint transitions.
    #[must_use]
    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    /// Whether any panel is mid-transition.
    #[must_use]
    pub fn has_active_panels(&self) -> bool {
        !self.active.is_empty()
    }
}

fn stagger_delay(index: usize) -> u64 {
    index as u64 * STAGGER_DELAY_MS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Breakpoint;

    #[test]
    fn breakpoint_window_closes_after_duration() {
        let mut c = TransitionCoordinator::new();
        c.record_breakpoint_change(BreakpointTransition::new(
            Breakpoint::Desktop,
            Breakpoint::Laptop,
            1_000,
        ));
        assert!(c.is_transitioning(1_000));
        assert!(c.is_transitioning(1_299));
        assert!(!c.is_transitioning(1_300));
        assert_eq!(c.history().len(), 1);
    }

    #[test]
    fn panels_stagger_in_entry_order() {
        let mut c = TransitionCoordinator::new();
        c.note_panel_change(Panel::FileUpload, 230, 1_000);
        c.note_panel_change(Panel::Chat, 280, 1_000);
        assert_eq!(c.style_for(Panel::FileUpload, 1_000).delay_ms, 0);
        assert_eq!(c.style_for(Panel::Chat, 1_000).delay_ms, STAGGER_DELAY_MS);
        assert_eq!(c.style_for(Panel::Player, 1_000), TransitionStyle::IDLE);
    }

    #[test]
    fn retrigger_restarts_deadline_without_stacking() {
        let mut c = TransitionCoordinator::new();
        c.note_panel_change(Panel::Chat, 280, 1_000);
        // Re-trigger mid-flight with a newer height.
        c.note_panel_change(Panel::Chat, 224, 1_200);
        // The original deadline (1_300) must not fire.
        assert_eq!(c.tick(1_300), vec![]);
        assert_eq!(
            c.tick(1_500),
            vec![PanelResized {
                panel: Panel::Chat,
                height: 224,
            }]
        );
        assert!(!c.has_active_panels());
    }

    #[test]
    fn tick_respects_staggered_deadlines() {
        let mut c = TransitionCoordinator::new();
        c.note_panel_change(Panel::FileUpload, 230, 1_000);
        c.note_panel_change(Panel::Player, 230, 1_000);
        // First panel finishes at 1_300, second at 1_350.
        assert_eq!(
            c.tick(1_300),
            vec![PanelResized {
                panel: Panel::FileUpload,
                height: 230,
            }]
        );
        assert_eq!(
            c.tick(1_350),
            vec![PanelResized {
                panel: Panel::Player,
                height: 230,
            }]
        );
    }

    #[test]
    fn style_goes_idle_once_deadline_passes() {
        let mut c = TransitionCoordinator::new();
        c.note_panel_change(Panel::Chat, 280, 1_000);
        assert_eq!(c.style_for(Panel::Chat, 1_100).duration_ms, TRANSITION_DURATION_MS);
        assert_eq!(c.style_for(Panel::Chat, 1_300), TransitionStyle::IDLE);
    }
}
