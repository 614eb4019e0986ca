//! Debounced resize intake.
//!
//! Host resize events arrive in bursts during interactive dragging. The
//! debouncer coalesces them to the single newest pending size and commits it
//! once the stream has been quiet for the debounce window (trailing edge).
//! All waiting is against logical deadlines computed from the caller's
//! `now_ms`; nothing here sleeps.

use crate::model::ScreenSize;
use tracing::{debug, warn};

/// Quiet period required before a pending size commits, in milliseconds.
pub const DEBOUNCE_WINDOW_MS: u64 = 150;

/// Whether an event at `event_ms` should replace state last accepted at
/// `last_accepted_ms`.
///
/// Pure stale-frame guard: out-of-order delivery can hand us an event older
/// than one already committed, and committing it would leave geometry
/// reflecting a size the host has since abandoned.
#[must_use]
pub fn supersedes(event_ms: u64, last_accepted_ms: Option<u64>) -> bool {
    last_accepted_ms.is_none_or(|accepted| event_ms >= accepted)
}

#[derive(Debug, Clone, Copy)]
struct PendingResize {
    size: ScreenSize,
    event_ms: u64,
    deadline_ms: u64,
}

/// Trailing-edge debouncer over raw host resize events.
#[derive(Debug, Default)]
pub struct ResizeDebouncer {
    pending: Option<PendingResize>,
    last_accepted_ms: Option<u64>,
}

impl ResizeDebouncer {
    /// Debouncer with no pending work.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw resize event at `now_ms`.
    ///
    /// Invalid dimensions (non-finite or negative) are rejected outright and
    /// the previous pending size, if any, is retained. Valid events replace
    /// the pending size and push the commit deadline out by the full window.
    /// Returns whether the event was accepted.
    pub fn submit(&mut self, raw_width: f64, raw_height: f64, now_ms: u64) -> bool {
        let Some(size) = ScreenSize::from_raw(raw_width, raw_height) else {
            warn!(raw_width, raw_height, "rejecting invalid resize dimensions");
            return false;
        };
        self.pending = Some(PendingResize {
            size,
            event_ms: now_ms,
            deadline_ms: now_ms + DEBOUNCE_WINDOW_MS,
        });
        true
    }

    /// Commit the pending size if its quiet period has elapsed by `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Option<ScreenSize> {
        let pending = self.pending?;
        if now_ms < pending.deadline_ms {
            return None;
        }
        self.pending = None;
        if !supersedes(pending.event_ms, self.last_accepted_ms) {
            debug!(size = %pending.size, "dropping stale resize");
            return None;
        }
        self.last_accepted_ms = Some(pending.event_ms);
        Some(pending.size)
    }

    /// Whether a size is waiting on its quiet period.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop pending work (teardown cancellation). The stale guard survives
    /// so a late-delivered old event still cannot commit.
    pub fn reset(&mut self) {
        self.pending = None;
    }
}
