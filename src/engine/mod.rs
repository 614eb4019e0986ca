//! The layout engine: owned state root tying intake, classification,
//! configuration, transitions, and persistence together.

pub mod scheduler;
pub mod transitions;

pub use scheduler::{supersedes, ResizeDebouncer, DEBOUNCE_WINDOW_MS};
pub use transitions::{
    PanelResized, TransitionCoordinator, TransitionStyle, EASING, STAGGER_DELAY_MS,
    TRANSITION_DURATION_MS,
};

use crate::layout::{LayoutConfiguration, PreloadCache};
use crate::model::{Breakpoint, BreakpointTransition, Panel, ScreenSize, TransitionHistory};
use crate::prefs::{LayoutMode, LayoutPreferences, PreferenceStore};
use tracing::{debug, warn};

/// Responsive layout engine for one window.
///
/// Explicitly constructed and owned by the host; there are no globals, so a
/// multi-window host runs one engine per window. The engine is driven by two
/// calls: [`handle_resize`](Self::handle_resize) on every raw host resize
/// event, and [`tick`](Self::tick) on the host's frame or timer cadence.
/// All timing is logical against the host-supplied `now_ms`.
///
/// Preference mutations persist through the injected [`PreferenceStore`]
/// immediately; persistence failures are logged and never disturb the
/// layout.
pub struct LayoutEngine {
    screen: ScreenSize,
    current: Breakpoint,
    previous: Option<Breakpoint>,
    prefs: LayoutPreferences,
    store: Box<dyn PreferenceStore>,
    config: LayoutConfiguration,
    debouncer: ResizeDebouncer,
    transitions: TransitionCoordinator,
    preload: PreloadCache,
    last_now_ms: u64,
}

impl LayoutEngine {
    /// Build an engine for an initial viewport, loading any saved
    /// preferences from the store. A failed load falls back to defaults
    /// with a warning.
    #[must_use]
    pub fn new(initial: ScreenSize, store: Box<dyn PreferenceStore>) -> Self {
        let prefs = match store.load() {
            Ok(Some(prefs)) => prefs,
            Ok(None) => LayoutPreferences::default(),
            Err(err) => {
                warn!(%err, "failed to load preferences, using defaults");
                LayoutPreferences::default()
            }
        };
        let current = prefs.thresholds().classify_plain(initial.width);
        let config = LayoutConfiguration::compute(initial, current, &prefs);
        debug!(screen = %initial, breakpoint = %current, "engine initialized");
        Self {
            screen: initial,
            current,
            previous: None,
            prefs,
            store,
            config,
            debouncer: ResizeDebouncer::new(),
            transitions: TransitionCoordinator::new(),
            preload: PreloadCache::new(),
            last_now_ms: 0,
        }
    }

    /// Feed a raw host resize event into the debouncer. Invalid dimensions
    /// are rejected and the last known valid size is retained.
    pub fn handle_resize(&mut self, raw_width: f64, raw_height: f64, now_ms: u64) {
        self.last_now_ms = self.last_now_ms.max(now_ms);
        self.debouncer.submit(raw_width, raw_height, now_ms);
    }

    /// Advance the engine to `now_ms`: commit a debounced size if its quiet
    /// period elapsed, then expire finished panel transitions, returning a
    /// notification for each.
    pub fn tick(&mut self, now_ms: u64) -> Vec<PanelResized> {
        self.last_now_ms = self.last_now_ms.max(now_ms);
        if let Some(size) = self.debouncer.poll(now_ms) {
            self.commit(size, now_ms);
        }
        self.transitions.tick(now_ms)
    }

    /// Drop any resize still waiting on its quiet period (teardown).
    pub fn cancel_pending_resizes(&mut self) {
        self.debouncer.reset();
    }

    /// Apply a committed size: classify with hysteresis, record a
    /// transition on breakpoint change, swap in the new configuration, and
    /// start panel transitions for every panel whose resolved state moved.
    fn commit(&mut self, size: ScreenSize, now_ms: u64) {
        let next = self.prefs.thresholds().classify(size.width, self.current);
        let changed = next != self.current;

        let new_config = if changed {
            self.preload.matching(next, size).cloned()
        } else {
            None
        }
        .unwrap_or_else(|| LayoutConfiguration::compute(size, next, &self.prefs));

        if changed {
            debug!(from = %self.current, to = %next, size = %size, "breakpoint change");
            self.transitions
                .record_breakpoint_change(BreakpointTransition::new(self.current, next, now_ms));
            self.previous = Some(self.current);
            self.current = next;
            self.preload.populate_adjacent(next, size, &self.prefs);
        }

        for panel in Panel::ALL {
            let old = self.config.component(panel);
            let new = new_config.component(panel);
            // Visibility flips in either direction animate; so does a height
            // move while the panel stays visible.
            if old.visible != new.visible || (new.visible && old.height != new.height) {
                self.transitions.note_panel_change(panel, new.height, now_ms);
            }
        }

        self.screen = size;
        self.config = new_config;
    }

    /// Persist preferences, then recompute the configuration under them.
    /// Preference changes can move the thresholds, so the breakpoint is
    /// re-classified too. Cached preloads were computed under the old
    /// preferences and must not survive the change.
    fn after_pref_change(&mut self) {
        if let Err(err) = self.store.save(&self.prefs) {
            warn!(%err, "failed to persist preferences");
        }
        self.preload.clear();
        self.commit(self.screen, self.last_now_ms);
    }

    // Mutators. Each persists immediately.

    /// Flip the user visibility preference for a panel.
    pub fn toggle_panel_visibility(&mut self, panel: Panel) {
        let visible = !self.prefs.visible(panel);
        self.prefs.set_visible(panel, visible);
        self.after_pref_change();
    }

    /// Set an explicit height for a panel; out-of-range values are silently
    /// clamped to `[100, 800]`.
    pub fn set_panel_height(&mut self, panel: Panel, height: u32) {
        self.prefs.set_height(panel, height);
        self.after_pref_change();
    }

    /// Flip the sidebar between expanded and collapsed.
    pub fn toggle_sidebar(&mut self) {
        self.prefs.sidebar_collapsed = !self.prefs.sidebar_collapsed;
        self.after_pref_change();
    }

    /// Flip compact mode.
    pub fn toggle_compact_mode(&mut self) {
        self.prefs.compact_mode = !self.prefs.compact_mode;
        self.after_pref_change();
    }

    /// Set the layout mode for a breakpoint.
    pub fn set_layout_mode(&mut self, bp: Breakpoint, mode: LayoutMode) {
        self.prefs.set_layout_mode(bp, mode);
        self.after_pref_change();
    }

    /// Set the column permutation for 3-column breakpoints; invalid orders
    /// are ignored.
    pub fn set_column_order(&mut self, order: [u8; 3]) {
        self.prefs.set_column_order(order);
        self.after_pref_change();
    }

    /// Restore default preferences. The defaults are persisted rather than
    /// the store entry deleted.
    pub fn reset_layout(&mut self) {
        self.prefs = LayoutPreferences::default();
        self.after_pref_change();
    }

    // Accessors.

    /// The current resolved configuration.
    #[must_use]
    pub fn layout(&self) -> &LayoutConfiguration {
        &self.config
    }

    /// The active breakpoint.
    #[must_use]
    pub fn current_breakpoint(&self) -> Breakpoint {
        self.current
    }

    /// The breakpoint before the most recent change, if any change happened.
    #[must_use]
    pub fn previous_breakpoint(&self) -> Option<Breakpoint> {
        self.previous
    }

    /// Whether a breakpoint transition window is open as of the last
    /// observed `now_ms`.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transitions.is_transitioning(self.last_now_ms)
    }

    /// Recorded breakpoint transitions, oldest first, capped at 10.
    #[must_use]
    pub fn transition_history(&self) -> &TransitionHistory {
        self.transitions.history()
    }

    /// Styling directive for a panel as of the last observed `now_ms`.
    #[must_use]
    pub fn transition_style(&self, panel: Panel) -> TransitionStyle {
        self.transitions.style_for(panel, self.last_now_ms)
    }

    /// Whether a panel is visible in the current configuration.
    #[must_use]
    pub fn is_panel_visible(&self, panel: Panel) -> bool {
        self.config.component(panel).visible
    }

    /// A panel's resolved height in the current configuration.
    #[must_use]
    pub fn panel_height(&self, panel: Panel) -> u32 {
        self.config.component(panel).height
    }

    /// Layout mode preference for a breakpoint.
    #[must_use]
    pub fn layout_mode(&self, bp: Breakpoint) -> LayoutMode {
        self.prefs.layout_mode(bp)
    }

    /// Last committed viewport size.
    #[must_use]
    pub fn screen_size(&self) -> ScreenSize {
        self.screen
    }

    /// The active preference set.
    #[must_use]
    pub fn preferences(&self) -> &LayoutPreferences {
        &self.prefs
    }
}
