//! Advisory cache of configurations for adjacent breakpoints.
//!
//! After a confirmed breakpoint change the engine precomputes the
//! configurations for the breakpoints one step above and below the new one,
//! so an immediately following transition can reuse them. Strictly an
//! optimization: a hit is only used when its screen size matches exactly,
//! and behavior is identical with the cache empty.

use crate::layout::configuration::LayoutConfiguration;
use crate::model::{Breakpoint, ScreenSize};
use crate::prefs::LayoutPreferences;
use tracing::debug;

/// One slot per breakpoint, overwrite-only. The domain is fixed, so there is
/// no eviction.
#[derive(Debug, Clone, Default)]
pub struct PreloadCache {
    slots: [Option<LayoutConfiguration>; 4],
}

impl PreloadCache {
    /// Empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a configuration in its breakpoint's slot, replacing any
    /// previous entry.
    pub fn insert(&mut self, config: LayoutConfiguration) {
        let slot = config.breakpoint.ordinal();
        self.slots[slot] = Some(config);
    }

    /// A cached configuration for `bp`, only if it was computed for exactly
    /// this screen size.
    #[must_use]
    pub fn matching(&self, bp: Breakpoint, screen: ScreenSize) -> Option<&LayoutConfiguration> {
        self.slots[bp.ordinal()]
            .as_ref()
            .filter(|config| config.screen == screen)
    }

    /// Precompute and store the configurations adjacent to `bp`.
    pub fn populate_adjacent(
        &mut self,
        bp: Breakpoint,
        screen: ScreenSize,
        prefs: &LayoutPreferences,
    ) {
        for neighbor in [bp.step_down(), bp.step_up()].into_iter().flatten() {
            debug!(%neighbor, %screen, "preloading adjacent configuration");
            self.insert(LayoutConfiguration::compute(screen, neighbor, prefs));
        }
    }

    /// Drop all cached entries.
    pub fn clear(&mut self) {
        self.slots = Default::default();
    }
}
