//! Responsive layout engine for multi-panel application windows.
//!
//! `panegrid` turns raw viewport dimensions and user preferences into a
//! deterministic [`LayoutConfiguration`](layout::LayoutConfiguration):
//! breakpoint classification with hysteresis, sidebar and content-column
//! geometry, per-panel sizing, visibility, and grid position. Around that
//! pure core, [`engine::LayoutEngine`] adds debounced resize intake,
//! transition coordination with staggered per-panel deadlines, preloading of
//! adjacent-breakpoint configurations, and TOML preference persistence.
//!
//! The crate renders nothing and never sleeps: animation comes back as
//! styling directives and completion events, and all timing is logical
//! against a host-supplied millisecond clock.
//!
//! ```
//! use panegrid::engine::LayoutEngine;
//! use panegrid::model::{Panel, ScreenSize};
//! use panegrid::prefs::MemoryPreferenceStore;
//!
//! let mut engine = LayoutEngine::new(
//!     ScreenSize::new(1920, 1080),
//!     Box::new(MemoryPreferenceStore::new()),
//! );
//! assert!(engine.is_panel_visible(Panel::Chat));
//!
//! engine.handle_resize(400.0, 700.0, 1_000);
//! let _events = engine.tick(1_150);
//! assert_eq!(engine.layout().geometry.sidebar, 0);
//! ```

pub mod engine;
pub mod layout;
pub mod logging;
pub mod model;
pub mod prefs;
