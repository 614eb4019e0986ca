//! End-to-end engine behavior for representative viewports.

use panegrid::engine::{LayoutEngine, DEBOUNCE_WINDOW_MS, STAGGER_DELAY_MS, TRANSITION_DURATION_MS};
use panegrid::model::{Breakpoint, Panel, ScreenSize};
use panegrid::prefs::{LayoutPreferences, MemoryPreferenceStore};

fn engine_with(initial: ScreenSize, prefs: LayoutPreferences) -> LayoutEngine {
    LayoutEngine::new(initial, Box::new(MemoryPreferenceStore::with_saved(prefs)))
}

fn default_engine(initial: ScreenSize) -> LayoutEngine {
    LayoutEngine::new(initial, Box::new(MemoryPreferenceStore::new()))
}

#[test]
fn full_hd_desktop_gets_three_equal_columns_with_everything_visible() {
    let engine = default_engine(ScreenSize::new(1920, 1080));
    assert_eq!(engine.current_breakpoint(), Breakpoint::Desktop);

    let geometry = &engine.layout().geometry;
    assert_eq!(geometry.sidebar, 240);
    assert_eq!(geometry.content, vec![540, 540, 540]);

    for panel in Panel::ALL {
        assert!(engine.is_panel_visible(panel), "{panel} should be visible");
    }
}

#[test]
fn narrowing_desktop_holds_until_the_hysteresis_buffer_is_crossed() {
    let mut engine = default_engine(ScreenSize::new(1920, 1080));

    // Shrink to just inside the dead zone: still desktop.
    engine.handle_resize(1350.0, 1080.0, 1_000);
    engine.tick(1_000 + DEBOUNCE_WINDOW_MS);
    assert_eq!(engine.current_breakpoint(), Breakpoint::Desktop);
    assert!(!engine.is_transitioning());

    // One pixel past the buffer: laptop, with a recorded transition.
    engine.handle_resize(1345.0, 1080.0, 5_000);
    engine.tick(5_000 + DEBOUNCE_WINDOW_MS);
    assert_eq!(engine.current_breakpoint(), Breakpoint::Laptop);
    assert_eq!(engine.previous_breakpoint(), Some(Breakpoint::Desktop));
    assert!(engine.is_transitioning());

    let latest = engine.transition_history().latest().copied().unwrap();
    assert_eq!((latest.from, latest.to), (Breakpoint::Desktop, Breakpoint::Laptop));
}

#[test]
fn phone_viewport_with_auto_hide_keeps_essentials_only() {
    let mut prefs = LayoutPreferences::default();
    prefs.auto_hide_components = true;
    let engine = engine_with(ScreenSize::new(400, 700), prefs);

    assert_eq!(engine.current_breakpoint(), Breakpoint::Mobile);
    assert_eq!(engine.layout().geometry.sidebar, 0);
    assert_eq!(engine.layout().geometry.column_count(), 1);

    assert!(engine.is_panel_visible(Panel::FileUpload));
    assert!(engine.is_panel_visible(Panel::Player));
    assert!(!engine.is_panel_visible(Panel::Chat));
    assert!(!engine.is_panel_visible(Panel::Settings));
}

#[test]
fn compact_laptop_shrinks_floored_heights_by_a_fifth() {
    let mut prefs = LayoutPreferences::default();
    prefs.compact_mode = true;
    let engine = engine_with(ScreenSize::new(1200, 800), prefs);

    assert_eq!(engine.current_breakpoint(), Breakpoint::Laptop);
    // 800 - 160 reserved leaves 640; chat scales to 160, is floored to the
    // laptop minimum of 280, then compact takes 20%: 224.
    assert_eq!(engine.panel_height(Panel::Chat), 224);
    assert!(engine.layout().component(Panel::Chat).collapsed);
}

#[test]
fn simultaneous_panel_changes_stagger_their_animations() {
    let mut engine = default_engine(ScreenSize::new(1920, 2400));
    // At this height every panel sits at its base height; shrinking the
    // viewport moves all four at once.
    engine.handle_resize(1920.0, 1080.0, 1_000);
    engine.tick(1_000 + DEBOUNCE_WINDOW_MS);

    let delays: Vec<u64> = Panel::ALL
        .iter()
        .map(|p| engine.transition_style(*p).delay_ms)
        .collect();
    assert_eq!(delays, vec![0, STAGGER_DELAY_MS, 2 * STAGGER_DELAY_MS, 3 * STAGGER_DELAY_MS]);
    for panel in Panel::ALL {
        assert_eq!(engine.transition_style(panel).duration_ms, TRANSITION_DURATION_MS);
        assert_eq!(engine.transition_style(panel).easing, "ease-in-out");
    }

    // After every staggered deadline passes, completions arrive in order
    // and styling returns to idle.
    let commit = 1_000 + DEBOUNCE_WINDOW_MS;
    let done = engine.tick(commit + TRANSITION_DURATION_MS + 3 * STAGGER_DELAY_MS);
    let finished: Vec<Panel> = done.iter().map(|e| e.panel).collect();
    assert_eq!(finished, Panel::ALL.to_vec());
    for panel in Panel::ALL {
        assert_eq!(engine.transition_style(panel).duration_ms, 0);
    }
}

#[test]
fn rapid_resize_burst_commits_once_at_the_final_size() {
    let mut engine = default_engine(ScreenSize::new(1920, 1080));
    for (i, width) in (0..10).zip((900..1900).step_by(100)) {
        engine.handle_resize(f64::from(width), 1080.0, 1_000 + i * 20);
        assert!(engine.tick(1_000 + i * 20).is_empty());
    }
    // Quiet period starts at the last event (1_180).
    engine.tick(1_180 + DEBOUNCE_WINDOW_MS);
    assert_eq!(engine.screen_size(), ScreenSize::new(1800, 1080));
    // Only the final size was classified; intermediate mobile/tablet widths
    // never produced transitions.
    assert!(engine.transition_history().is_empty());
    assert_eq!(engine.current_breakpoint(), Breakpoint::Desktop);
}

#[test]
fn breakpoint_order_of_events_survives_a_zigzag() {
    let mut engine = default_engine(ScreenSize::new(1920, 1080));
    let sequence = [(800.0, Breakpoint::Tablet), (1500.0, Breakpoint::Desktop), (400.0, Breakpoint::Mobile)];
    let mut at = 1_000u64;
    for (width, expected) in sequence {
        engine.handle_resize(width, 1080.0, at);
        engine.tick(at + DEBOUNCE_WINDOW_MS);
        assert_eq!(engine.current_breakpoint(), expected);
        at += 10_000;
    }
    let pairs: Vec<(Breakpoint, Breakpoint)> = engine
        .transition_history()
        .iter()
        .map(|t| (t.from, t.to))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (Breakpoint::Desktop, Breakpoint::Tablet),
            (Breakpoint::Tablet, Breakpoint::Desktop),
            (Breakpoint::Desktop, Breakpoint::Mobile),
        ]
    );
}
