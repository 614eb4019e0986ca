//! Snapshot tests over rendered configuration summaries, plus a JSON shape
//! check for hosts consuming the serialized form.

use panegrid::layout::LayoutConfiguration;
use panegrid::model::{Breakpoint, ScreenSize};
use panegrid::prefs::LayoutPreferences;

#[test]
fn desktop_summary() {
    let config = LayoutConfiguration::compute(
        ScreenSize::new(1920, 1080),
        Breakpoint::Desktop,
        &LayoutPreferences::default(),
    );
    insta::assert_snapshot!("desktop_summary", config.summary());
}

#[test]
fn mobile_auto_hide_summary() {
    let mut prefs = LayoutPreferences::default();
    prefs.auto_hide_components = true;
    let config =
        LayoutConfiguration::compute(ScreenSize::new(400, 700), Breakpoint::Mobile, &prefs);
    insta::assert_snapshot!("mobile_auto_hide_summary", config.summary());
}

#[test]
fn compact_laptop_summary() {
    let mut prefs = LayoutPreferences::default();
    prefs.compact_mode = true;
    let config =
        LayoutConfiguration::compute(ScreenSize::new(1200, 800), Breakpoint::Laptop, &prefs);
    insta::assert_snapshot!("compact_laptop_summary", config.summary());
}

#[test]
fn json_form_round_trips_and_names_every_panel() {
    let config = LayoutConfiguration::compute(
        ScreenSize::new(1920, 1080),
        Breakpoint::Desktop,
        &LayoutPreferences::default(),
    );
    let json = serde_json::to_string_pretty(&config).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["breakpoint"], "desktop");
    assert_eq!(value["screen"]["width"], 1920);
    for panel in ["file_upload", "player", "chat", "settings"] {
        assert!(value["components"][panel].is_object(), "missing {panel}");
    }

    let back: LayoutConfiguration = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
