// File: crates/clip-core/tests/config.rs
// Purpose: JSON configuration defaults, overrides and validation.

use clip_core::{ClipRectangle, ConfigError, DemoConfig};

#[test]
fn empty_object_gives_defaults() {
    let cfg = DemoConfig::from_json_str("{}").expect("parse");
    assert_eq!(cfg, DemoConfig::default());
    assert_eq!((cfg.window_width, cfg.window_height), (640, 480));
    assert_eq!(cfg.clip, ClipRectangle::new(100, 100, 400, 300).unwrap());
    assert_eq!(cfg.title, "Cohen-Sutherland Line Clipping for Polygon");
}

#[test]
fn overrides_are_applied() {
    let cfg = DemoConfig::from_json_str(
        r#"{ "window_width": 800, "window_height": 600,
             "clip": { "x_min": 50, "y_min": 60, "x_max": 700, "y_max": 500 },
             "theme": "dark" }"#,
    )
    .expect("parse");
    assert_eq!(cfg.window_width, 800);
    assert_eq!(cfg.clip.x_min(), 50);
    assert_eq!(cfg.clip.y_max(), 500);
    assert_eq!(cfg.theme, "dark");

    let session = cfg.session();
    assert_eq!(session.window_height(), 600);
    assert_eq!(session.rect(), &cfg.clip);
}

#[test]
fn inverted_bounds_are_rejected() {
    let err = DemoConfig::from_json_str(r#"{ "clip": { "x_min": 400, "y_min": 100, "x_max": 100, "y_max": 300 } }"#)
        .expect_err("inverted");
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("inverted"), "{err}");

    assert!(matches!(
        ClipRectangle::new(0, 10, 5, 9),
        Err(ConfigError::InvertedClipBounds { .. })
    ));
}

#[test]
fn non_positive_window_is_rejected() {
    let err = DemoConfig::from_json_str(r#"{ "window_height": 0 }"#).expect_err("zero height");
    assert!(matches!(err, ConfigError::InvalidWindowSize { width: 640, height: 0 }));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(DemoConfig::from_json_str("{ nope"), Err(ConfigError::Parse(_))));
}

#[test]
fn missing_file_is_a_read_error() {
    let err = DemoConfig::load("target/test_out/definitely-missing.json").expect_err("missing");
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn round_trips_through_disk() {
    let path = std::path::PathBuf::from("target/test_out/config_roundtrip.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut cfg = DemoConfig::default();
    cfg.clip = ClipRectangle::new(10, 20, 30, 40).unwrap();
    std::fs::write(&path, serde_json::to_string_pretty(&cfg).unwrap()).unwrap();
    assert_eq!(DemoConfig::load(&path).expect("load"), cfg);
    assert_eq!(DemoConfig::load_or_default(None::<&str>).expect("defaults"), DemoConfig::default());
}
