use tui_raymarch::types::{ConfigError, Settings};

#[test]
fn settings_defaults_survive_json() {
    let json = serde_json::to_string(&Settings::default()).unwrap();
    assert!(json.contains("\"targetFps\":60"));
    assert!(json.contains("\"useHalfBlocks\":true"));
    assert_eq!(Settings::from_json_str(&json).unwrap(), Settings::default());
}

#[test]
fn partial_config_fills_in_defaults() {
    let s = Settings::from_json_str(r#"{ "maxRaymarchSteps": 120, "fieldOfView": 75.0 }"#).unwrap();
    assert_eq!(s.max_raymarch_steps, 120);
    assert_eq!(s.field_of_view, 75.0);
    assert_eq!(s.target_fps, 60);
    assert!(s.map_colors_with_gamma);
}

#[test]
fn invalid_values_are_rejected() {
    let err = Settings::from_json_str(r#"{ "targetFps": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "targetFps", .. }));

    let err = Settings::from_json_str(r#"{ "fieldOfView": 180.0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "fieldOfView", .. }));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = Settings::from_json_str("{ targetFps: 60").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("tui-raymarch-does-not-exist.json");
    let err = Settings::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
