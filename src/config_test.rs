use super::*;

#[test]
fn default_targets_webview2_with_f11() {
    let config = ShimConfig::default();
    assert!(config.raw_pointer_lock);
    assert_eq!(config.fullscreen_key.as_deref(), Some("F11"));
    assert_eq!(config.channel_display(), "chrome.webview");
    assert_eq!(config.level_filter().unwrap(), LevelFilter::Warn);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(ShimConfig::from_json("{}").unwrap(), ShimConfig::default());
}

#[test]
fn partial_object_overrides_only_named_fields() {
    let config = ShimConfig::from_json(r#"{ "channel_path": ["ipc"], "log_level": "debug" }"#).unwrap();
    assert_eq!(config.channel_path, vec!["ipc".to_owned()]);
    assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
    assert!(config.raw_pointer_lock);
    assert_eq!(config.fullscreen_key.as_deref(), Some("F11"));
}

#[test]
fn null_key_disables_bridge() {
    let config = ShimConfig::from_json(r#"{ "fullscreen_key": null }"#).unwrap();
    assert_eq!(config.fullscreen_key, None);
}

#[test]
fn interceptor_can_be_disabled() {
    let config = ShimConfig::from_json(r#"{ "raw_pointer_lock": false }"#).unwrap();
    assert!(!config.raw_pointer_lock);
}

#[test]
fn log_level_is_case_insensitive() {
    let config = ShimConfig::from_json(r#"{ "log_level": "TRACE" }"#).unwrap();
    assert_eq!(config.level_filter().unwrap(), LevelFilter::Trace);
}

#[test]
fn off_log_level_is_accepted() {
    let config = ShimConfig::from_json(r#"{ "log_level": "off" }"#).unwrap();
    assert_eq!(config.level_filter().unwrap(), LevelFilter::Off);
}

#[test]
fn malformed_json_is_rejected() {
    let err = ShimConfig::from_json("{ nope").unwrap_err();
    assert!(matches!(err, ShimError::ConfigParse(_)));
}

#[test]
fn unknown_field_is_rejected() {
    let err = ShimConfig::from_json(r#"{ "fullscreen": "F12" }"#).unwrap_err();
    assert!(matches!(err, ShimError::ConfigParse(_)));
}

#[test]
fn empty_channel_path_is_rejected() {
    let err = ShimConfig::from_json(r#"{ "channel_path": [] }"#).unwrap_err();
    assert!(matches!(err, ShimError::ConfigParse(msg) if msg.contains("channel_path")));
}

#[test]
fn blank_channel_segment_is_rejected() {
    assert!(ShimConfig::from_json(r#"{ "channel_path": ["chrome", ""] }"#).is_err());
}

#[test]
fn empty_key_is_rejected() {
    assert!(ShimConfig::from_json(r#"{ "fullscreen_key": "" }"#).is_err());
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = ShimConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
    assert_eq!(err, ShimError::ConfigParse("unknown log_level: loud".to_owned()));
}
