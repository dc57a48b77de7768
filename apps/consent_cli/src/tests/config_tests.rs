use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_match_notification_layer() {
    let settings = Settings::default();
    assert_eq!(settings.current_role, Role::Host);
    assert_eq!(settings.active_tab, Tab::Shared);
    assert_eq!(settings.notification_duration, Duration::from_millis(4000));
    assert_eq!(settings.max_notifications, 3);
}

#[test]
fn file_settings_override_defaults() {
    let raw = r#"
        current_role = "guest"
        active_tab = "Received"
        notification_duration_ms = 1500
        max_notifications = 5
        log_filter = "client_core=debug"
    "#;
    let settings = apply_file_settings(Settings::default(), raw).expect("parse");
    assert_eq!(settings.current_role, Role::Guest);
    assert_eq!(settings.active_tab, Tab::Received);
    assert_eq!(settings.notification_duration, Duration::from_millis(1500));
    assert_eq!(settings.max_notifications, 5);
    assert_eq!(settings.log_filter, "client_core=debug");
}

#[test]
fn partial_file_keeps_remaining_defaults() {
    let settings =
        apply_file_settings(Settings::default(), "max_notifications = 1").expect("parse");
    assert_eq!(settings.max_notifications, 1);
    assert_eq!(settings.current_role, Role::Host);
}

#[test]
fn unknown_role_in_file_is_rejected() {
    let err = apply_file_settings(Settings::default(), r#"current_role = "auditor""#)
        .expect_err("invalid role");
    assert!(err.to_string().contains("auditor"));
}

#[test]
fn env_overrides_win_over_file() {
    let from_file =
        apply_file_settings(Settings::default(), r#"current_role = "guest""#).expect("parse");
    let settings = apply_env_overrides(
        from_file,
        lookup_from(&[
            ("APP__CURRENT_ROLE", "HOST"),
            ("APP__NOTIFICATION_DURATION_MS", "250"),
            ("APP__LOG_FILTER", "info"),
        ]),
    )
    .expect("env");
    assert_eq!(settings.current_role, Role::Host);
    assert_eq!(settings.notification_duration, Duration::from_millis(250));
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn malformed_env_number_is_an_error() {
    let err = apply_env_overrides(
        Settings::default(),
        lookup_from(&[("APP__MAX_NOTIFICATIONS", "many")]),
    )
    .expect_err("invalid number");
    assert!(err.to_string().contains("APP__MAX_NOTIFICATIONS"));
}

#[test]
fn explicit_missing_config_file_fails() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("consent_cli_missing_{suffix}.toml"));

    let err = load_settings(Some(path.as_path())).expect_err("missing file");
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn explicit_config_file_is_loaded() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("consent_cli_config_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join("consent_cli.toml");
    fs::write(&path, "active_tab = \"received\"\n").expect("write config");

    let settings = load_settings(Some(path.as_path())).expect("load");
    assert_eq!(settings.active_tab, Tab::Received);

    fs::remove_dir_all(temp_root).expect("cleanup");
}
