use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{anyhow, Context};
use serde::Deserialize;
use shared::domain::Role;

use crate::commands::{parse_role, parse_tab, Tab};

pub const DEFAULT_CONFIG_FILE: &str = "consent_cli.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub current_role: Role,
    pub active_tab: Tab,
    pub notification_duration: Duration,
    pub max_notifications: usize,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            current_role: Role::Host,
            active_tab: Tab::Shared,
            notification_duration: client_core::notifications::DEFAULT_DURATION,
            max_notifications: client_core::notifications::DEFAULT_MAX_VISIBLE,
            log_filter: "warn".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    current_role: Option<String>,
    active_tab: Option<String>,
    notification_duration_ms: Option<u64>,
    max_notifications: Option<usize>,
    log_filter: Option<String>,
}

/// Defaults, then the config file, then `APP__*` environment variables.
/// An explicit path must exist; the default file is optional.
pub fn load_settings(explicit_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let path = explicit_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    match fs::read_to_string(&path) {
        Ok(raw) => {
            settings = apply_file_settings(settings, &raw)
                .with_context(|| format!("invalid config file '{}'", path.display()))?;
        }
        Err(err) if explicit_path.is_some() => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()));
        }
        Err(_) => {}
    }

    apply_env_overrides(settings, |key| std::env::var(key).ok())
}

pub fn apply_file_settings(mut settings: Settings, raw: &str) -> anyhow::Result<Settings> {
    let file_cfg: FileSettings = toml::from_str(raw)?;

    if let Some(v) = file_cfg.current_role {
        settings.current_role = parse_role(&v).ok_or_else(|| anyhow!("unknown role '{v}'"))?;
    }
    if let Some(v) = file_cfg.active_tab {
        settings.active_tab = parse_tab(&v).ok_or_else(|| anyhow!("unknown tab '{v}'"))?;
    }
    if let Some(v) = file_cfg.notification_duration_ms {
        settings.notification_duration = Duration::from_millis(v);
    }
    if let Some(v) = file_cfg.max_notifications {
        settings.max_notifications = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }

    Ok(settings)
}

pub fn apply_env_overrides(
    mut settings: Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    if let Some(v) = lookup("APP__CURRENT_ROLE") {
        settings.current_role = parse_role(&v)
            .ok_or_else(|| anyhow!("APP__CURRENT_ROLE: unknown role '{v}'"))?;
    }
    if let Some(v) = lookup("APP__ACTIVE_TAB") {
        settings.active_tab =
            parse_tab(&v).ok_or_else(|| anyhow!("APP__ACTIVE_TAB: unknown tab '{v}'"))?;
    }
    if let Some(v) = lookup("APP__NOTIFICATION_DURATION_MS") {
        let millis = v
            .parse::<u64>()
            .with_context(|| format!("APP__NOTIFICATION_DURATION_MS: invalid value '{v}'"))?;
        settings.notification_duration = Duration::from_millis(millis);
    }
    if let Some(v) = lookup("APP__MAX_NOTIFICATIONS") {
        settings.max_notifications = v
            .parse::<usize>()
            .with_context(|| format!("APP__MAX_NOTIFICATIONS: invalid value '{v}'"))?;
    }
    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
