use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use serde::Deserialize;
use widget_core::SequencerConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory the `assets/...` paths are resolved against.
    pub site_root: PathBuf,
    pub settle_delay_ms: u64,
    pub probe_timeout_ms: Option<u64>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site_root: PathBuf::from("."),
            settle_delay_ms: 150,
            probe_timeout_ms: None,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn sequencer_config(&self) -> SequencerConfig {
        SequencerConfig {
            settle_delay: Duration::from_millis(self.settle_delay_ms),
            probe_timeout: self.probe_timeout_ms.map(Duration::from_millis),
            ..SequencerConfig::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    site_root: Option<PathBuf>,
    settle_delay_ms: Option<u64>,
    probe_timeout_ms: Option<u64>,
    log_filter: Option<String>,
}

pub fn load_settings(config_path: &Path) -> anyhow::Result<Settings> {
    load_settings_with(config_path, |key| std::env::var(key).ok())
}

/// Defaults, then the config file if present, then environment overrides.
pub fn load_settings_with(
    config_path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if config_path.exists() {
        let raw = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config '{}'", config_path.display()))?;
        let file_cfg: FileSettings = toml::from_str(&raw)
            .with_context(|| format!("invalid config '{}'", config_path.display()))?;

        if let Some(v) = file_cfg.site_root {
            settings.site_root = v;
        }
        if let Some(v) = file_cfg.settle_delay_ms {
            settings.settle_delay_ms = v;
        }
        if let Some(v) = file_cfg.probe_timeout_ms {
            settings.probe_timeout_ms = Some(v);
        }
        if let Some(v) = file_cfg.log_filter {
            settings.log_filter = v;
        }
    }

    if let Some(v) = env("SITE_ROOT") {
        settings.site_root = PathBuf::from(v);
    }
    if let Some(v) = env("APP__SITE_ROOT") {
        settings.site_root = PathBuf::from(v);
    }

    if let Some(v) = env("APP__SETTLE_DELAY_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.settle_delay_ms = parsed;
        }
    }

    if let Some(v) = env("APP__PROBE_TIMEOUT_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.probe_timeout_ms = Some(parsed);
        }
    }

    if let Some(v) = env("RUST_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
