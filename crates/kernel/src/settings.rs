use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "BOOK_REPORT_ENV";
const CONFIG_DIR_ENV: &str = "BOOK_REPORT_CONFIG_DIR";
const ENV_PREFIX: &str = "BOOK_REPORT";

/// Deployment environment the application is running in.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

impl Environment {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "local" => Some(Environment::Local),
            "staging" => Some(Environment::Staging),
            "production" => Some(Environment::Production),
            _ => None,
        }
    }
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
    /// Environment name that was requested but not recognized; `local` is used instead.
    #[serde(skip)]
    pub unrecognized_environment: Option<String>,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, and environment overlay.
    pub fn load() -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => std::env::current_dir()
                .with_context(|| "unable to resolve current directory")?
                .join("config"),
        };

        Self::load_from(&config_dir, &environment)
    }

    /// Load configuration from an explicit config directory and environment name.
    ///
    /// Both `base.toml` and `<environment>.toml` are optional; variables
    /// prefixed `BOOK_REPORT_` override file values, with `__` separating
    /// nested keys (e.g. `BOOK_REPORT_TELEMETRY__LOG_FORMAT=json`).
    /// An unknown environment name falls back to `local` and is recorded in
    /// `unrecognized_environment` so the caller can warn about it.
    pub fn load_from(config_dir: &Path, environment: &str) -> anyhow::Result<Self> {
        let (parsed_environment, unrecognized_environment) =
            match Environment::parse(environment) {
                Some(parsed) => (parsed, None),
                None => (Environment::Local, Some(environment.to_string())),
            };

        let base_path = config_dir.join("base.toml");
        let overlay = if unrecognized_environment.is_some() {
            DEFAULT_ENV
        } else {
            environment
        };
        let environment_path = config_dir.join(format!("{}.toml", overlay));

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        // The environment selector wins over any `environment` key in files.
        settings.environment = parsed_environment;
        settings.unrecognized_environment = unrecognized_environment;

        Ok(settings)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default = "TelemetrySettings::default_log_level")]
    pub log_level: String,
}

impl TelemetrySettings {
    fn default_log_level() -> String {
        "warn".to_string()
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            log_level: Self::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
