use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use crate::renderer::DEFAULT_NAMESPACE_SEGMENT;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub templates: TemplateSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateSettings {
    /// Directory template paths are resolved against
    #[serde(default = "default_template_root")]
    pub root: PathBuf,
    /// Path segment between the app label and the message name
    #[serde(default = "default_namespace_segment")]
    pub namespace_segment: String,
    /// Fail rendering when a template references an undefined variable
    #[serde(default = "default_true")]
    pub strict_undefined: bool,
    /// Keep the trailing newline of template files in rendered output
    #[serde(default = "default_true")]
    pub keep_trailing_newline: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_template_root() -> PathBuf {
    PathBuf::from("templates")
}

fn default_namespace_segment() -> String {
    DEFAULT_NAMESPACE_SEGMENT.to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Self::load(Path::new("config"), &run_mode, environment_source())
    }

    /// Layer defaults, `{config_dir}/default`, `{config_dir}/{run_mode}` and
    /// `environment`, later sources winning
    pub fn load(
        config_dir: &Path,
        run_mode: &str,
        environment: Environment,
    ) -> Result<Self, ConfigError> {
        let default_file = config_dir.join("default");
        let mode_file = config_dir.join(run_mode);

        let builder = Config::builder()
            // Start with default values
            .set_default("templates.root", "templates")?
            .set_default("templates.namespace_segment", DEFAULT_NAMESPACE_SEGMENT)?
            .set_default("templates.strict_undefined", true)?
            .set_default("templates.keep_trailing_newline", true)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            // Load config file if exists
            .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(File::with_name(&mode_file.to_string_lossy()).required(false))
            .add_source(environment);

        builder.build()?.try_deserialize()
    }
}

/// Environment variables source: ACE_TEMPLATES__ROOT, ACE_LOGGING__FORMAT, etc.
pub fn environment_source() -> Environment {
    Environment::with_prefix("ACE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            root: default_template_root(),
            namespace_segment: default_namespace_segment(),
            strict_undefined: true,
            keep_trailing_newline: true,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}
