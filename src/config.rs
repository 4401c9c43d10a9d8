use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "INTENTGRAPH_CONFIG";

/// Config file looked up in the current directory when no override is set
pub const DEFAULT_CONFIG_FILE: &str = "intentgraph.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Layout of the exported agent directory
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// Sub-directory of the agent export holding the intent files.
    #[serde(default = "default_intents_dir")]
    pub intents_dir: PathBuf,
    /// Locale tag of the example-utterance files (`<intent>_usersays_<locale>.json`).
    /// `"*"` excludes the usersays files of every locale.
    #[serde(default = "default_usersays_locale")]
    pub usersays_locale: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            intents_dir: default_intents_dir(),
            usersays_locale: default_usersays_locale(),
        }
    }
}

fn default_intents_dir() -> PathBuf {
    PathBuf::from("intents")
}

fn default_usersays_locale() -> String {
    "pt-br".to_string()
}

/// Graphviz rendering configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Base name of the written files: `<output_name>.gv` and `<output_name>.<format>`.
    #[serde(default = "default_output_name")]
    pub output_name: String,
    /// Graphviz output format passed as `-T<format>`.
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_dot_binary")]
    pub dot_binary: String,
    /// Open the rendered file in the default viewer.
    #[serde(default = "default_view")]
    pub view: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            output_name: default_output_name(),
            format: default_format(),
            dot_binary: default_dot_binary(),
            view: default_view(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_name() -> String {
    "intent_graph".to_string()
}

fn default_format() -> String {
    "pdf".to_string()
}

fn default_dot_binary() -> String {
    "dot".to_string()
}

fn default_view() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. Path specified in INTENTGRAPH_CONFIG environment variable (must exist)
    /// 2. ./intentgraph.toml in current directory (optional, defaults otherwise)
    pub fn load() -> Result<Self> {
        // .env is optional
        let _ = dotenv::dotenv();

        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load and validate a specific config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.agent.usersays_locale.trim().is_empty() {
            anyhow::bail!("agent.usersays_locale must not be empty");
        }

        if self.render.output_name.trim().is_empty() {
            anyhow::bail!("render.output_name must not be empty");
        }

        if self.render.output_name.contains(['/', '\\']) {
            anyhow::bail!(
                "render.output_name must be a bare file name, not a path: {}",
                self.render.output_name
            );
        }

        if self.render.format.trim().is_empty() {
            anyhow::bail!("render.format must not be empty");
        }

        if self.render.dot_binary.trim().is_empty() {
            anyhow::bail!("render.dot_binary must not be empty");
        }

        Ok(())
    }
}
