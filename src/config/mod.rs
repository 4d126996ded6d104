#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_log_level, validate_path, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_FILE_NAME: &str = "enrollments.json";

/// Effective settings after merging the command line over the TOML file over the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub file_name: String,
    pub verbose: bool,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            verbose: false,
            log_level: None,
            json_logs: false,
        }
    }
}

impl AppConfig {
    pub fn merge(
        file: Option<&str>,
        verbose: bool,
        json_logs: bool,
        toml: Option<&TomlConfig>,
    ) -> Self {
        let file_name = file
            .or_else(|| toml.and_then(TomlConfig::file_name))
            .unwrap_or(DEFAULT_FILE_NAME)
            .to_string();

        Self {
            file_name,
            verbose,
            log_level: toml.and_then(TomlConfig::log_level).map(str::to_string),
            json_logs: json_logs || toml.map(TomlConfig::json_logs).unwrap_or(false),
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let toml = match &cli.config {
            Some(path) => {
                let toml = TomlConfig::from_file(path)?;
                toml.validate()?;
                Some(toml)
            }
            None => None,
        };
        Ok(Self::merge(
            cli.file.as_deref(),
            cli.verbose,
            cli.json_logs,
            toml.as_ref(),
        ))
    }
}

impl ConfigProvider for AppConfig {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("file", &self.file_name)?;
        if let Some(level) = &self.log_level {
            validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}
