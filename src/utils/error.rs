use std::fmt;
use thiserror::Error;

/// Which name field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    First,
    Last,
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameField::First => write!(f, "first name"),
            NameField::Last => write!(f, "last name"),
        }
    }
}

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("The {field} should not contain numbers.")]
    InvalidName { field: NameField, value: String },

    #[error("Please, choose only 1, 2, 3, or 4")]
    InvalidMenuChoice { input: String },

    #[error("No such file: {path}")]
    FileMissing { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Could not read console input: {0}")]
    InputError(std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Console input was closed")]
    ConsoleClosed,
}

/// How an error is surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rejected input; plain message, no technical detail.
    Validation,
    /// The enrollment file (or its directory) does not exist.
    MissingFile,
    /// Anything else that went wrong during file I/O; shown with technical detail.
    Unexpected,
    /// Bad startup configuration.
    Configuration,
}

impl RegistrationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegistrationError::InvalidName { .. } | RegistrationError::InvalidMenuChoice { .. } => {
                ErrorCategory::Validation
            }
            RegistrationError::FileMissing { .. } => ErrorCategory::MissingFile,
            RegistrationError::ConfigError { .. }
            | RegistrationError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RegistrationError::IoError(_)
            | RegistrationError::InputError(_)
            | RegistrationError::SerializationError(_)
            | RegistrationError::ConsoleClosed => ErrorCategory::Unexpected,
        }
    }

    /// Static description of the error kind, shown in the technical block.
    pub fn doc(&self) -> &'static str {
        match self {
            RegistrationError::InvalidName { .. } => {
                "A name contained characters other than letters."
            }
            RegistrationError::InvalidMenuChoice { .. } => {
                "The menu choice was not one of the listed options."
            }
            RegistrationError::FileMissing { .. } => "File or directory not found.",
            RegistrationError::IoError(_) => "The operating system reported an I/O failure.",
            RegistrationError::InputError(_) => {
                "A line typed on the console could not be read as UTF-8 text."
            }
            RegistrationError::SerializationError(_) => {
                "The file content is not a valid list of enrollment records."
            }
            RegistrationError::ConfigError { .. } => "The configuration could not be loaded.",
            RegistrationError::InvalidConfigValueError { .. } => {
                "A configuration value is out of its allowed range."
            }
            RegistrationError::ConsoleClosed => "No more input is available on the console.",
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            RegistrationError::InvalidName { .. } => "RegistrationError::InvalidName",
            RegistrationError::InvalidMenuChoice { .. } => "RegistrationError::InvalidMenuChoice",
            RegistrationError::FileMissing { .. } => "RegistrationError::FileMissing",
            RegistrationError::IoError(_) => "RegistrationError::IoError",
            RegistrationError::InputError(_) => "RegistrationError::InputError",
            RegistrationError::SerializationError(_) => "RegistrationError::SerializationError",
            RegistrationError::ConfigError { .. } => "RegistrationError::ConfigError",
            RegistrationError::InvalidConfigValueError { .. } => {
                "RegistrationError::InvalidConfigValueError"
            }
            RegistrationError::ConsoleClosed => "RegistrationError::ConsoleClosed",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RegistrationError::ConfigError { message } => {
                format!("Could not load configuration: {}", message)
            }
            RegistrationError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the --file and --config arguments and the TOML file contents"
            }
            ErrorCategory::MissingFile => {
                "Create the enrollment file (an empty JSON list '[]' is enough)"
            }
            ErrorCategory::Validation => "Re-enter the value using letters only",
            ErrorCategory::Unexpected => "Check file permissions and that the file holds valid JSON",
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistrationError>;
