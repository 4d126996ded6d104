use crate::utils::error::{NameField, RegistrationError, Result};

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A name may be empty or consist of alphabetic characters only.
pub fn validate_name(field: NameField, value: &str) -> Result<()> {
    if value.chars().all(char::is_alphabetic) {
        Ok(())
    } else {
        Err(RegistrationError::InvalidName {
            field,
            value: value.to_string(),
        })
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(RegistrationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RegistrationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    if LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        return Ok(());
    }
    Err(RegistrationError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: level.to_string(),
        reason: format!("Unknown log level. Valid levels: {}", LOG_LEVELS.join(", ")),
    })
}
