pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{Console, LocalStorage};
pub use config::{AppConfig, DEFAULT_FILE_NAME};
pub use core::{
    file_processor::FileProcessor,
    registration::{AppState, RegistrationSession},
};
pub use domain::model::{MenuChoice, PersonName, Student};
pub use utils::error::{RegistrationError, Result};
