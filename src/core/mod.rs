pub mod file_processor;
pub mod registration;

pub use crate::domain::model::{MenuChoice, Student};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
