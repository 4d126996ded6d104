use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn file_name(&self) -> &str;
    fn verbose(&self) -> bool;
    fn log_level(&self) -> Option<&str>;
}
