// Adapters layer: concrete implementations for the terminal and the filesystem.

pub mod console;
pub mod storage;

pub use console::Console;
pub use storage::LocalStorage;
