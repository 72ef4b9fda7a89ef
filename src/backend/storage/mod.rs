//! Persistent key-value storage, the desktop counterpart of browser `localStorage`.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::utils::Result;

/// Synchronous string key-value store.
///
/// The app runs on a single thread, so implementations use interior
/// mutability without locks.
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}
