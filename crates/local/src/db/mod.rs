mod file;
mod memory;

pub use file::{FileKeyValueStore, STORAGE_FILE};
pub use memory::InMemoryKeyValueStore;
