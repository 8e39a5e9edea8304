// String-keyed JSON store
// Mirrors the localStorage contract the app was designed around: whole
// documents per key, no partial updates, no index

mod collection;
mod file;
mod memory;
mod storage;

// Public API
pub use collection::{load_collection, load_value, save_collection, save_value};
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use storage::Storage;
