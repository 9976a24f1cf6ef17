mod entry_key;
mod entry_store;
mod store_paths;

pub use entry_key::EntryKey;
pub use entry_store::EntryStore;
