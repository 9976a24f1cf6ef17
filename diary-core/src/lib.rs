pub mod config;
pub mod errors;
pub mod store;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use errors::{StoreError, StoreResult};
pub use store::{EntryKey, EntryStore};
