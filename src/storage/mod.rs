//! Storage backends for the superhero network
//!
//! Backends implement the `NetworkStore` trait. The production
//! implementation is `CsvStore`, which persists the two collections as
//! CSV files rewritten in full on every save.

mod csv;
mod traits;

pub use csv::CsvStore;
pub use traits::{next_hero_id, NetworkStore, StorageError, StorageResult, StoreConfig};
