//! Heronet: Superhero Network Analysis
//!
//! Maintains a small social graph of superheroes (heroes) and their
//! connections (links), persisted as two CSV files, with interactive
//! queries plus mutation.
//!
//! # Core Concepts
//!
//! - **Heroes**: records with an id, a name, and a creation date
//! - **Links**: undirected connections between two hero ids
//! - **GraphIndex**: derived adjacency structure, rebuilt after every
//!   mutation, answering degree and neighbor queries
//!
//! # Example
//!
//! ```no_run
//! use heronet::{CsvStore, HeroNetwork, StoreConfig};
//! use std::sync::Arc;
//!
//! let store = CsvStore::new(StoreConfig::in_dir("data"));
//! let network = HeroNetwork::load(Arc::new(store))?;
//! println!("{} heroes", network.stats().heroes);
//! # Ok::<(), heronet::NetworkError>(())
//! ```

mod graph;
pub mod mutate;
pub mod query;
pub mod storage;

pub use graph::{GraphIndex, Hero, HeroId, HeroNetwork, Link, NetworkError, NetworkResult, NetworkStats};
pub use mutate::{MutateError, MutateResult};
pub use query::{HeroReport, QueryError, QueryResult, RankedHero};
pub use storage::{next_hero_id, CsvStore, NetworkStore, StorageError, StorageResult, StoreConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
