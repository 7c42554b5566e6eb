//! Storage trait definitions

use crate::graph::{Hero, HeroId, Link};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to load {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// File locations for the two backing tables
///
/// Passed to the store at construction so there is no process-global
/// path state.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the heroes CSV file (`id,name,created_at`)
    pub heroes_path: PathBuf,
    /// Path to the links CSV file (`source,target`)
    pub links_path: PathBuf,
}

impl StoreConfig {
    /// Conventional file names under a data directory:
    /// `superheroes.csv` and `links.csv`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            heroes_path: dir.join("superheroes.csv"),
            links_path: dir.join("links.csv"),
        }
    }
}

/// Trait for network storage backends
///
/// Both files are read in full and rewritten in full; there is no
/// partial or append-only write visible to callers. Concurrent writers
/// are not guarded against — last write wins.
pub trait NetworkStore: Send + Sync {
    /// Load both collections from durable storage
    ///
    /// Fails if either file is missing or malformed (wrong columns,
    /// unparseable ids or dates). Collection order follows file row
    /// order.
    fn load(&self) -> StorageResult<(Vec<Hero>, Vec<Link>)>;

    /// Overwrite the heroes file with the given collection
    fn save_heroes(&self, heroes: &[Hero]) -> StorageResult<()>;

    /// Overwrite the links file with the given collection
    fn save_links(&self, links: &[Link]) -> StorageResult<()>;
}

/// The id to assign to the next new hero: max existing id + 1, or 1
/// when the collection is empty
pub fn next_hero_id(heroes: &[Hero]) -> HeroId {
    heroes
        .iter()
        .map(|hero| hero.id)
        .max()
        .map(|id| id.next())
        .unwrap_or_else(|| HeroId::new(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn hero(id: u64) -> Hero {
        Hero::new(
            HeroId::new(id),
            format!("hero-{id}"),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_next_id_is_max_plus_one() {
        let heroes = vec![hero(3), hero(7), hero(5)];
        assert_eq!(next_hero_id(&heroes), HeroId::new(8));
    }

    #[test]
    fn test_next_id_on_empty_collection_is_one() {
        assert_eq!(next_hero_id(&[]), HeroId::new(1));
    }
}
