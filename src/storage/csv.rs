//! CSV storage backend for the superhero network

use super::traits::{NetworkStore, StorageError, StorageResult, StoreConfig};
use crate::graph::{Hero, Link};
use std::path::Path;

/// CSV-backed network store
///
/// Persists the hero collection to one file (`id,name,created_at`) and
/// the link collection to another (`source,target`), each a header row
/// plus data rows. Every save rewrites the whole file; the O(n) cost
/// per mutation is an accepted trade-off at interactive scale.
#[derive(Debug, Clone)]
pub struct CsvStore {
    config: StoreConfig,
}

impl CsvStore {
    /// Create a store over the given file locations
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// The file locations this store reads and writes
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn read_all<T>(path: &Path) -> Result<Vec<T>, csv::Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut reader = csv::Reader::from_path(path)?;
        reader.deserialize().collect()
    }

    fn write_all<T>(path: &Path, records: &[T]) -> Result<(), csv::Error>
    where
        T: serde::Serialize,
    {
        let mut writer = csv::Writer::from_path(path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl NetworkStore for CsvStore {
    fn load(&self) -> StorageResult<(Vec<Hero>, Vec<Link>)> {
        let heroes: Vec<Hero> =
            Self::read_all(&self.config.heroes_path).map_err(|source| StorageError::Load {
                path: self.config.heroes_path.clone(),
                source,
            })?;
        let links: Vec<Link> =
            Self::read_all(&self.config.links_path).map_err(|source| StorageError::Load {
                path: self.config.links_path.clone(),
                source,
            })?;
        tracing::debug!(
            heroes = heroes.len(),
            links = links.len(),
            "loaded network from disk"
        );
        Ok((heroes, links))
    }

    fn save_heroes(&self, heroes: &[Hero]) -> StorageResult<()> {
        Self::write_all(&self.config.heroes_path, heroes).map_err(|source| {
            StorageError::Write {
                path: self.config.heroes_path.clone(),
                source,
            }
        })?;
        tracing::debug!(heroes = heroes.len(), "saved heroes file");
        Ok(())
    }

    fn save_links(&self, links: &[Link]) -> StorageResult<()> {
        Self::write_all(&self.config.links_path, links).map_err(|source| StorageError::Write {
            path: self.config.links_path.clone(),
            source,
        })?;
        tracing::debug!(links = links.len(), "saved links file");
        Ok(())
    }
}
