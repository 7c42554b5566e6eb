//! HeroNetwork: the main entry point for the superhero network

use super::hero::{Hero, HeroId};
use super::index::GraphIndex;
use super::link::Link;
use crate::mutate::{self, MutateError};
use crate::query::{self, HeroReport, QueryError, RankedHero};
use crate::storage::{NetworkStore, StorageError};
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur in network operations
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("query error: {0}")]
    Query(#[from] QueryError),

    #[error("mutation error: {0}")]
    Mutate(#[from] MutateError),
}

/// Result type for network operations
pub type NetworkResult<T> = Result<T, NetworkError>;

/// Counts shown by the basic-stats view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkStats {
    /// Distinct hero ids
    pub heroes: usize,
    /// Link rows, duplicates included
    pub links: usize,
}

/// The loaded superhero network
///
/// Owns the in-memory collections, the store they came from, and the
/// derived graph index. Queries read the collections and index;
/// mutations follow a fixed sequence: apply to the collection, write
/// the whole file through the store, rebuild the index. A mutation
/// whose write fails leaves the file untouched but may leave the
/// in-memory collection ahead of it; callers recover with `reload()`.
pub struct HeroNetwork {
    store: Arc<dyn NetworkStore>,
    heroes: Vec<Hero>,
    links: Vec<Link>,
    index: GraphIndex,
}

impl HeroNetwork {
    /// Load the network from the given store
    pub fn load(store: Arc<dyn NetworkStore>) -> NetworkResult<Self> {
        let (heroes, links) = store.load()?;
        let index = GraphIndex::build(&links);
        Ok(Self {
            store,
            heroes,
            links,
            index,
        })
    }

    /// Re-read both collections from the store, discarding in-memory
    /// state, and rebuild the index
    pub fn reload(&mut self) -> NetworkResult<()> {
        let (heroes, links) = self.store.load()?;
        self.heroes = heroes;
        self.links = links;
        self.index = GraphIndex::build(&self.links);
        Ok(())
    }

    /// The loaded hero collection, in file order
    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    /// The loaded link collection, in file order
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// The current graph index
    pub fn index(&self) -> &GraphIndex {
        &self.index
    }

    // === Queries ===

    /// Distinct-hero and raw-link counts
    pub fn stats(&self) -> NetworkStats {
        NetworkStats {
            heroes: query::count_heroes(&self.heroes),
            links: query::count_links(&self.links),
        }
    }

    /// Heroes added within the last `window_days` days of `today`,
    /// boundary inclusive
    pub fn recent_heroes(&self, today: NaiveDate, window_days: u64) -> Vec<&Hero> {
        query::recent_heroes(&self.heroes, today, window_days)
    }

    /// The `k` most connected heroes by name
    pub fn top_connected(&self, k: usize) -> NetworkResult<Vec<RankedHero>> {
        Ok(query::top_connected(&self.heroes, &self.index, k)?)
    }

    /// Report on one hero looked up by exact name
    pub fn hero_report(&self, name: &str) -> NetworkResult<HeroReport> {
        Ok(query::neighbor_report(&self.heroes, &self.index, name)?)
    }

    // === Mutations ===

    /// Add a hero dated today, write through, and return the new id
    pub fn add_hero(&mut self, name: impl Into<String>) -> NetworkResult<HeroId> {
        self.add_hero_dated(name, Local::now().date_naive())
    }

    /// Add a hero with an explicit creation date
    pub fn add_hero_dated(
        &mut self,
        name: impl Into<String>,
        created_at: NaiveDate,
    ) -> NetworkResult<HeroId> {
        let name = name.into();
        let id = mutate::add_hero(&mut self.heroes, name.clone(), created_at);
        self.store.save_heroes(&self.heroes)?;
        self.index = GraphIndex::build(&self.links);
        tracing::info!(%id, name, "added hero");
        Ok(id)
    }

    /// Add a link between two heroes by name and write through
    ///
    /// Fails without touching the collection or the file if either
    /// name does not resolve.
    pub fn add_link(&mut self, name1: &str, name2: &str) -> NetworkResult<Link> {
        let link = mutate::add_link(&self.heroes, &mut self.links, name1, name2)?;
        self.store.save_links(&self.links)?;
        self.index = GraphIndex::build(&self.links);
        tracing::info!(source = %link.source, target = %link.target, "added link");
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{CsvStore, StoreConfig};

    fn seeded_network(dir: &std::path::Path) -> HeroNetwork {
        std::fs::write(
            dir.join("superheroes.csv"),
            "id,name,created_at\n1,Spider-Man,2024-01-10\n2,Iron Man,2024-01-12\n3,Hulk,2024-01-15\n",
        )
        .unwrap();
        std::fs::write(dir.join("links.csv"), "source,target\n1,2\n1,3\n").unwrap();
        let store = CsvStore::new(StoreConfig::in_dir(dir));
        HeroNetwork::load(Arc::new(store)).unwrap()
    }

    #[test]
    fn test_load_builds_index() {
        let dir = tempfile::tempdir().unwrap();
        let network = seeded_network(dir.path());
        assert_eq!(network.stats(), NetworkStats { heroes: 3, links: 2 });
        assert_eq!(network.index().degree(HeroId::new(1)), 2);
    }

    #[test]
    fn test_add_hero_persists_and_assigns_next_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut network = seeded_network(dir.path());
        let id = network.add_hero("Thor").unwrap();
        assert_eq!(id, HeroId::new(4));

        // A fresh load sees the new hero
        let store = CsvStore::new(StoreConfig::in_dir(dir.path()));
        let reloaded = HeroNetwork::load(Arc::new(store)).unwrap();
        assert_eq!(reloaded.stats().heroes, 4);
        assert_eq!(reloaded.heroes()[3].name, "Thor");
    }

    #[test]
    fn test_add_link_persists_and_rebuilds_index() {
        let dir = tempfile::tempdir().unwrap();
        let mut network = seeded_network(dir.path());
        network.add_link("Iron Man", "Hulk").unwrap();
        assert_eq!(network.index().degree(HeroId::new(2)), 2);

        let contents = std::fs::read_to_string(dir.path().join("links.csv")).unwrap();
        assert_eq!(contents, "source,target\n1,2\n1,3\n2,3\n");
    }

    #[test]
    fn test_add_link_unknown_name_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut network = seeded_network(dir.path());
        let before = std::fs::read_to_string(dir.path().join("links.csv")).unwrap();
        assert!(network.add_link("Iron Man", "Nobody").is_err());
        let after = std::fs::read_to_string(dir.path().join("links.csv")).unwrap();
        assert_eq!(before, after);
        assert_eq!(network.links().len(), 2);
    }

    #[test]
    fn test_reload_picks_up_external_changes() {
        let dir = tempfile::tempdir().unwrap();
        let mut network = seeded_network(dir.path());
        std::fs::write(
            dir.path().join("links.csv"),
            "source,target\n1,2\n1,3\n2,3\n",
        )
        .unwrap();
        network.reload().unwrap();
        assert_eq!(network.stats().links, 3);
        assert_eq!(network.index().degree(HeroId::new(3)), 2);
    }
}
