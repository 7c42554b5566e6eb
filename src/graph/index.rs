//! GraphIndex: derived adjacency structure for degree and neighbor queries

use super::hero::HeroId;
use super::link::Link;
use std::collections::{BTreeSet, HashMap};

/// In-memory adjacency index over the link collection
///
/// Built in a single O(|links|) pass and rebuilt wholesale whenever the
/// underlying collections change — never patched incrementally, so a
/// stale index cannot outlive a mutation.
///
/// Degree counts occurrences: every appearance of an id in a source or
/// target column adds one, so a self-loop contributes 2 to its hero's
/// degree and duplicate links count each time.
#[derive(Debug, Clone, Default)]
pub struct GraphIndex {
    /// Occurrence count per id across both endpoint columns
    degrees: HashMap<HeroId, usize>,
    /// Ids in first-seen order during the link scan (source before
    /// target within a row); fixes the tie-break for ranking
    first_seen: Vec<HeroId>,
    /// Neighbor sets, deduplicated and ordered by id, self excluded
    adjacency: HashMap<HeroId, BTreeSet<HeroId>>,
}

impl GraphIndex {
    /// Build the index from a link collection
    pub fn build(links: &[Link]) -> Self {
        let mut index = Self::default();
        for link in links {
            index.record(link.source);
            index.record(link.target);
            if link.source != link.target {
                index
                    .adjacency
                    .entry(link.source)
                    .or_default()
                    .insert(link.target);
                index
                    .adjacency
                    .entry(link.target)
                    .or_default()
                    .insert(link.source);
            }
        }
        tracing::debug!(
            links = links.len(),
            heroes_seen = index.first_seen.len(),
            "rebuilt graph index"
        );
        index
    }

    fn record(&mut self, id: HeroId) {
        let count = self.degrees.entry(id).or_insert(0);
        if *count == 0 {
            self.first_seen.push(id);
        }
        *count += 1;
    }

    /// Number of link endpoints referencing this id
    ///
    /// Zero for ids that appear in no link, including ids absent from
    /// the hero collection entirely.
    pub fn degree(&self, id: HeroId) -> usize {
        self.degrees.get(&id).copied().unwrap_or(0)
    }

    /// Ids connected to `id`, ordered by id, excluding `id` itself
    pub fn neighbors(&self, id: HeroId) -> Vec<HeroId> {
        self.adjacency
            .get(&id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// The `k` highest-degree ids, descending
    ///
    /// Ties keep first-seen order from the link scan. The sort is
    /// stable over the first-seen sequence, so equal-degree ids come
    /// out in the order their first link row was read.
    pub fn top_k_by_degree(&self, k: usize) -> Vec<(HeroId, usize)> {
        let mut ranked: Vec<(HeroId, usize)> = self
            .first_seen
            .iter()
            .map(|&id| (id, self.degree(id)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);
        ranked
    }
}
