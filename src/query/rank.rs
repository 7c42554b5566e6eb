//! Most-connected ranking with name resolution

use super::types::{QueryError, QueryResult, RankedHero};
use crate::graph::{GraphIndex, Hero, HeroId};

/// Resolve an id to the first matching hero name in collection order
pub(crate) fn resolve_id(heroes: &[Hero], id: HeroId) -> Option<&str> {
    heroes
        .iter()
        .find(|hero| hero.id == id)
        .map(|hero| hero.name.as_str())
}

/// The `k` most connected heroes, by name, descending by degree
///
/// Ranking and tie-break order come from
/// [`GraphIndex::top_k_by_degree`]. A ranked id with no hero record is
/// reported as [`QueryError::UnresolvedId`] rather than skipped, since
/// it means the links file references a hero that does not exist.
pub fn top_connected(
    heroes: &[Hero],
    index: &GraphIndex,
    k: usize,
) -> QueryResult<Vec<RankedHero>> {
    index
        .top_k_by_degree(k)
        .into_iter()
        .map(|(id, degree)| {
            resolve_id(heroes, id)
                .map(|name| RankedHero {
                    name: name.to_string(),
                    degree,
                })
                .ok_or(QueryError::UnresolvedId(id))
        })
        .collect()
}
