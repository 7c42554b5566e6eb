//! Named-hero neighbor report

use super::rank::resolve_id;
use super::types::{HeroReport, QueryError, QueryResult};
use crate::graph::{GraphIndex, Hero};

/// Report on one hero looked up by exact name
///
/// Duplicate names are not an error; the first match in collection
/// order wins. Friends are the hero's neighbors in the index, resolved
/// to names in id order so the output is reproducible regardless of
/// query direction. A neighbor id with no hero record aborts with
/// [`QueryError::UnresolvedId`].
pub fn neighbor_report(heroes: &[Hero], index: &GraphIndex, name: &str) -> QueryResult<HeroReport> {
    let hero = heroes
        .iter()
        .find(|hero| hero.name == name)
        .ok_or_else(|| QueryError::HeroNotFound(name.to_string()))?;

    let friends = index
        .neighbors(hero.id)
        .into_iter()
        .map(|id| {
            resolve_id(heroes, id)
                .map(str::to_string)
                .ok_or(QueryError::UnresolvedId(id))
        })
        .collect::<QueryResult<Vec<_>>>()?;

    Ok(HeroReport {
        name: hero.name.clone(),
        created_at: hero.created_at,
        friends,
    })
}
