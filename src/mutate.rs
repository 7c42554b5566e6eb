//! Validated append operations on the in-memory collections
//!
//! These functions mutate collections only; they perform no I/O. The
//! engine (`HeroNetwork`) sequences each mutation as
//! mutate → save through the store → rebuild the graph index.

use crate::graph::{Hero, HeroId, Link};
use crate::storage::next_hero_id;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while applying a mutation
#[derive(Debug, Error)]
pub enum MutateError {
    #[error("hero not found: {0}")]
    HeroNotFound(String),
}

/// Result type for mutations
pub type MutateResult<T> = Result<T, MutateError>;

/// Append a new hero with the next free id and the given creation date
///
/// Returns the assigned id. Ids are max(existing)+1, starting at 1 for
/// an empty collection; names are not checked for uniqueness.
pub fn add_hero(heroes: &mut Vec<Hero>, name: impl Into<String>, created_at: NaiveDate) -> HeroId {
    let id = next_hero_id(heroes);
    heroes.push(Hero::new(id, name, created_at));
    id
}

/// Resolve a name to the first matching hero in collection order
pub fn resolve_name(heroes: &[Hero], name: &str) -> Option<HeroId> {
    heroes.iter().find(|hero| hero.name == name).map(|h| h.id)
}

/// Append a link between two heroes identified by name
///
/// Both names are resolved (first match on duplicates) before the
/// collection is touched, so a failed resolution leaves `links`
/// unchanged. Self-loops and duplicate links are accepted.
pub fn add_link(
    heroes: &[Hero],
    links: &mut Vec<Link>,
    name1: &str,
    name2: &str,
) -> MutateResult<Link> {
    let source = resolve_name(heroes, name1)
        .ok_or_else(|| MutateError::HeroNotFound(name1.to_string()))?;
    let target = resolve_name(heroes, name2)
        .ok_or_else(|| MutateError::HeroNotFound(name2.to_string()))?;
    let link = Link::new(source, target);
    links.push(link);
    Ok(link)
}
