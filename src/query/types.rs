//! Shared query types and errors

use crate::graph::HeroId;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while answering a query
#[derive(Debug, Error)]
pub enum QueryError {
    /// Named lookup found no match — a legitimate absence, reported to
    /// the user without aborting the session
    #[error("hero not found: {0}")]
    HeroNotFound(String),

    /// A link references an id with no hero record — the heroes and
    /// links files are inconsistent. Distinct from `HeroNotFound`
    /// because it signals data corruption, not a bad query.
    #[error("no hero record for id {0}: heroes and links files are inconsistent")]
    UnresolvedId(HeroId),
}

/// Result type for queries
pub type QueryResult<T> = Result<T, QueryError>;

/// One entry of the most-connected ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedHero {
    /// Hero name, resolved from the ranked id
    pub name: String,
    /// Number of link endpoints referencing the hero
    pub degree: usize,
}

/// Everything the network knows about one named hero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroReport {
    /// The queried name (first match on duplicates)
    pub name: String,
    /// When the hero was added
    pub created_at: NaiveDate,
    /// Names of connected heroes, ordered by hero id
    pub friends: Vec<String>,
}
