//! Link representation: a connection between two heroes

use super::hero::HeroId;
use serde::{Deserialize, Serialize};

/// A connection between two heroes: one row of the links CSV file
///
/// Stored as an ordered `(source, target)` pair, but treated as
/// undirected by the analytics: a link contributes to the degree and
/// neighbor set of both endpoints. Self-loops and duplicate links are
/// permitted and preserved as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Id of the first endpoint
    pub source: HeroId,
    /// Id of the second endpoint
    pub target: HeroId,
}

impl Link {
    /// Create a new link between two hero ids
    pub fn new(source: HeroId, target: HeroId) -> Self {
        Self { source, target }
    }

    /// Check whether the given id is one of this link's endpoints
    pub fn touches(&self, id: HeroId) -> bool {
        self.source == id || self.target == id
    }

    /// The endpoint opposite to `id`, if `id` is an endpoint
    ///
    /// For a self-loop both endpoints equal `id`, so the "other" end is
    /// `id` itself.
    pub fn other_end(&self, id: HeroId) -> Option<HeroId> {
        if self.source == id {
            Some(self.target)
        } else if self.target == id {
            Some(self.source)
        } else {
            None
        }
    }
}
