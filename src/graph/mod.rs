//! Core graph data structures

mod hero;
mod index;
mod link;
mod network;

pub use hero::{Hero, HeroId};
pub use index::GraphIndex;
pub use link::Link;
pub use network::{HeroNetwork, NetworkError, NetworkResult, NetworkStats};
