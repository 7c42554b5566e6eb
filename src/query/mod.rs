//! Query system for the superhero network
//!
//! Stateless analytics over the loaded collections and the graph
//! index: counts, recency filtering, degree ranking, and the
//! named-hero neighbor report. Nothing in this module mutates state.

mod rank;
mod report;
mod stats;
mod types;

pub use rank::top_connected;
pub use report::neighbor_report;
pub use stats::{count_heroes, count_links, recent_heroes};
pub use types::{HeroReport, QueryError, QueryResult, RankedHero};
