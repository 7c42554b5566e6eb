//! Collection-level statistics and recency filtering

use crate::graph::{Hero, Link};
use chrono::{Days, NaiveDate};
use std::collections::HashSet;

/// Number of distinct hero ids in the collection
///
/// Duplicate id rows count once; this intentionally differs from
/// [`count_links`], which counts rows.
pub fn count_heroes(heroes: &[Hero]) -> usize {
    heroes
        .iter()
        .map(|hero| hero.id)
        .collect::<HashSet<_>>()
        .len()
}

/// Number of link rows, duplicates and self-loops included
pub fn count_links(links: &[Link]) -> usize {
    links.len()
}

/// Heroes added within the last `window_days` days of `today`,
/// boundary inclusive, in collection order
///
/// A hero dated exactly `today - window_days` is included. An empty
/// result means no hero falls in the window; callers distinguish it by
/// length, there is no sentinel.
pub fn recent_heroes(heroes: &[Hero], today: NaiveDate, window_days: u64) -> Vec<&Hero> {
    let cutoff = today
        .checked_sub_days(Days::new(window_days))
        .unwrap_or(NaiveDate::MIN);
    heroes
        .iter()
        .filter(|hero| hero.created_at >= cutoff)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::HeroId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hero(id: u64, created: NaiveDate) -> Hero {
        Hero::new(HeroId::new(id), format!("hero-{id}"), created)
    }

    #[test]
    fn test_count_heroes_dedupes_ids() {
        let heroes = vec![
            hero(1, date(2024, 1, 1)),
            hero(2, date(2024, 1, 1)),
            hero(1, date(2024, 1, 2)),
        ];
        assert_eq!(count_heroes(&heroes), 2);
    }

    #[test]
    fn test_count_links_is_raw_row_count() {
        let links = vec![
            Link::new(HeroId::new(1), HeroId::new(2)),
            Link::new(HeroId::new(1), HeroId::new(2)),
            Link::new(HeroId::new(3), HeroId::new(3)),
        ];
        assert_eq!(count_links(&links), 3);
    }

    #[test]
    fn test_recent_heroes_boundary_is_inclusive() {
        let today = date(2024, 6, 10);
        let heroes = vec![
            hero(1, date(2024, 6, 7)),  // exactly today - 3: included
            hero(2, date(2024, 6, 6)),  // one day too old
            hero(3, date(2024, 6, 10)), // today
        ];
        let recent = recent_heroes(&heroes, today, 3);
        let ids: Vec<_> = recent.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![HeroId::new(1), HeroId::new(3)]);
    }

    #[test]
    fn test_recent_heroes_preserves_collection_order() {
        let today = date(2024, 6, 10);
        let heroes = vec![
            hero(5, date(2024, 6, 10)),
            hero(1, date(2024, 6, 9)),
            hero(9, date(2024, 6, 8)),
        ];
        let ids: Vec<_> = recent_heroes(&heroes, today, 3)
            .iter()
            .map(|h| h.id)
            .collect();
        assert_eq!(ids, vec![HeroId::new(5), HeroId::new(1), HeroId::new(9)]);
    }

    #[test]
    fn test_recent_heroes_empty_window() {
        let heroes = vec![hero(1, date(2020, 1, 1))];
        assert!(recent_heroes(&heroes, date(2024, 6, 10), 3).is_empty());
    }
}
