//! End-to-end flow over a CSV-backed network: load, query, mutate,
//! and observe persistence across separate engine instances.

use chrono::NaiveDate;
use heronet::{CsvStore, HeroId, HeroNetwork, NetworkError, QueryError, StoreConfig};
use std::path::Path;
use std::sync::Arc;

fn seed(dir: &Path) {
    std::fs::write(
        dir.join("superheroes.csv"),
        "id,name,created_at\n\
         1,dataiskole,2024-01-05\n\
         2,Spider-Man,2024-01-10\n\
         3,Iron Man,2024-01-12\n\
         4,Hulk,2024-01-15\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("links.csv"),
        "source,target\n1,2\n3,1\n2,3\n",
    )
    .unwrap();
}

fn open(dir: &Path) -> HeroNetwork {
    let store = CsvStore::new(StoreConfig::in_dir(dir));
    HeroNetwork::load(Arc::new(store)).unwrap()
}

#[test]
fn loads_and_answers_basic_queries() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());
    let network = open(dir.path());

    let stats = network.stats();
    assert_eq!(stats.heroes, 4);
    assert_eq!(stats.links, 3);

    // Everyone in the triangle has degree 2; Hulk has none
    let ranked = network.top_connected(3).unwrap();
    assert_eq!(ranked.len(), 3);
    assert!(ranked.iter().all(|r| r.degree == 2));
    // Tie-break follows first appearance in the links file
    assert_eq!(ranked[0].name, "dataiskole");
    assert_eq!(ranked[1].name, "Spider-Man");
    assert_eq!(ranked[2].name, "Iron Man");
}

#[test]
fn report_collects_friends_from_both_link_directions() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());
    let network = open(dir.path());

    // dataiskole is source of (1,2) and target of (3,1)
    let report = network.hero_report("dataiskole").unwrap();
    assert_eq!(
        report.created_at,
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    );
    assert_eq!(report.friends, vec!["Spider-Man", "Iron Man"]);

    let err = network.hero_report("Batman").unwrap_err();
    assert!(matches!(
        err,
        NetworkError::Query(QueryError::HeroNotFound(_))
    ));
}

#[test]
fn mutations_are_visible_to_a_fresh_engine() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());

    let mut network = open(dir.path());
    let id = network.add_hero("Thor").unwrap();
    assert_eq!(id, HeroId::new(5));
    network.add_link("Thor", "Hulk").unwrap();

    let fresh = open(dir.path());
    assert_eq!(fresh.stats().heroes, 5);
    assert_eq!(fresh.stats().links, 4);
    let report = fresh.hero_report("Hulk").unwrap();
    assert_eq!(report.friends, vec!["Thor"]);
}

#[test]
fn dangling_link_endpoint_surfaces_as_inconsistency() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("superheroes.csv"),
        "id,name,created_at\n1,Solo,2024-01-05\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("links.csv"), "source,target\n1,99\n").unwrap();

    let network = open(dir.path());
    let err = network.hero_report("Solo").unwrap_err();
    assert!(matches!(
        err,
        NetworkError::Query(QueryError::UnresolvedId(id)) if id == HeroId::new(99)
    ));
    let err = network.top_connected(3).unwrap_err();
    assert!(matches!(
        err,
        NetworkError::Query(QueryError::UnresolvedId(_))
    ));
}

#[test]
fn round_trip_preserves_collections_exactly() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());
    let network = open(dir.path());

    let store = CsvStore::new(StoreConfig::in_dir(dir.path()));
    use heronet::NetworkStore;
    store.save_heroes(network.heroes()).unwrap();
    store.save_links(network.links()).unwrap();

    let reloaded = open(dir.path());
    assert_eq!(reloaded.heroes(), network.heroes());
    assert_eq!(reloaded.links(), network.links());
}
