use crate::db::kv;
use crate::favorites::{Favorites, FavoritesSet, FAVORITES_KEY};
use crate::tests::utils::init_test_db;

#[test]
fn toggle_twice_restores_membership() {
    let mut set = FavoritesSet::new();

    assert!(set.toggle(7));
    assert!(set.contains(7));
    assert_eq!(set.to_json().unwrap(), "[7]");

    assert!(!set.toggle(7));
    assert!(set.is_empty());
}

#[test]
fn from_json_collapses_duplicates() {
    let set = FavoritesSet::from_json("[3, 1, 3, 2, 1]").unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(set.to_json().unwrap(), "[3,1,2]");
}

#[test]
fn toggles_survive_reload() {
    let (_dir, db) = init_test_db();

    let favorites = Favorites::load(db.clone()).unwrap();
    assert!(favorites.snapshot().is_empty());
    assert!(favorites.toggle(4).unwrap());
    assert!(favorites.toggle(9).unwrap());
    assert!(!favorites.toggle(4).unwrap());

    let reloaded = Favorites::load(db.clone()).unwrap();
    assert_eq!(reloaded.snapshot().len(), 1);
    assert!(reloaded.contains(9));
    assert!(!reloaded.contains(4));

    let stored = db
        .with_conn(|conn| kv::get_value(conn, FAVORITES_KEY))
        .unwrap();
    assert_eq!(stored.as_deref(), Some("[9]"));
}

#[test]
fn malformed_entry_loads_as_empty() {
    let (_dir, db) = init_test_db();
    db.with_conn(|conn| kv::put_value(conn, FAVORITES_KEY, "{not json"))
        .unwrap();

    let favorites = Favorites::load(db).unwrap();
    assert!(favorites.snapshot().is_empty());

    // The next toggle overwrites the broken entry.
    assert!(favorites.toggle(2).unwrap());
}

#[test]
fn ids_without_listing_are_kept() {
    let (_dir, db) = init_test_db();
    let favorites = Favorites::load(db.clone()).unwrap();

    assert!(favorites.toggle(9_999).unwrap());
    assert!(Favorites::load(db).unwrap().contains(9_999));
}
