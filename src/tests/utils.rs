use crate::config::AppConfig;
use crate::db::connection::{init_db, Database};
use crate::domain::{Listing, ListingId, TransactionType};
use crate::seed::{default_agent, seed_listings};
use crate::state::AppState;
use crate::store::ListingStore;
use astra::Response;
use chrono::NaiveDate;
use std::io::Read;
use tempfile::TempDir;

/// Initialize a fresh test DB using the production schema.
/// Keep the `TempDir` alive for as long as the database is used.
pub fn init_test_db() -> (TempDir, Database) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("test.sqlite3");
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    (dir, db)
}

/// App state over the seed listings with the default config.
pub fn seeded_state() -> (TempDir, AppState) {
    state_with(&AppConfig::default(), seed_listings())
}

pub fn state_with(config: &AppConfig, listings: Vec<Listing>) -> (TempDir, AppState) {
    let (dir, db) = init_test_db();
    let store = ListingStore::new(listings).expect("unique fixture ids");
    let state = AppState::new(config, db, store).expect("build state");
    (dir, state)
}

/// A plain 전세 listing; override fields with struct update syntax.
pub fn listing(id: ListingId) -> Listing {
    Listing {
        id,
        title: format!("Test Listing {id}"),
        address: format!("서울시 강남구 테스트로 {id}"),
        district: "강남구".into(),
        property_type: "원룸".into(),
        sale_type: TransactionType::LeaseDeposit,
        price: 30_000,
        monthly_rent: 0,
        area: 30.0,
        rooms: 1,
        bathrooms: 1,
        floor: 3,
        total_floors: 10,
        build_year: 2020,
        options: vec!["에어컨".into()],
        description: "테스트 매물".into(),
        lat: 37.5,
        lng: 127.0,
        image: format!("https://picsum.photos/seed/test{id}/400/300"),
        agent: default_agent(),
        premium: false,
        views: 0,
        created_at: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
    }
}

pub fn ids(listings: &[Listing]) -> Vec<ListingId> {
    listings.iter().map(|l| l.id).collect()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .expect("read body");
    body
}
