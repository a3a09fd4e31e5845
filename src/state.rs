// src/state.rs
use chrono::Duration;
use parking_lot::Mutex;

use crate::config::AppConfig;
use crate::db::Database;
use crate::errors::ServerError;
use crate::favorites::Favorites;
use crate::map::MapBackend;
use crate::notifications::NotificationFeed;
use crate::store::{ListingStore, SharedStore};

/// Everything a request handler or simulation task can reach.
pub struct AppState {
    pub store: SharedStore,
    pub favorites: Favorites,
    pub notifications: Mutex<NotificationFeed>,
    pub map: MapBackend,
    pub toast_ttl: Duration,
}

impl AppState {
    pub fn new(config: &AppConfig, db: Database, store: ListingStore) -> Result<Self, ServerError> {
        Ok(Self {
            store: SharedStore::new(store),
            favorites: Favorites::load(db)?,
            notifications: Mutex::new(NotificationFeed::new(
                config.simulation.notification_capacity,
            )),
            map: MapBackend::select(&config.map),
            toast_ttl: Duration::seconds(config.simulation.toast_ttl_secs),
        })
    }
}
