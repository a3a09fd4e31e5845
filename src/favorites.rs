// src/favorites.rs
use parking_lot::Mutex;

use crate::db::{kv, Database};
use crate::domain::ListingId;
use crate::errors::ServerError;

/// Key of the single kv entry holding the favorites list.
pub const FAVORITES_KEY: &str = "favorites";

/// User-curated listing ids. Membership is what matters; insertion order is
/// only kept so the persisted list reads naturally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesSet {
    ids: Vec<ListingId>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ListingId) -> bool {
        self.ids.contains(&id)
    }

    /// Flip membership of `id`. Returns `true` when `id` is now a favorite.
    /// The id does not have to exist in the store.
    pub fn toggle(&mut self, id: ListingId) -> bool {
        match self.ids.iter().position(|&x| x == id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(id);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.ids)
    }

    /// Parse a persisted list. Duplicates collapse to one entry.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let parsed: Vec<ListingId> = serde_json::from_str(raw)?;
        let mut set = FavoritesSet::new();
        for id in parsed {
            if !set.contains(id) {
                set.ids.push(id);
            }
        }
        Ok(set)
    }
}

/// The favorites set plus its persisted copy. Every toggle rewrites the kv entry
/// while the lock is held, so writes never interleave.
pub struct Favorites {
    db: Database,
    set: Mutex<FavoritesSet>,
}

impl Favorites {
    /// Read the persisted set once. Missing or malformed data yields an empty set.
    pub fn load(db: Database) -> Result<Self, ServerError> {
        let raw = db.with_conn(|conn| kv::get_value(conn, FAVORITES_KEY))?;

        let set = match raw {
            None => FavoritesSet::new(),
            Some(raw) => FavoritesSet::from_json(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring malformed favorites entry");
                FavoritesSet::new()
            }),
        };

        tracing::debug!(count = set.len(), "favorites loaded");
        Ok(Self {
            db,
            set: Mutex::new(set),
        })
    }

    pub fn snapshot(&self) -> FavoritesSet {
        self.set.lock().clone()
    }

    pub fn contains(&self, id: ListingId) -> bool {
        self.set.lock().contains(id)
    }

    /// Flip `id` and persist. Returns whether `id` is now a favorite.
    pub fn toggle(&self, id: ListingId) -> Result<bool, ServerError> {
        let mut set = self.set.lock();
        let mut next = set.clone();
        let now_favorite = next.toggle(id);

        let json = next
            .to_json()
            .map_err(|e| ServerError::DbError(format!("encode favorites failed: {e}")))?;
        self.db
            .with_conn(|conn| kv::put_value(conn, FAVORITES_KEY, &json))?;

        *set = next;
        tracing::info!(listing_id = id, favorite = now_favorite, "favorite toggled");
        Ok(now_favorite)
    }
}
