// src/store.rs
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::{Listing, ListingId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("listing {0} not found")]
    NotFound(ListingId),

    #[error("duplicate listing id {0}")]
    DuplicateId(ListingId),

    #[error("new listing id {id} must be greater than current max {max}")]
    IdNotAscending { id: ListingId, max: ListingId },
}

/// Ordered listings, newest synthesized ones first. Identifiers are unique and
/// view counters never go down.
#[derive(Debug, Clone, Default)]
pub struct ListingStore {
    listings: Vec<Listing>,
}

impl ListingStore {
    pub fn new(seed: Vec<Listing>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(seed.len());
        for listing in &seed {
            if !seen.insert(listing.id) {
                return Err(StoreError::DuplicateId(listing.id));
            }
        }
        Ok(Self { listings: seed })
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: ListingId) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn max_id(&self) -> Option<ListingId> {
        self.listings.iter().map(|l| l.id).max()
    }

    pub fn next_id(&self) -> ListingId {
        self.max_id().map_or(1, |max| max + 1)
    }

    /// Insert at the front. The id must exceed every id already stored.
    pub fn prepend(&mut self, listing: Listing) -> Result<(), StoreError> {
        if let Some(max) = self.max_id() {
            if listing.id <= max {
                return Err(StoreError::IdNotAscending {
                    id: listing.id,
                    max,
                });
            }
        }
        self.listings.insert(0, listing);
        Ok(())
    }

    /// Returns the new view count.
    pub fn add_views(&mut self, id: ListingId, by: u64) -> Result<u64, StoreError> {
        let listing = self.get_mut(id)?;
        listing.views = listing.views.saturating_add(by);
        Ok(listing.views)
    }

    pub fn set_price(&mut self, id: ListingId, price: i64) -> Result<(), StoreError> {
        self.get_mut(id)?.price = price;
        Ok(())
    }

    pub fn set_monthly_rent(&mut self, id: ListingId, rent: i64) -> Result<(), StoreError> {
        self.get_mut(id)?.monthly_rent = rent;
        Ok(())
    }

    fn get_mut(&mut self, id: ListingId) -> Result<&mut Listing, StoreError> {
        self.listings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

/// The one lock around the listing store. HTTP workers read through it and
/// simulation threads write through it; each closure runs to completion.
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<ListingStore>>,
}

impl SharedStore {
    pub fn new(store: ListingStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn with_store<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&ListingStore) -> T,
    {
        let guard = self.inner.lock();
        f(&guard)
    }

    pub fn with_store_mut<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut ListingStore) -> T,
    {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }
}
