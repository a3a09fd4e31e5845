// src/engine.rs
//! Derives the filtered, ordered view the list and map pages render.

use serde::Serialize;

use crate::domain::{FilterConfig, Listing, ListingId, SortKey};
use crate::favorites::FavoritesSet;
use crate::store::ListingStore;

#[derive(Debug, Clone, Serialize)]
pub struct ListingView {
    pub count: usize,
    pub listings: Vec<Listing>,
}

/// Listings satisfying every active predicate of `filter`, ordered by `sort`.
/// Pure: the input slice is never touched.
pub fn derive_view(
    listings: &[Listing],
    filter: &FilterConfig,
    sort: SortKey,
    favorites: &FavoritesSet,
) -> Vec<Listing> {
    let mut view: Vec<Listing> = listings
        .iter()
        .filter(|listing| filter.matches(listing, favorites))
        .cloned()
        .collect();

    sort_listings(&mut view, sort);
    view
}

pub fn sort_listings(listings: &mut [Listing], sort: SortKey) {
    match sort {
        SortKey::Recent => listings.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::PriceLow => listings.sort_by_key(|l| l.relevant_price()),
        SortKey::PriceHigh => listings.sort_by(|a, b| b.relevant_price().cmp(&a.relevant_price())),
        SortKey::Area => listings.sort_by(|a, b| b.area.total_cmp(&a.area)),
        SortKey::Views => listings.sort_by(|a, b| b.views.cmp(&a.views)),
    }
}

pub fn build_view(
    store: &ListingStore,
    filter: &FilterConfig,
    sort: SortKey,
    favorites: &FavoritesSet,
) -> ListingView {
    let listings = derive_view(store.listings(), filter, sort, favorites);
    ListingView {
        count: listings.len(),
        listings,
    }
}

/// Single listing for the detail page.
pub fn lookup(store: &ListingStore, id: ListingId) -> Option<Listing> {
    store.get(id).cloned()
}
