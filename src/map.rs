// src/map.rs
//! Projects the derived view onto whichever map widget is available.

use serde::Serialize;

use crate::config::MapConfig;
use crate::domain::{Listing, ListingId, TransactionType};

/// 판교 center used until markers are fitted.
pub const DEFAULT_CENTER: (f64, f64) = (37.3943, 127.1105);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapBackend {
    Kakao { app_key: String },
    Leaflet,
    /// No map library configured; the page shows an explanatory panel instead.
    Unavailable,
}

impl MapBackend {
    pub fn select(cfg: &MapConfig) -> Self {
        match cfg.kakao_app_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => MapBackend::Kakao {
                app_key: key.to_string(),
            },
            _ if cfg.leaflet => MapBackend::Leaflet,
            _ => MapBackend::Unavailable,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MapBackend::Kakao { .. } => "kakao",
            MapBackend::Leaflet => "leaflet",
            MapBackend::Unavailable => "unavailable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: ListingId,
    pub title: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub premium: bool,
    /// Short price badge drawn on the marker itself.
    pub label: String,
    pub price_display: String,
    pub summary: String,
}

impl From<&Listing> for MapMarker {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id,
            title: listing.title.clone(),
            address: listing.address.clone(),
            lat: listing.lat,
            lng: listing.lng,
            premium: listing.premium,
            label: marker_label(listing),
            price_display: listing.price_display(),
            summary: listing.summary(),
        }
    }
}

/// "65만" for monthly rent, otherwise the price in 억 rounded to a whole number.
pub fn marker_label(listing: &Listing) -> String {
    match listing.sale_type {
        TransactionType::MonthlyRent => format!("{}만", listing.monthly_rent),
        _ => format!("{}억", (listing.price as f64 / 10_000.0).round() as i64),
    }
}

pub fn markers(listings: &[Listing]) -> Vec<MapMarker> {
    listings.iter().map(MapMarker::from).collect()
}
