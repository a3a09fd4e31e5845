// src/domain/filter.rs

use std::collections::HashMap;

use crate::domain::listing::{Listing, TransactionType};
use crate::domain::price::{buckets_for, PriceBucket};
use crate::errors::ServerError;
use crate::favorites::FavoritesSet;

/// Label the UI uses for "no constraint".
pub const ALL_LABEL: &str = "전체";

/// One selector of the filter bar. `All` places no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selector<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => wanted == value,
        }
    }
}

impl<T> Selector<T> {
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Selector::All => None,
            Selector::Only(v) => Some(v),
        }
    }
}

impl Selector<String> {
    fn from_param(value: Option<&String>) -> Self {
        match value.map(|v| v.trim()) {
            None | Some("") | Some(ALL_LABEL) => Selector::All,
            Some(v) => Selector::Only(v.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomsSelector {
    #[default]
    All,
    Exactly(u32),
    /// Non-numeric selector; matches no listing.
    Invalid,
}

impl RoomsSelector {
    /// Reads leading digits, so "3" and "3개" both select three rooms.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == ALL_LABEL {
            return RoomsSelector::All;
        }

        let digits: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
        match digits.parse::<u32>() {
            Ok(n) => RoomsSelector::Exactly(n),
            Err(_) => RoomsSelector::Invalid,
        }
    }

    pub fn accepts(&self, rooms: u32) -> bool {
        match self {
            RoomsSelector::All => true,
            RoomsSelector::Exactly(n) => *n == rooms,
            RoomsSelector::Invalid => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Recent,
    PriceLow,
    PriceHigh,
    Area,
    Views,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Recent,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Area,
        SortKey::Views,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Recent => "recent",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Area => "area",
            SortKey::Views => "views",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Recent => "최신순",
            SortKey::PriceLow => "낮은 가격순",
            SortKey::PriceHigh => "높은 가격순",
            SortKey::Area => "넓은 면적순",
            SortKey::Views => "조회수순",
        }
    }

    /// Unknown keys sort by recency.
    pub fn parse(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == raw.trim())
            .unwrap_or_default()
    }
}

/// Every predicate of the filter bar. `Default` leaves all of them inactive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterConfig {
    pub search: String,
    pub district: Selector<String>,
    pub sale_type: Selector<TransactionType>,
    pub property_type: Selector<String>,
    pub price_range: Selector<&'static PriceBucket>,
    pub rooms: RoomsSelector,
    pub only_premium: bool,
    pub only_favorites: bool,
}

impl FilterConfig {
    /// Parse the list page query (`q, district, sale_type, type, price, rooms,
    /// premium, favorites`). Unknown price labels are dropped by `normalized`.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, ServerError> {
        let sale_type = match params.get("sale_type").map(|v| v.trim()) {
            None | Some("") | Some(ALL_LABEL) => Selector::All,
            Some(label) => Selector::Only(TransactionType::from_label(label).ok_or_else(|| {
                ServerError::BadRequest(format!("unknown transaction type: {label}"))
            })?),
        };

        let price_range = params
            .get("price")
            .and_then(|label| PriceBucket::from_label(label))
            .map_or(Selector::All, Selector::Only);

        let filter = FilterConfig {
            search: params.get("q").map(|s| s.trim().to_string()).unwrap_or_default(),
            district: Selector::from_param(params.get("district")),
            sale_type,
            property_type: Selector::from_param(params.get("type")),
            price_range,
            rooms: params
                .get("rooms")
                .map(|r| RoomsSelector::parse(r))
                .unwrap_or_default(),
            only_premium: is_on(params.get("premium")),
            only_favorites: is_on(params.get("favorites")),
        };

        Ok(filter.normalized())
    }

    /// Drop a price bucket that the selected transaction type does not offer.
    pub fn normalized(mut self) -> Self {
        if let Selector::Only(bucket) = self.price_range {
            let offered = buckets_for(&self.sale_type);
            if !offered.iter().any(|b| b == bucket) {
                self.price_range = Selector::All;
            }
        }
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        *self == FilterConfig::default()
    }

    pub fn matches(&self, listing: &Listing, favorites: &FavoritesSet) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = [&listing.title, &listing.address, &listing.district]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if !self.district.accepts(&listing.district)
            || !self.sale_type.accepts(&listing.sale_type)
            || !self.property_type.accepts(&listing.property_type)
        {
            return false;
        }

        if let Selector::Only(bucket) = self.price_range {
            if !bucket.matches(listing) {
                return false;
            }
        }

        if !self.rooms.accepts(listing.rooms) {
            return false;
        }

        if self.only_premium && !listing.premium {
            return false;
        }

        !(self.only_favorites && !favorites.contains(listing.id))
    }

    /// Query string reproducing this filter and sort, for links between views.
    pub fn to_query(&self, sort: SortKey) -> String {
        let mut q = url::form_urlencoded::Serializer::new(String::new());

        if !self.search.is_empty() {
            q.append_pair("q", &self.search);
        }
        if let Some(d) = self.district.as_option() {
            q.append_pair("district", d);
        }
        if let Some(t) = self.sale_type.as_option() {
            q.append_pair("sale_type", t.label());
        }
        if let Some(t) = self.property_type.as_option() {
            q.append_pair("type", t);
        }
        if let Some(b) = self.price_range.as_option() {
            q.append_pair("price", b.label);
        }
        match self.rooms {
            RoomsSelector::All => {}
            RoomsSelector::Exactly(n) => {
                q.append_pair("rooms", &n.to_string());
            }
            RoomsSelector::Invalid => {
                q.append_pair("rooms", "?");
            }
        }
        if self.only_premium {
            q.append_pair("premium", "on");
        }
        if self.only_favorites {
            q.append_pair("favorites", "on");
        }
        if sort != SortKey::Recent {
            q.append_pair("sort", sort.as_str());
        }

        q.finish()
    }
}

fn is_on(value: Option<&String>) -> bool {
    matches!(
        value.map(|v| v.trim()),
        Some("on") | Some("true") | Some("1")
    )
}
