// src/simulation/tasks.rs
//! The individual mutations the simulation applies. Each takes the store and an
//! rng explicitly so it can run under the store lock and be replayed in tests.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::{format_thousands, Listing, ListingId, PriceField, TransactionType};
use crate::map::DEFAULT_CENTER;
use crate::seed::default_agent;
use crate::store::{ListingStore, StoreError};

const NEW_DISTRICTS: &[&str] = &["강남구", "서초구", "성남시 분당구"];
const NEW_TYPES: &[&str] = &["원룸", "투룸", "오피스텔"];
const NEW_SALE_TYPES: &[TransactionType] =
    &[TransactionType::MonthlyRent, TransactionType::LeaseDeposit];
const NEW_OPTIONS: &[&str] = &["에어컨", "냉장고", "세탁기", "인덕션"];

const SOLD_DISTRICTS: &[&str] = &[
    "강남구", "서초구", "판교", "분당", "마포구", "용산구", "성수동", "송파구",
];
const SOLD_TYPES: &[&str] = &["원룸", "투룸", "오피스텔", "아파트"];

/// Lowest monthly rent a price change may produce.
pub const RENT_FLOOR: i64 = 30;
/// Lowest price or deposit a price change may produce.
pub const PRICE_FLOOR: i64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewBump {
    pub id: ListingId,
    pub added: u64,
    pub views: u64,
}

/// Add 1..=5 views to each of 1..=3 randomly picked listings.
pub fn increment_random_views<R: Rng + ?Sized>(
    store: &mut ListingStore,
    rng: &mut R,
) -> Vec<ViewBump> {
    if store.is_empty() {
        return Vec::new();
    }

    let picks = rng.gen_range(1..=3);
    let mut bumps = Vec::with_capacity(picks);
    for _ in 0..picks {
        let id = store.listings()[rng.gen_range(0..store.len())].id;
        let added = rng.gen_range(1..=5);
        if let Ok(views) = store.add_views(id, added) {
            bumps.push(ViewBump { id, added, views });
        }
    }
    bumps
}

fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> &'a T {
    // Callers only pass the non-empty constant tables above.
    &items[rng.gen_range(0..items.len())]
}

/// A freshly posted listing with randomized attributes.
pub fn synthesize_listing<R: Rng + ?Sized>(
    id: ListingId,
    rng: &mut R,
    today: NaiveDate,
) -> Listing {
    let district = *pick(NEW_DISTRICTS, rng);
    let property_type = *pick(NEW_TYPES, rng);
    let sale_type = *pick(NEW_SALE_TYPES, rng);
    let monthly = sale_type == TransactionType::MonthlyRent;

    let price = if monthly {
        rng.gen_range(1_000..4_000)
    } else {
        rng.gen_range(20_000..60_000)
    };
    let monthly_rent = if monthly { rng.gen_range(50..90) } else { 0 };

    let total_floors = rng.gen_range(15..25);
    let floor = rng.gen_range(3..18).min(total_floors);

    let mut options: Vec<String> = NEW_OPTIONS.iter().map(|o| o.to_string()).collect();
    options.shuffle(rng);

    Listing {
        id,
        title: format!("{district} 신규 {property_type} 매물"),
        address: format!(
            "서울시 {district} {}-{}",
            rng.gen_range(1..=999),
            rng.gen_range(1..=99)
        ),
        district: district.to_string(),
        property_type: property_type.to_string(),
        sale_type,
        price,
        monthly_rent,
        area: f64::from(rng.gen_range(25..55u32)),
        rooms: if property_type == "투룸" { 2 } else { 1 },
        bathrooms: 1,
        floor,
        total_floors,
        build_year: rng.gen_range(2020..2025),
        options,
        description: format!("신규 등록된 {property_type} 매물입니다."),
        lat: DEFAULT_CENTER.0 + (rng.gen::<f64>() - 0.5) * 0.05,
        lng: DEFAULT_CENTER.1 + (rng.gen::<f64>() - 0.5) * 0.05,
        image: format!("https://picsum.photos/seed/new{id}/400/300"),
        agent: default_agent(),
        premium: rng.gen_bool(0.3),
        views: rng.gen_range(1..=50),
        created_at: today,
    }
}

/// Prepend a synthesized listing whose id is one past the current maximum.
pub fn add_new_listing<R: Rng + ?Sized>(
    store: &mut ListingStore,
    rng: &mut R,
    today: NaiveDate,
) -> Result<Listing, StoreError> {
    let listing = synthesize_listing(store.next_id(), rng, today);
    store.prepend(listing.clone())?;
    Ok(listing)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoldNotice {
    pub district: &'static str,
    pub property_type: &'static str,
    pub minutes_ago: u32,
}

impl SoldNotice {
    pub fn message(&self) -> String {
        format!(
            "✅ {} {} {}분 전 거래 완료!",
            self.district, self.property_type, self.minutes_ago
        )
    }
}

/// Purely cosmetic; the store is not involved.
pub fn sold_notice<R: Rng + ?Sized>(rng: &mut R) -> SoldNotice {
    SoldNotice {
        district: *pick(SOLD_DISTRICTS, rng),
        property_type: *pick(SOLD_TYPES, rng),
        minutes_ago: rng.gen_range(1..=10),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceChange {
    pub id: ListingId,
    pub title: String,
    pub field: PriceField,
    pub old: i64,
    pub new: i64,
}

impl PriceChange {
    pub fn delta(&self) -> i64 {
        self.new - self.old
    }

    pub fn is_increase(&self) -> bool {
        self.delta() > 0
    }

    pub fn message_lines(&self) -> Vec<String> {
        let (emoji, text) = if self.is_increase() {
            ("📈", "인상")
        } else {
            ("📉", "인하")
        };
        vec![
            format!("{emoji} {}", self.title),
            format!("가격 {text}: {}만원", format_thousands(self.delta().abs())),
        ]
    }
}

/// Move one listing's relevant price by ±2–7 %, never below the floor for that field.
pub fn simulate_price_change<R: Rng + ?Sized>(
    store: &mut ListingStore,
    rng: &mut R,
) -> Result<Option<PriceChange>, StoreError> {
    if store.is_empty() {
        return Ok(None);
    }

    let target = &store.listings()[rng.gen_range(0..store.len())];
    let (id, title, field, old) = (
        target.id,
        target.title.clone(),
        target.price_field(),
        target.relevant_price(),
    );

    let direction: f64 = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let percent = rng.gen_range(0.02_f64..0.07) * direction;
    let change = (old as f64 * percent).floor() as i64;

    let new = match field {
        PriceField::Rent => {
            let new = (old + change).max(RENT_FLOOR);
            store.set_monthly_rent(id, new)?;
            new
        }
        PriceField::Total => {
            let new = (old + change).max(PRICE_FLOOR);
            store.set_price(id, new)?;
            new
        }
    };

    Ok(Some(PriceChange {
        id,
        title,
        field,
        old,
        new,
    }))
}
