// src/domain/listing.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type ListingId = u32;

/// How a listing is traded. Decides which price field is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// 매매
    Sale,
    /// 전세
    LeaseDeposit,
    /// 월세
    MonthlyRent,
}

impl TransactionType {
    pub const ALL: [TransactionType; 3] = [
        TransactionType::Sale,
        TransactionType::LeaseDeposit,
        TransactionType::MonthlyRent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Sale => "매매",
            TransactionType::LeaseDeposit => "전세",
            TransactionType::MonthlyRent => "월세",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label.trim())
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which price column a listing (or a price bucket) is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriceField {
    /// Monthly rent, 만원.
    Rent,
    /// Sale price or deposit, 만원.
    Total,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub phone: String,
    pub company: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub address: String,
    pub district: String,
    /// 원룸 / 투룸 / 오피스텔 / 아파트 ...
    pub property_type: String,
    pub sale_type: TransactionType,
    /// Sale price or deposit in 만원.
    pub price: i64,
    /// Only meaningful for `TransactionType::MonthlyRent`; zero otherwise.
    pub monthly_rent: i64,
    /// Floor area in ㎡.
    pub area: f64,
    pub rooms: u32,
    pub bathrooms: u32,
    pub floor: i32,
    pub total_floors: i32,
    pub build_year: i32,
    pub options: Vec<String>,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub image: String,
    pub agent: Agent,
    pub premium: bool,
    pub views: u64,
    pub created_at: NaiveDate,
}

impl Listing {
    pub fn price_field(&self) -> PriceField {
        match self.sale_type {
            TransactionType::MonthlyRent => PriceField::Rent,
            _ => PriceField::Total,
        }
    }

    /// The price users compare on: monthly rent for 월세, otherwise the price.
    pub fn relevant_price(&self) -> i64 {
        match self.price_field() {
            PriceField::Rent => self.monthly_rent,
            PriceField::Total => self.price,
        }
    }

    /// "1000/65만원" for monthly rent, "25,000만원" otherwise.
    pub fn price_display(&self) -> String {
        match self.sale_type {
            TransactionType::MonthlyRent => format!("{}/{}만원", self.price, self.monthly_rent),
            _ => format!("{}만원", format_thousands(self.price)),
        }
    }

    pub fn summary(&self) -> String {
        format!("{}㎡ | {}개 방 | {}층", self.area, self.rooms, self.floor)
    }
}

/// Group digits in threes with commas.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
