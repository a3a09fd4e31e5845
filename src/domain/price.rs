// src/domain/price.rs

use crate::domain::filter::Selector;
use crate::domain::listing::{Listing, PriceField, TransactionType};

/// A price-range bucket: matches `above < x <= up_to` on one price field.
/// Both bounds are optional so the first and last buckets stay open-ended.
#[derive(Debug, PartialEq, Eq)]
pub struct PriceBucket {
    pub label: &'static str,
    pub field: PriceField,
    pub above: Option<i64>,
    pub up_to: Option<i64>,
}

impl PriceBucket {
    const fn new(
        label: &'static str,
        field: PriceField,
        above: Option<i64>,
        up_to: Option<i64>,
    ) -> Self {
        Self {
            label,
            field,
            above,
            up_to,
        }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.above.map_or(true, |lo| value > lo) && self.up_to.map_or(true, |hi| value <= hi)
    }

    /// Listings measured in the other price field never match.
    pub fn matches(&self, listing: &Listing) -> bool {
        listing.price_field() == self.field && self.contains(listing.relevant_price())
    }

    pub fn from_label(label: &str) -> Option<&'static PriceBucket> {
        let label = label.trim();
        [RENT_BUCKETS, LEASE_BUCKETS, SALE_BUCKETS]
            .into_iter()
            .flatten()
            .find(|b| b.label == label)
    }
}

pub static RENT_BUCKETS: &[PriceBucket] = &[
    PriceBucket::new("50만원 이하", PriceField::Rent, None, Some(50)),
    PriceBucket::new("50-70만원", PriceField::Rent, Some(50), Some(70)),
    PriceBucket::new("70-90만원", PriceField::Rent, Some(70), Some(90)),
    PriceBucket::new("90만원 이상", PriceField::Rent, Some(90), None),
];

pub static LEASE_BUCKETS: &[PriceBucket] = &[
    PriceBucket::new("3억 이하", PriceField::Total, None, Some(30_000)),
    PriceBucket::new("3-5억", PriceField::Total, Some(30_000), Some(50_000)),
    PriceBucket::new("5-7억", PriceField::Total, Some(50_000), Some(70_000)),
    PriceBucket::new("7억 이상", PriceField::Total, Some(70_000), None),
];

pub static SALE_BUCKETS: &[PriceBucket] = &[
    PriceBucket::new("10억 이하", PriceField::Total, None, Some(100_000)),
    PriceBucket::new("10-15억", PriceField::Total, Some(100_000), Some(150_000)),
    PriceBucket::new("15-20억", PriceField::Total, Some(150_000), Some(200_000)),
    PriceBucket::new("20억 이상", PriceField::Total, Some(200_000), None),
];

/// Bucket vocabulary offered for the selected transaction-type filter.
///
/// With no transaction type selected the 월세 vocabulary is offered, so a bucket
/// chosen under "전체" only ever matches monthly-rent listings.
pub fn buckets_for(sale_type: &Selector<TransactionType>) -> &'static [PriceBucket] {
    match sale_type {
        Selector::Only(TransactionType::Sale) => SALE_BUCKETS,
        Selector::Only(TransactionType::LeaseDeposit) => LEASE_BUCKETS,
        Selector::Only(TransactionType::MonthlyRent) | Selector::All => RENT_BUCKETS,
    }
}
