pub mod filter;
pub mod listing;
pub mod price;

pub use filter::{FilterConfig, RoomsSelector, Selector, SortKey, ALL_LABEL};
pub use listing::{format_thousands, Agent, Listing, ListingId, PriceField, TransactionType};
pub use price::PriceBucket;
