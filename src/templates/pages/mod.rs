pub mod detail;
pub mod listings;
pub mod map;

pub use detail::detail_page;
pub use listings::{listings_page, results_fragment, ListingsVm};
pub use map::{map_page, MapVm};
