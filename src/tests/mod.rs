mod favorites_tests;
mod map_tests;
mod notification_tests;
mod router_tests;
mod utils;
