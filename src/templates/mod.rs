pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{favorite_button, html_error_response, notification_toasts, price_range_options};
