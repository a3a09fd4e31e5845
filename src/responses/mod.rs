pub mod html;
pub mod json;

pub use crate::errors::ResultResp;

// Normal HTML responses
pub use html::{asset_response, html_response, pushed_html_response, redirect_response};
pub use json::json_response;
