pub mod html;
pub mod json;
pub mod xlsx;

pub use crate::errors::ResultResp;

pub use html::{css_response, html_response, redirect};
pub use json::json_response;
pub use xlsx::xlsx_response;
