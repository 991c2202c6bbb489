pub mod components;
pub mod format;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{card, html_error_response, stat_card};
pub use layouts::desktop::desktop_layout;
