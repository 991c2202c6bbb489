pub mod dashboard;
pub mod insights;
pub mod search;
pub mod trends;

pub use dashboard::{dashboard_page, DashboardVm};
pub use insights::insights_view;
pub use search::search_view;
pub use trends::trends_view;
