pub mod dashboard;
pub mod filter;
pub mod record;
pub mod stats;
pub mod trends;
pub mod view;

pub use dashboard::{Dashboard, Snapshot};
pub use filter::{FilterState, FilterUpdate, TypeFilter};
pub use record::{PropertyRecord, RecordStore, SaleCondition};
pub use stats::Summary;
pub use trends::{generate_trend_data, TrendPoint};
pub use view::ViewMode;
