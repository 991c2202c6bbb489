mod dashboard_tests;
mod export_tests;
mod filter_tests;
mod view_tests;
