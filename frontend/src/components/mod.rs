pub mod filter_summary;
pub mod filters;
pub mod provider;
pub mod stocks_grid;
pub mod stocks_page;
pub mod toolbar;
pub mod user_page;
