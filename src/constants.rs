pub const QUERY_KEY: &str = "stocks";
pub const DEFAULT_ROW_COUNT: usize = 10;
pub const MAX_ROW_COUNT: usize = 100_000;
pub const LOAD_DELAY_MS: u64 = 1_000;
pub const STALE_TIME_MS: u64 = 5 * 60 * 1_000;
pub const MAX_SELECTED_ROWS: usize = 3;
