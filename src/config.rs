use std::time::Duration;

use crate::constants::{
    DEFAULT_ROW_COUNT, LOAD_DELAY_MS, MAX_SELECTED_ROWS, QUERY_KEY, STALE_TIME_MS,
};

#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub query_key: String,
    pub row_count: usize,
    pub seed: u64,
    pub load_delay: Duration,
    pub stale_time: Duration,
    pub max_selected_rows: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            query_key: QUERY_KEY.to_string(),
            row_count: DEFAULT_ROW_COUNT,
            seed: 0,
            load_delay: Duration::from_millis(LOAD_DELAY_MS),
            stale_time: Duration::from_millis(STALE_TIME_MS),
            max_selected_rows: MAX_SELECTED_ROWS,
        }
    }
}

impl GridConfig {
    /// Same configuration with a different generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
