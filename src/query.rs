use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::time::Duration;

use crate::config::GridConfig;
use crate::constants::MAX_ROW_COUNT;
use crate::generator::StockGenerator;
use crate::model::StockRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    InvalidRowCount { requested: usize, max: usize },
    Load(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::InvalidRowCount { requested, max } => {
                write!(f, "cannot load {requested} rows; the limit is {max}")
            }
            QueryError::Load(message) => write!(f, "failed to load stocks: {message}"),
        }
    }
}

impl std::error::Error for QueryError {}

/// Lifecycle of the stocks query as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

struct CacheEntry<T> {
    data: T,
    updated_at_ms: u64,
    invalidated: bool,
}

/// Keyed cache of query results with a staleness window.
pub struct QueryClient<T> {
    stale_time_ms: u64,
    entries: HashMap<String, CacheEntry<T>>,
}

impl<T: Clone> QueryClient<T> {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            stale_time_ms: stale_time.as_millis() as u64,
            entries: HashMap::new(),
        }
    }

    /// Last stored value for `key`, stale or not.
    pub fn cached(&self, key: &str) -> Option<&T> {
        self.entries.get(key).map(|entry| &entry.data)
    }

    /// Stored value for `key` if it was updated within the stale time and not invalidated.
    pub fn fresh(&self, key: &str, now_ms: u64) -> Option<&T> {
        self.entries
            .get(key)
            .filter(|entry| {
                !entry.invalidated
                    && now_ms.saturating_sub(entry.updated_at_ms) < self.stale_time_ms
            })
            .map(|entry| &entry.data)
    }

    pub fn store(&mut self, key: impl Into<String>, data: T, now_ms: u64) {
        self.entries.insert(
            key.into(),
            CacheEntry {
                data,
                updated_at_ms: now_ms,
                invalidated: false,
            },
        );
    }

    /// Mark `key` stale so the next fetch reloads it. Returns false for unknown keys.
    pub fn invalidate(&mut self, key: &str) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.invalidated = true;
                true
            }
            None => false,
        }
    }

    /// Serve `key` from cache while fresh, otherwise run `loader` and cache its result.
    ///
    /// Failures are returned as-is and leave any previous entry untouched.
    pub async fn fetch<C, F, Fut>(&mut self, key: &str, clock: C, loader: F) -> Result<T, QueryError>
    where
        C: Fn() -> u64,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, QueryError>>,
    {
        if let Some(data) = self.fresh(key, clock()) {
            return Ok(data.clone());
        }

        let data = loader().await?;
        self.store(key, data.clone(), clock());
        Ok(data)
    }
}

/// Generate the configured stocks after the simulated network delay.
///
/// `sleep` supplies the runtime's timer so the same loader serves the CLI and the browser.
pub async fn load_stocks<S, Fut>(config: &GridConfig, sleep: S) -> Result<Vec<StockRecord>, QueryError>
where
    S: FnOnce(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    if config.row_count > MAX_ROW_COUNT {
        return Err(QueryError::InvalidRowCount {
            requested: config.row_count,
            max: MAX_ROW_COUNT,
        });
    }

    if !config.load_delay.is_zero() {
        sleep(config.load_delay).await;
    }

    Ok(StockGenerator::new(config.seed).generate(config.row_count))
}
