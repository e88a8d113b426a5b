use std::time::Duration;

use leptos::*;
use stock_grid::{
    GridConfig, LoadStatus, QueryClient, QueryError, RowSelection, SortState, StockFilter,
    StockRecord, columns::to_tsv,
};

/// One rendered grid row. `index` is the record's position in the loaded collection and
/// identifies it for selection; `generation` changes on every reload so keyed lists re-render.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub generation: u64,
    pub index: usize,
    pub record: StockRecord,
}

/// Query cache shared by every mount of the stocks page. Provided once at the
/// application root so cached stocks outlive route changes.
#[derive(Clone, Copy)]
pub struct StocksCache(StoredValue<QueryClient<Vec<StockRecord>>>);

impl StocksCache {
    pub fn new(stale_time: Duration) -> Self {
        Self(store_value(QueryClient::new(stale_time)))
    }

    pub fn has(self, key: &str) -> bool {
        self.0.with_value(|client| client.cached(key).is_some())
    }
}

/// Shared state of the stocks page, provided to every descendant via context.
#[derive(Clone, Copy)]
pub struct StocksContext {
    pub stocks: RwSignal<Vec<StockRecord>>,
    pub status: RwSignal<LoadStatus>,
    pub filter: RwSignal<StockFilter>,
    pub selection: RwSignal<RowSelection>,
    pub sort: RwSignal<Option<SortState>>,
    pub notice: RwSignal<Option<String>>,
    pub rows: Memo<Vec<GridRow>>,
    generation: RwSignal<u64>,
    cache: StocksCache,
    config: StoredValue<GridConfig>,
}

impl StocksContext {
    fn new(config: GridConfig, cache: StocksCache) -> Self {
        let stocks = create_rw_signal(Vec::<StockRecord>::new());
        let filter = create_rw_signal(StockFilter::default());
        let sort = create_rw_signal(None::<SortState>);
        let generation = create_rw_signal(0_u64);

        let rows = create_memo(move |_| {
            let generation = generation.get();
            stocks.with(|stocks| {
                filter.with(|filter| visible_rows(stocks, filter, sort.get(), generation))
            })
        });

        Self {
            stocks,
            status: create_rw_signal(LoadStatus::Loading),
            filter,
            selection: create_rw_signal(RowSelection::new(config.max_selected_rows)),
            sort,
            notice: create_rw_signal(None),
            rows,
            generation,
            cache,
            config: store_value(config),
        }
    }

    /// Serve the stocks query from cache when fresh, otherwise start a load.
    pub fn load(self) {
        let key = self.config.with_value(|config| config.query_key.clone());
        let now = now_ms();

        if let Some(cached) = self
            .cache
            .0
            .with_value(|client| client.fresh(&key, now).cloned())
        {
            self.replace_stocks(cached);
            return;
        }

        self.status.set(LoadStatus::Loading);
        let config = self.config.get_value().with_seed(now);
        spawn_load(self, key, config);
    }

    /// Drop the cached stocks and load a new collection.
    pub fn refresh(self) {
        let key = self.config.with_value(|config| config.query_key.clone());
        self.cache.0.update_value(|client| {
            client.invalidate(&key);
        });
        log::info!("refreshing {key} query");
        self.load();
    }

    fn finish_load(self, key: &str, result: Result<Vec<StockRecord>, QueryError>) {
        match result {
            Ok(records) => {
                log::info!("loaded {} stocks", records.len());
                self.cache
                    .0
                    .update_value(|client| client.store(key, records.clone(), now_ms()));
                self.replace_stocks(records);
            }
            Err(err) => {
                log::error!("stocks query failed: {err}");
                self.status.set(LoadStatus::Failed(err.to_string()));
            }
        }
    }

    fn replace_stocks(self, records: Vec<StockRecord>) {
        self.selection.update(RowSelection::clear);
        self.notice.set(None);
        self.generation.update(|generation| *generation += 1);
        self.stocks.set(records);
        self.status.set(LoadStatus::Ready);
    }

    /// Toggle a row checkbox, surfacing a notice when the selection cap rejects it.
    pub fn toggle_row(self, index: usize) {
        match self.selection.try_update(|selection| selection.toggle(index)) {
            Some(Err(err)) => {
                log::warn!("row {index} not selected: {err}");
                self.notice.set(Some(err.to_string()));
            }
            _ => self.notice.set(None),
        }
    }

    pub fn toggle_sort(self, field: stock_grid::Field) {
        self.sort.update(|sort| *sort = SortState::cycle(*sort, field));
    }

    pub fn selected_records(self) -> Vec<StockRecord> {
        let rows: Vec<usize> = self.selection.with(|selection| selection.rows().collect());
        self.stocks.with(|stocks| {
            rows.into_iter()
                .filter_map(|index| stocks.get(index).cloned())
                .collect()
        })
    }

    /// Put the selected rows on the clipboard as tab separated text.
    pub fn copy_selection(self) {
        let selected = self.selected_records();
        if selected.is_empty() {
            return;
        }
        let text = to_tsv(selected.iter());
        log::debug!("copying {} rows to clipboard", selected.len());
        write_clipboard(text);
    }
}

/// Rows shown by the grid: filtered, then sorted when a sort column is active.
pub fn visible_rows(
    stocks: &[StockRecord],
    filter: &StockFilter,
    sort: Option<SortState>,
    generation: u64,
) -> Vec<GridRow> {
    let mut matched = filter.apply_indexed(stocks);
    if let Some(sort) = sort {
        matched.sort_by(|(_, a), (_, b)| sort.compare(a, b));
    }
    matched
        .into_iter()
        .map(|(index, record)| GridRow {
            generation,
            index,
            record: record.clone(),
        })
        .collect()
}

/// Provides [`StocksContext`] to its children and kicks off the first load,
/// reusing the application's [`StocksCache`] when one is provided.
#[component]
pub fn StocksProvider(children: Children) -> impl IntoView {
    let config = GridConfig::default();
    let cache = use_context::<StocksCache>().unwrap_or_else(|| StocksCache::new(config.stale_time));
    let context = StocksContext::new(config, cache);
    provide_context(context);
    context.load();

    children()
}

pub fn use_stocks() -> StocksContext {
    use_context::<StocksContext>().expect("use_stocks must be used within a StocksProvider")
}

#[cfg(target_arch = "wasm32")]
fn spawn_load(context: StocksContext, key: String, config: GridConfig) {
    use gloo_timers::future::TimeoutFuture;

    wasm_bindgen_futures::spawn_local(async move {
        let result = stock_grid::load_stocks(&config, |delay| {
            TimeoutFuture::new(delay.as_millis().min(u32::MAX as u128) as u32)
        })
        .await;
        context.finish_load(&key, result);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_load(context: StocksContext, key: String, config: GridConfig) {
    let records = stock_grid::StockGenerator::new(config.seed).generate(config.row_count);
    context.finish_load(&key, Ok(records));
}

#[cfg(target_arch = "wasm32")]
fn write_clipboard(text: String) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window; clipboard unavailable");
        return;
    };
    let promise = window.navigator().clipboard().write_text(&text);
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
            log::warn!("clipboard write failed: {err:?}");
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn write_clipboard(text: String) {
    log::debug!("clipboard unavailable outside the browser; dropping {} bytes", text.len());
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stock_grid::{Field, FilterMode, Sector, SortDirection, StockGenerator};

    #[test]
    fn cached_stocks_survive_a_remount() {
        let runtime = create_runtime();
        let config = GridConfig::default();
        let cache = StocksCache::new(config.stale_time);

        let first = StocksContext::new(config.clone(), cache);
        first.load();
        let loaded = first.stocks.get_untracked();
        assert_eq!(loaded.len(), config.row_count);
        assert!(cache.has(&config.query_key));

        let second = StocksContext::new(config.clone(), cache);
        assert!(second.stocks.get_untracked().is_empty());
        second.load();
        assert_eq!(second.status.get_untracked(), LoadStatus::Ready);
        assert_eq!(second.stocks.get_untracked(), loaded);

        runtime.dispose();
    }

    #[test]
    fn refresh_reloads_and_clears_selection() {
        let runtime = create_runtime();
        let config = GridConfig::default();
        let cache = StocksCache::new(config.stale_time);

        let context = StocksContext::new(config.clone(), cache);
        context.load();
        context.toggle_row(0);
        assert_eq!(context.selection.with_untracked(RowSelection::len), 1);

        context.refresh();
        assert_eq!(context.status.get_untracked(), LoadStatus::Ready);
        assert_eq!(context.stocks.get_untracked().len(), config.row_count);
        assert!(context.selection.with_untracked(RowSelection::is_empty));
        assert!(cache.has(&config.query_key));

        runtime.dispose();
    }

    #[test]
    fn visible_rows_keep_original_indices() {
        let stocks = StockGenerator::new(3).generate(60);
        let mut filter = StockFilter::default();
        filter.set_sector(Sector::Healthcare, true);

        let rows = visible_rows(&stocks, &filter, None, 4);
        assert!(!rows.is_empty());
        for row in &rows {
            assert_eq!(row.generation, 4);
            assert_eq!(stocks[row.index], row.record);
            assert_eq!(row.record.sector, Sector::Healthcare);
        }
    }

    #[test]
    fn visible_rows_apply_sort_after_filter() {
        let stocks = StockGenerator::new(5).generate(40);
        let mut filter = StockFilter::default();
        filter.set_mode(FilterMode::And);
        let sort = SortState {
            field: Field::Price,
            direction: SortDirection::Descending,
        };

        let rows = visible_rows(&stocks, &filter, Some(sort), 0);
        assert_eq!(rows.len(), stocks.len());
        assert!(
            rows.windows(2)
                .all(|pair| pair[0].record.price >= pair[1].record.price)
        );
    }
}
