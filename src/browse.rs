use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;

use crate::columns::{Field, SortDirection, SortState};
use crate::config::GridConfig;
use crate::constants::{DEFAULT_ROW_COUNT, LOAD_DELAY_MS};
use crate::filter::{FilterMode, StockFilter, SymbolMatch};
use crate::generate::clock_seed;
use crate::logging;
use crate::model::{Sector, StockRecord};
use crate::query::{load_stocks, QueryClient};
use crate::selection::RowSelection;
use crate::summary::FilterSummary;

#[derive(Debug, Args, Clone)]
pub struct BrowseArgs {
    /// Number of synthetic stocks to load
    #[arg(short, long, default_value_t = DEFAULT_ROW_COUNT)]
    pub count: usize,

    /// Seed for the generator; defaults to the current time
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulated network delay before the data arrives
    #[arg(long, default_value_t = LOAD_DELAY_MS)]
    pub delay_ms: u64,

    /// Keep stocks in this sector (repeatable)
    #[arg(long = "sector", value_name = "SECTOR")]
    pub sectors: Vec<Sector>,

    /// Keep stocks in this industry (repeatable)
    #[arg(long = "industry", value_name = "INDUSTRY")]
    pub industries: Vec<String>,

    /// Text matched against the symbol, ignoring case
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// How the symbol text is compared: contains, starts-with, ends-with, equals
    #[arg(long = "match", default_value = "contains")]
    pub symbol_match: SymbolMatch,

    /// Combine active filters with `or` (any) or `and` (all)
    #[arg(long, default_value = "or")]
    pub mode: FilterMode,

    /// Sort by a column, e.g. price or changePercent
    #[arg(long)]
    pub sort: Option<Field>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Select a row by its number in the grid (repeatable)
    #[arg(long = "select", value_name = "ROW")]
    pub select: Vec<usize>,
}

impl Default for BrowseArgs {
    fn default() -> Self {
        Self {
            count: DEFAULT_ROW_COUNT,
            seed: None,
            delay_ms: LOAD_DELAY_MS,
            sectors: Vec::new(),
            industries: Vec::new(),
            symbol: None,
            symbol_match: SymbolMatch::default(),
            mode: FilterMode::default(),
            sort: None,
            desc: false,
            select: Vec::new(),
        }
    }
}

impl BrowseArgs {
    fn config(&self) -> GridConfig {
        GridConfig {
            row_count: self.count,
            load_delay: Duration::from_millis(self.delay_ms),
            ..GridConfig::default()
        }
        .with_seed(self.seed.unwrap_or_else(clock_seed))
    }

    fn filter(&self) -> StockFilter {
        let mut filter = StockFilter::default();
        for sector in &self.sectors {
            filter.set_sector(*sector, true);
        }
        for industry in &self.industries {
            filter.set_industry(industry, true);
        }
        if let Some(symbol) = &self.symbol {
            filter.set_symbol_query(symbol.as_str());
        }
        filter.set_symbol_match(self.symbol_match);
        filter.set_mode(self.mode);
        filter
    }

    fn sort_state(&self) -> Option<SortState> {
        self.sort.map(|field| SortState {
            field,
            direction: if self.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
        })
    }
}

pub async fn run(args: BrowseArgs) -> Result<()> {
    let config = args.config();
    let mut client: QueryClient<Vec<StockRecord>> = QueryClient::new(config.stale_time);

    println!("Loading stocks...");
    let stocks = client
        .fetch(&config.query_key, now_ms, || {
            load_stocks(&config, tokio::time::sleep)
        })
        .await
        .context("stocks query failed")?;
    logging::info(
        "stocks.loaded",
        "Synthetic stocks loaded",
        json!({ "rows": stocks.len(), "seed": config.seed }),
    );

    let filter = args.filter();
    let mut rows = filter.apply_indexed(&stocks);
    if let Some(sort) = args.sort_state() {
        rows.sort_by(|(_, a), (_, b)| sort.compare(a, b));
    }

    let mut selection = RowSelection::new(config.max_selected_rows);
    for &row in &args.select {
        if row >= stocks.len() {
            logging::warn(
                "selection.unknown_row",
                "Ignoring selection of a row that does not exist",
                json!({ "row": row, "rows": stocks.len() }),
            );
            continue;
        }
        if let Err(err) = selection.select(row) {
            logging::warn(
                "selection.rejected",
                &err.to_string(),
                json!({ "row": row, "selected": selection.len() }),
            );
        }
    }

    println!("Financial Stocks Table");
    print_grid(&rows, &selection);

    if let Some(summary) = FilterSummary::describe(&filter, rows.len(), stocks.len()) {
        println!("{summary}");
    }

    if !selection.is_empty() {
        let picked: Vec<&str> = selection
            .rows()
            .filter_map(|row| stocks.get(row))
            .map(|record| record.symbol.as_str())
            .collect();
        println!(
            "Selected {}/{}: {}",
            selection.len(),
            selection.limit(),
            picked.join(", ")
        );
    }

    Ok(())
}

fn print_grid(rows: &[(usize, &StockRecord)], selection: &RowSelection) {
    println!(
        "{:>3} {:>4} | {:<6} | {:<30} | {:>9} | {:>7} | {:>9} | {:>9} | {:>9} | {:<18} | {:<20}",
        "",
        "#",
        Field::Symbol.header(),
        Field::CompanyName.header(),
        Field::Price.header(),
        Field::Change.header(),
        Field::ChangePercent.header(),
        Field::High52Week.header(),
        Field::Low52Week.header(),
        Field::Sector.header(),
        Field::Industry.header(),
    );

    for (index, record) in rows {
        let marker = if selection.is_selected(*index) { "[x]" } else { "[ ]" };
        println!(
            "{:>3} {:>4} | {:<6} | {:<30} | {:>9} | {:>7} | {:>9} | {:>9} | {:>9} | {:<18} | {:<20}",
            marker,
            index,
            Field::Symbol.format(record),
            Field::CompanyName.format(record),
            Field::Price.format(record),
            Field::Change.format(record),
            Field::ChangePercent.format(record),
            Field::High52Week.format(record),
            Field::Low52Week.format(record),
            Field::Sector.format(record),
            Field::Industry.format(record),
        );
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}
