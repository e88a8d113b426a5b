//! Synthetic stock records with grid-style filtering, sorting and selection.
//!
//! The library is shared by the `stock-grid` command line tool and the
//! browser front end; everything outside the `cli` feature also builds for
//! `wasm32-unknown-unknown`.

pub mod columns;
pub mod config;
pub mod constants;
pub mod filter;
pub mod generator;
pub mod model;
pub mod query;
pub mod selection;
pub mod summary;

#[cfg(feature = "cli")]
pub mod browse;
#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod generate;
#[cfg(feature = "cli")]
pub mod logging;

pub use columns::{column_defs, ColumnDef, Field, SortDirection, SortState};
pub use config::GridConfig;
pub use filter::{FilterMode, StockFilter, SymbolMatch};
pub use generator::StockGenerator;
pub use model::{all_industries, Sector, StockRecord};
pub use query::{load_stocks, LoadStatus, QueryClient, QueryError};
pub use selection::{RowSelection, SelectionError};
pub use summary::FilterSummary;
