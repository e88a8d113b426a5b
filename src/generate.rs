use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;

use crate::constants::{DEFAULT_ROW_COUNT, MAX_ROW_COUNT};
use crate::generator::StockGenerator;
use crate::logging;

#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    /// Number of records to generate
    #[arg(short, long, default_value_t = DEFAULT_ROW_COUNT)]
    pub count: usize,

    /// Seed for the generator; defaults to the current time
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    if args.count > MAX_ROW_COUNT {
        anyhow::bail!("refusing to generate {} records (limit {MAX_ROW_COUNT})", args.count);
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    let records = StockGenerator::new(seed).generate(args.count);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for record in &records {
        serde_json::to_writer(&mut out, record).context("serialize stock record")?;
        out.write_all(b"\n").context("write stock record")?;
    }
    out.flush().context("flush generated records")?;

    logging::info(
        "stocks.generated",
        "Generated synthetic stock records",
        json!({ "count": records.len(), "seed": seed }),
    );
    Ok(())
}

/// Seed derived from the wall clock, for runs that do not ask for reproducibility.
pub fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
