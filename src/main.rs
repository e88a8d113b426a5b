use anyhow::Result;
use clap::Parser;
use serde_json::json;
use stock_grid::cli::{Cli, Command};
use stock_grid::{browse, generate, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let result = match Cli::parse().command() {
        Command::Browse(args) => browse::run(args).await,
        Command::Generate(args) => generate::run(args),
    };

    if let Err(err) = &result {
        logging::error(
            "command.failed",
            "Command terminated with error",
            json!({ "error": format!("{err:#}") }),
        );
    }
    result
}
