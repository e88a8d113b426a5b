use clap::{Parser, Subcommand};

use crate::browse::BrowseArgs;
use crate::generate::GenerateArgs;

#[derive(Debug, Parser)]
#[command(author, version, about = "Synthetic stock browser with sector, industry and symbol filters")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Browse(BrowseArgs::default()))
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load stocks, apply filters and print the grid
    Browse(BrowseArgs),
    /// Print freshly generated stock records as JSON lines
    Generate(GenerateArgs),
}
