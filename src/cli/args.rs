use crate::INTERACTIVE_ORDER;
use crate::Order;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about = "Play Rock Paper Scissors against an engine that reads your history", long_about = None)]
pub struct Args {
    /// Length of the move context the engine learns from
    #[arg(short, long, default_value_t = INTERACTIVE_ORDER)]
    pub order: Order,
    /// Seed for the engine's random fallback
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Round logs whose player moves are loaded into history before the first round
    #[arg(short, long = "import", value_name = "FILE")]
    pub imports: Vec<PathBuf>,
    /// Where the Save action writes the round log
    #[arg(short, long, value_name = "FILE")]
    pub export: Option<PathBuf>,
    /// Log every engine decision to the terminal
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            true => log::LevelFilter::Debug,
            false => log::LevelFilter::Warn,
        }
    }
}
