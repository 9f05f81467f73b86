//! Interactive Rock Paper Scissors
//!
//! Options: --order N, --seed S, --import FILE..., --export FILE, --verbose

use clap::Parser;
use roshambo::cli::Args;
use roshambo::cli::CLI;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    roshambo::log(args.level())?;
    CLI::new(args)?.run()
}
