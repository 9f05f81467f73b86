//! Rock Paper Scissors opponent that tries to read the human across the table.
//!
//! The engine looks at the player's move history, asks a Markov transition
//! table what usually follows the current trailing context, falls back to
//! raw symbol frequency when the context was never seen, and plays whatever
//! beats the prediction. Everything outside of [`predict`] and [`rps`] is
//! glue for keeping score and moving history in and out of files.
pub mod error;
pub mod predict;
pub mod rps;
pub mod session;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::Error;
pub use error::Result;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Occurrence counts of moves in a history or transition table.
pub type Count = usize;
/// Length of the trailing context used as a Markov state.
pub type Order = usize;

// ============================================================================
// PREDICTION PARAMETERS
// ============================================================================
/// Default Markov order. Sharp predictions once enough rounds exist,
/// none at all before that.
pub const DEFAULT_ORDER: Order = 9;
/// Order used by the interactive game, which needs to start reading
/// the player after only a handful of rounds.
pub const INTERACTIVE_ORDER: Order = 3;

// ============================================================================
// FILES
// ============================================================================
/// Directory receiving timestamped log files.
pub const LOG_DIRECTORY: &str = "logs";
/// Default destination for exported round logs.
pub const EXPORT_FILENAME: &str = "roshambo_results.json";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` and writes DEBUG level to file, `level` to terminal.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all(LOG_DIRECTORY).context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("{}/{}.log", LOG_DIRECTORY, time))
            .context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
