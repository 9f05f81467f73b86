//! Round logs on disk.
//!
//! Exports are JSON arrays of [`Round`] records. Imports only care about
//! the `player` column, so any array of objects carrying one will do;
//! rows without it are skipped, and a label that is not a move rejects
//! the whole file before anything reaches a history.

use super::Round;
use crate::Error;
use crate::Result;
use crate::rps::Move;
use rayon::prelude::*;
use std::path::Path;
use std::path::PathBuf;

/// The only column an import reads.
#[derive(serde::Deserialize)]
struct Row {
    player: Option<String>,
}

/// Write `rounds` to `path` as pretty-printed JSON.
pub fn export(path: impl AsRef<Path>, rounds: &[Round]) -> Result<()> {
    let path = path.as_ref();
    if rounds.is_empty() {
        return Err(Error::NothingToSave);
    }
    let json = serde_json::to_string_pretty(rounds)?;
    std::fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("saved {} rounds to {}", rounds.len(), path.display());
    Ok(())
}

/// Player moves recorded in one round log, in file order.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Move>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let moves = serde_json::from_str::<Vec<Row>>(&text)?
        .into_iter()
        .filter_map(|row| row.player)
        .filter(|label| !label.is_empty())
        .map(|label| Move::try_from(label.as_str()))
        .collect::<Result<Vec<Move>>>()?;
    log::debug!("read {} moves from {}", moves.len(), path.display());
    Ok(moves)
}

/// Read several round logs in parallel and concatenate their moves in
/// argument order. Nothing is returned unless every file loads.
pub fn load_all<P>(paths: &[P]) -> Result<Vec<Move>>
where
    P: AsRef<Path> + Sync,
{
    let moves = paths
        .par_iter()
        .map(|path| load(path))
        .collect::<Result<Vec<Vec<Move>>>>()?
        .into_iter()
        .flatten()
        .collect::<Vec<Move>>();
    log::info!("read {} moves from {} files", moves.len(), paths.len());
    Ok(moves)
}

/// Resolve the export destination, defaulting to the working directory.
pub fn destination(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| PathBuf::from(crate::EXPORT_FILENAME))
}
