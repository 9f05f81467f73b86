use std::path::PathBuf;

/// Everything that can go wrong at the edges of the engine.
/// Thin data is not on this list: short histories and unseen
/// contexts are handled by falling back, never by failing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("markov order must be at least 1, got {0}")]
    InvalidOrder(usize),

    #[error("unrecognized move label '{0}'")]
    UnknownMove(String),

    #[error("scripted dice need at least one move")]
    EmptyScript,

    #[error("no rounds to save")]
    NothingToSave,

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed round log: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
