use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not load preset {path:?}: {source}")]
    Preset {
        path: PathBuf,
        #[source]
        source: aspectfit::Error,
    },

    #[error(transparent)]
    Fit(#[from] aspectfit::Error),
}
