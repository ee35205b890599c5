use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of [`crate::summary::build_daily_summary`].
#[derive(Debug, Error)]
pub enum BuildError {
    /// The source export is missing. It has to be obtained as an export
    /// from the Pebble app.
    #[error("source database not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("reading source database {}: {cause}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        cause: rusqlite::Error,
    },

    /// The destination already holds a days_summary table. Guards against
    /// silently discarding a previous build.
    #[error("{} already contains a days_summary table; rerun with --overwrite to rebuild it", .path.display())]
    AlreadyConfigured { path: PathBuf },

    #[error("writing daily summaries to {}: {cause}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        cause: rusqlite::Error,
    },
}
