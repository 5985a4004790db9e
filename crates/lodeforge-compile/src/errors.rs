use std::path::PathBuf;

use thiserror::Error;

/// File-level failures of the batch loader.
///
/// A failing file is skipped; other files of the load are unaffected.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("json error in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{} must contain a JSON object of rules", .path.display())]
    NotAnObject { path: PathBuf },
}

impl LoadError {
    /// Stable identifier used in load reports.
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::Io { .. } => "io_failure",
            LoadError::Json { .. } => "invalid_json",
            LoadError::NotAnObject { .. } => "not_an_object",
        }
    }
}
