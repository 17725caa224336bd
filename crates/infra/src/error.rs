// crates/infra/src/error.rs
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced while scanning a single file.
///
/// One file's failure never poisons shared state; directory-level callers
/// may report it and continue with the remaining files.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
