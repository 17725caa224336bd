// crates/infra/src/strategies/mod.rs
mod buffered;
mod complete;
mod mmap;

use std::path::Path;

use count_loc_core::{DelimiterSpec, ScanResult};

use crate::error::Result;

/// How a file's bytes are delivered to the classification engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IoStrategy {
    /// Read the whole file into memory, scan once.
    Complete,
    /// Fixed-size read loop carrying scanner state between batches.
    #[default]
    Buffered,
    /// Read-only memory mapping presented as one contiguous view.
    Mmap,
}

/// Scan one file under the chosen strategy.
///
/// The handle or mapping is scoped to this call and released on every exit
/// path. All strategies return identical results for identical input.
///
/// # Errors
///
/// [`crate::ScanError::Io`] when the path is missing, unreadable, or a
/// directory.
pub fn scan_file(
    path: &Path,
    spec: &DelimiterSpec,
    minimum_characters: usize,
    strategy: IoStrategy,
) -> Result<ScanResult> {
    match strategy {
        IoStrategy::Complete => complete::scan(path, spec, minimum_characters),
        IoStrategy::Buffered => buffered::scan(path, spec, minimum_characters),
        IoStrategy::Mmap => mmap::scan(path, spec, minimum_characters),
    }
}
