// crates/infra/src/strategies/mmap.rs
use std::fs::File;
use std::path::Path;

use count_loc_core::{DelimiterSpec, ScanResult, scan_bytes};
use memmap2::Mmap;

use crate::error::{Result, ScanError};

pub(crate) fn scan(
    path: &Path,
    spec: &DelimiterSpec,
    minimum_characters: usize,
) -> Result<ScanResult> {
    let file = File::open(path).map_err(|e| ScanError::io(path, e))?;
    let len = file.metadata().map_err(|e| ScanError::io(path, e))?.len();
    // Zero-length mappings are rejected on some platforms; an empty file
    // legitimately scans to zero lines.
    if len == 0 {
        return Ok(ScanResult::default());
    }

    // Safety: the mapping is read-only and dropped before this call
    // returns; concurrent truncation of the underlying file is outside the
    // supported usage, as with any mapped read.
    let map = unsafe { Mmap::map(&file) }.map_err(|e| ScanError::io(path, e))?;
    #[cfg(unix)]
    let _ = map.advise(memmap2::Advice::Sequential);

    Ok(scan_bytes(&map, spec, minimum_characters))
}
