// crates/infra/src/strategies/complete.rs
use std::path::Path;

use count_loc_core::{DelimiterSpec, ScanResult, scan_bytes};

use crate::error::{Result, ScanError};

pub(crate) fn scan(
    path: &Path,
    spec: &DelimiterSpec,
    minimum_characters: usize,
) -> Result<ScanResult> {
    let bytes = std::fs::read(path).map_err(|e| ScanError::io(path, e))?;
    Ok(scan_bytes(&bytes, spec, minimum_characters))
}
