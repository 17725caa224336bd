// crates/infra/src/strategies/buffered.rs
use std::fs::File;
use std::io::Read;
use std::path::Path;

use count_loc_core::{DelimiterSpec, LineScanner, ScanResult};

use crate::error::{Result, ScanError};

/// Batch size for the read loop. The scanner is chunk-size agnostic, so
/// this only tunes syscall frequency.
const BATCH_SIZE: usize = 64 * 1024;

pub(crate) fn scan(
    path: &Path,
    spec: &DelimiterSpec,
    minimum_characters: usize,
) -> Result<ScanResult> {
    let mut file = File::open(path).map_err(|e| ScanError::io(path, e))?;
    let mut scanner = LineScanner::new(spec, minimum_characters);
    let mut buffer = vec![0u8; BATCH_SIZE];
    loop {
        let read = file.read(&mut buffer).map_err(|e| ScanError::io(path, e))?;
        if read == 0 {
            break;
        }
        scanner.push_chunk(&buffer[..read]);
    }
    Ok(scanner.finish())
}
