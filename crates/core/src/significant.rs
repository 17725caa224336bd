// crates/core/src/significant.rs
//! Character-granularity significance counting.

/// Whitespace bytes that never count toward the significance threshold.
/// The newline itself is a line terminator and never reaches this check.
const fn is_ignorable(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\x0B' | b'\x0C' | b'\r')
}

/// UTF-8 continuation bytes (`10xxxxxx`) belong to the character introduced
/// by their lead byte and must not be counted again.
const fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

/// Count the Unicode characters in `bytes` that are not whitespace.
///
/// Only lead bytes increment the count, so a 4-byte emoji is one
/// significant unit, not four. Malformed UTF-8 is tolerated byte-by-byte:
/// every non-continuation byte counts as its own character.
#[must_use]
pub fn significant_chars(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .filter(|&&b| !is_continuation(b) && !is_ignorable(b))
        .count()
}
