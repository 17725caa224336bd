// crates/core/src/lib.rs
//! Comment-aware line classification.
//!
//! Given a [`DelimiterSpec`] and a stream of bytes, the engine decides per
//! physical line whether it counts as a line of code. Delimiters are flat
//! byte sequences; there is no notion of string literals or language
//! grammar beyond the comment markers themselves.

pub mod delimiters;
pub mod error;
pub mod scanner;
pub mod significant;

pub use delimiters::DelimiterSpec;
pub use error::DelimiterError;
pub use scanner::{LineScanner, ScanResult, scan_bytes};
pub use significant::significant_chars;
