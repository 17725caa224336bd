// crates/core/src/error.rs
use thiserror::Error;

/// Configuration errors raised while building a [`crate::DelimiterSpec`].
///
/// These are detected eagerly, before any scanning starts. Text that merely
/// resembles a delimiter inside a file is never an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DelimiterError {
    #[error("multi-line delimiters must come as a pair: missing the {missing} symbol")]
    UnpairedMultiline { missing: &'static str },

    #[error("comment delimiter must not be empty")]
    EmptySymbol,
}

pub type DelimiterResult<T> = std::result::Result<T, DelimiterError>;
