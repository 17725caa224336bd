// crates/core/src/delimiters.rs
use crate::error::{DelimiterError, DelimiterResult};

/// Comment delimiters for one language, as flat byte sequences.
///
/// A spec holds at most one single-line marker and an optional (possibly
/// asymmetric) multi-line start/end pair. Construction validates the pair
/// invariant, so a spec in hand is always scannable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelimiterSpec {
    single_line: Option<Vec<u8>>,
    multiline_start: Option<Vec<u8>>,
    multiline_end: Option<Vec<u8>>,
}

impl DelimiterSpec {
    /// Build a validated spec. Either side of the multi-line pair without
    /// the other is rejected, as are empty symbols.
    pub fn new(
        single_line: Option<Vec<u8>>,
        multiline_start: Option<Vec<u8>>,
        multiline_end: Option<Vec<u8>>,
    ) -> DelimiterResult<Self> {
        for symbol in [&single_line, &multiline_start, &multiline_end]
            .into_iter()
            .flatten()
        {
            if symbol.is_empty() {
                return Err(DelimiterError::EmptySymbol);
            }
        }
        match (&multiline_start, &multiline_end) {
            (Some(_), None) => return Err(DelimiterError::UnpairedMultiline { missing: "end" }),
            (None, Some(_)) => return Err(DelimiterError::UnpairedMultiline { missing: "start" }),
            _ => {}
        }
        Ok(Self { single_line, multiline_start, multiline_end })
    }

    /// Spec for a language without comments: every line is candidate code.
    #[must_use]
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn single_line(&self) -> Option<&[u8]> {
        self.single_line.as_deref()
    }

    pub fn multiline_start(&self) -> Option<&[u8]> {
        self.multiline_start.as_deref()
    }

    pub fn multiline_end(&self) -> Option<&[u8]> {
        self.multiline_end.as_deref()
    }
}
