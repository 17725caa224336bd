// crates/core/src/scanner.rs
//! Streaming line classification.
//!
//! [`LineScanner`] consumes a file's bytes in chunks of any size and keeps
//! one bit of multi-line comment state across lines and chunk boundaries.
//! An unterminated tail is buffered rather than classified, so a chunk
//! boundary splitting a delimiter or a multi-byte character can never be
//! misread.

use memchr::{memchr, memmem};

use crate::delimiters::DelimiterSpec;
use crate::significant::significant_chars;

/// Final counts for one file. `loc_lines <= total_lines` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub total_lines: u64,
    pub loc_lines: u64,
}

/// Classification state carried across chunks within one file scan.
#[derive(Debug, Default)]
struct ScanState {
    /// True while positioned strictly inside an unterminated block comment.
    in_block: bool,
    /// Bytes of a physical line whose terminator has not arrived yet.
    pending: Vec<u8>,
}

/// Re-entrant scanner over one file's bytes.
///
/// Chunk sizes are the caller's choice and do not affect the result; the
/// I/O strategy adapters rely on that equivalence.
pub struct LineScanner<'a> {
    spec: &'a DelimiterSpec,
    minimum_characters: usize,
    state: ScanState,
    result: ScanResult,
}

impl<'a> LineScanner<'a> {
    #[must_use]
    pub fn new(spec: &'a DelimiterSpec, minimum_characters: usize) -> Self {
        Self {
            spec,
            minimum_characters,
            state: ScanState::default(),
            result: ScanResult::default(),
        }
    }

    /// Feed the next chunk. Complete lines are classified immediately; a
    /// trailing partial line is buffered for the next call.
    pub fn push_chunk(&mut self, mut chunk: &[u8]) {
        while let Some(at) = memchr(b'\n', chunk) {
            let (line, rest) = chunk.split_at(at);
            chunk = &rest[1..];
            if self.state.pending.is_empty() {
                self.classify_terminated(line);
            } else {
                self.state.pending.extend_from_slice(line);
                let full = std::mem::take(&mut self.state.pending);
                self.classify_terminated(&full);
            }
        }
        self.state.pending.extend_from_slice(chunk);
    }

    /// Classify the unterminated final line, if any, and return the counts.
    #[must_use]
    pub fn finish(mut self) -> ScanResult {
        if !self.state.pending.is_empty() {
            let tail = std::mem::take(&mut self.state.pending);
            self.classify_line(&tail);
        }
        self.result
    }

    /// A `\r` immediately before the `\n` belongs to the terminator, not to
    /// the line content.
    fn classify_terminated(&mut self, line: &[u8]) {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        self.classify_line(line);
    }

    fn classify_line(&mut self, line: &[u8]) {
        self.result.total_lines += 1;

        let mut significant = 0usize;
        let mut rest = line;
        loop {
            if self.state.in_block {
                // Only a literal end marker closes the block; start-marker
                // lookalikes inside it are plain comment text.
                let Some((at, len)) = find_symbol(rest, self.spec.multiline_end()) else {
                    break;
                };
                rest = &rest[at + len..];
                self.state.in_block = false;
            } else {
                let single = find_symbol(rest, self.spec.single_line());
                let start = find_symbol(rest, self.spec.multiline_start());
                match (single, start) {
                    // Leftmost match wins; the single-line marker only when
                    // strictly earlier than a block start at the same scan
                    // position.
                    (Some((at, _)), m) if m.is_none_or(|(m_at, _)| at < m_at) => {
                        significant += significant_chars(&rest[..at]);
                        break;
                    }
                    (_, Some((at, len))) => {
                        significant += significant_chars(&rest[..at]);
                        rest = &rest[at + len..];
                        self.state.in_block = true;
                    }
                    (_, None) => {
                        significant += significant_chars(rest);
                        break;
                    }
                }
            }
        }

        if significant >= self.minimum_characters {
            self.result.loc_lines += 1;
        }
    }
}

/// Exact byte-sequence search. Returns the match offset and symbol length.
fn find_symbol(haystack: &[u8], symbol: Option<&[u8]>) -> Option<(usize, usize)> {
    let symbol = symbol?;
    memmem::find(haystack, symbol).map(|at| (at, symbol.len()))
}

/// One-shot scan over an in-memory buffer.
#[must_use]
pub fn scan_bytes(bytes: &[u8], spec: &DelimiterSpec, minimum_characters: usize) -> ScanResult {
    let mut scanner = LineScanner::new(spec, minimum_characters);
    scanner.push_chunk(bytes);
    scanner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_spec() -> DelimiterSpec {
        DelimiterSpec::new(Some(b"#".to_vec()), None, None).unwrap()
    }

    fn c_spec() -> DelimiterSpec {
        DelimiterSpec::new(Some(b"//".to_vec()), Some(b"/*".to_vec()), Some(b"*/".to_vec()))
            .unwrap()
    }

    fn html_spec() -> DelimiterSpec {
        DelimiterSpec::new(None, Some(b"<!--".to_vec()), Some(b"-->".to_vec())).unwrap()
    }

    fn counts(result: ScanResult) -> (u64, u64) {
        (result.total_lines, result.loc_lines)
    }

    #[test]
    fn empty_input_yields_zero() {
        assert_eq!(counts(scan_bytes(b"", &c_spec(), 1)), (0, 0));
    }

    #[test]
    fn single_line_comments_only() {
        let source = ["# This is a comment",
            "def foo(arg):",
            "\tos.remove('/')",
            "\t# Here's another comment",
            "",
            "\treturn None"]
        .join("\n");
        assert_eq!(counts(scan_bytes(source.as_bytes(), &hash_spec(), 1)), (6, 3));
    }

    #[test]
    fn multiline_blocks_with_reopen() {
        let source = ["/* This is a comment",
            "This is a continuation",
            "This is a continuation",
            "This is a continuation",
            "All good things must come to an end */",
            "",
            "#include <stdlib.h>",
            "int main(){",
            "\tint x = 10;",
            "\tbool y = false;",
            "/* Look whos here again!",
            "This is a continuation",
            "Bye bye! */",
            "return 0;",
            "}"]
        .join("\n");
        assert_eq!(counts(scan_bytes(source.as_bytes(), &c_spec(), 1)), (15, 6));
    }

    #[test]
    fn malformed_markers_are_plain_text() {
        // Space-broken markers never match; the real block opens on line 3
        // and a `* /` inside it does not close it.
        let source = ["int a = 1; / / not a comment",
            "int b = 2; / * not a block start",
            "/* the block opens here",
            "* / does not close it",
            "still inside the block",
            "*/"]
        .join("\n");
        assert_eq!(counts(scan_bytes(source.as_bytes(), &c_spec(), 1)), (6, 2));
    }

    #[test]
    fn inline_block_comment_splits_code() {
        // Seven significant characters remain outside the comment.
        let source = b"int x = /* Surprise! */ 1;";
        assert_eq!(counts(scan_bytes(source, &c_spec(), 7)), (1, 1));
        assert_eq!(counts(scan_bytes(source, &c_spec(), 8)), (1, 0));
    }

    #[test]
    fn block_may_open_and_close_repeatedly_on_one_line() {
        let source = b"a /* x */ b /* y */ c\n";
        // Significant: a, b, c.
        assert_eq!(counts(scan_bytes(source, &c_spec(), 3)), (1, 1));
        assert_eq!(counts(scan_bytes(source, &c_spec(), 4)), (1, 0));
    }

    #[test]
    fn start_marker_inside_block_does_not_nest() {
        let source = ["// Nested comments!",
            "/* Here's a multiline block",
            "//",
            "// */",
            "// The above line ends the commented block",
            "int main(){return 0;}"]
        .join("\n");
        assert_eq!(counts(scan_bytes(source.as_bytes(), &c_spec(), 1)), (6, 1));
    }

    #[test]
    fn unterminated_block_comments_to_eof() {
        let source = b"code();\n/* never closed\nmore text\nstill comment";
        assert_eq!(counts(scan_bytes(source, &c_spec(), 1)), (4, 1));
    }

    #[test]
    fn asymmetric_pair_without_single_line() {
        let source = b"<!-- Start\nContinuation\nEnd -->\n";
        assert_eq!(counts(scan_bytes(source, &html_spec(), 1)), (3, 0));
    }

    #[test]
    fn single_line_marker_comments_rest_of_line() {
        // A block start after `//` on the same line is already comment.
        let source = b"x // /* not opened\ny\n";
        assert_eq!(counts(scan_bytes(source, &c_spec(), 1)), (2, 2));
    }

    #[test]
    fn tied_match_prefers_block_start() {
        // Lisp-like grammar where `#` and `#|` collide at the same offset.
        let spec =
            DelimiterSpec::new(Some(b"#".to_vec()), Some(b"#|".to_vec()), Some(b"|#".to_vec()))
                .unwrap();
        let source = b"#| block |# (print)\n";
        assert_eq!(counts(scan_bytes(source, &spec, 1)), (1, 1));
    }

    #[test]
    fn missing_trailing_newline_still_counts() {
        assert_eq!(counts(scan_bytes(b"lonely line", &c_spec(), 1)), (1, 1));
        assert_eq!(counts(scan_bytes(b"   ", &c_spec(), 1)), (1, 0));
    }

    #[test]
    fn zero_threshold_counts_blank_lines() {
        assert_eq!(counts(scan_bytes(b"\n\n", &c_spec(), 0)), (2, 2));
        assert_eq!(counts(scan_bytes(b"  \t \n", &c_spec(), 0)), (1, 1));
    }

    #[test]
    fn crlf_terminators_match_lf() {
        let lf = b"a\nb\n// c\n";
        let crlf = b"a\r\nb\r\n// c\r\n";
        assert_eq!(
            scan_bytes(lf, &c_spec(), 1),
            scan_bytes(crlf, &c_spec(), 1)
        );
    }

    #[test]
    fn lone_carriage_return_is_not_a_terminator() {
        assert_eq!(counts(scan_bytes(b"a\rb\n", &c_spec(), 1)), (1, 1));
    }

    #[test]
    fn emoji_counts_as_one_character() {
        assert_eq!(counts(scan_bytes("🦀\n".as_bytes(), &c_spec(), 2)), (1, 0));
        assert_eq!(counts(scan_bytes("🦀🦀\n".as_bytes(), &c_spec(), 2)), (1, 1));
    }

    #[test]
    fn chunk_boundaries_do_not_change_results() {
        let source = "int a; /* c\nomment */ int b;\n// tail 🦀\nlast".as_bytes();
        let spec = c_spec();
        let whole = scan_bytes(source, &spec, 1);
        // Byte-at-a-time delivery splits the delimiters and the emoji.
        let mut scanner = LineScanner::new(&spec, 1);
        for byte in source {
            scanner.push_chunk(std::slice::from_ref(byte));
        }
        assert_eq!(scanner.finish(), whole);
        // Uneven chunk sizes as well.
        for size in [2usize, 3, 5, 7] {
            let mut scanner = LineScanner::new(&spec, 1);
            for chunk in source.chunks(size) {
                scanner.push_chunk(chunk);
            }
            assert_eq!(scanner.finish(), whole, "chunk size {size}");
        }
    }

    #[test]
    fn block_state_spans_chunk_boundary() {
        let spec = c_spec();
        let mut scanner = LineScanner::new(&spec, 1);
        scanner.push_chunk(b"/* open\n");
        scanner.push_chunk(b"inside\n");
        scanner.push_chunk(b"*/ code();\n");
        assert_eq!(counts(scanner.finish()), (3, 1));
    }

    #[test]
    fn plain_spec_counts_every_significant_line() {
        let spec = DelimiterSpec::plain();
        assert_eq!(counts(scan_bytes(b"a\n\nb\n", &spec, 1)), (3, 2));
    }
}
