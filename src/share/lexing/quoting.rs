//! Quote marker pairing
//!
//!     Second tokenizer stage. Quote segments pair up strictly left to right: the first with
//!     the second, the third with the fourth, and so on. Each pair and everything between the
//!     two markers collapses into one quoted run whose content bypasses placeholder
//!     classification. Segments outside any pair are passed through untouched.
//!
//!     Two adjacent markers form a pair with empty content, which is how a doubled quote
//!     `''` is recognized.
//!
//!     With an odd number of markers the last one has no partner. It stays a plain quote
//!     segment, and everything after it keeps its segment boundaries, so placeholders after
//!     an unmatched quote are still substituted.

use super::Segment;
use std::ops::Range;

/// A run of the format string after quote pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run {
    /// A segment outside any quoted span
    Plain(Segment),
    /// A quoted span: `span` covers both markers, `inner` only the text between them
    Quoted {
        span: Range<usize>,
        inner: Range<usize>,
    },
}

impl Run {
    pub fn span(&self) -> Range<usize> {
        match self {
            Run::Plain(segment) => segment.span.clone(),
            Run::Quoted { span, .. } => span.clone(),
        }
    }
}

/// Collapse paired quote markers (and what they enclose) into quoted runs.
pub fn pair_quotes(segments: &[Segment]) -> Vec<Run> {
    let quotes: Vec<usize> = segments
        .iter()
        .enumerate()
        .filter(|(_, s)| s.kind.is_quote())
        .map(|(i, _)| i)
        .collect();

    let mut runs = Vec::with_capacity(segments.len());
    let mut cursor = 0;

    for pair in quotes.chunks_exact(2) {
        let (open, close) = (&segments[pair[0]], &segments[pair[1]]);
        runs.extend(segments[cursor..pair[0]].iter().cloned().map(Run::Plain));
        runs.push(Run::Quoted {
            span: open.span.start..close.span.end,
            inner: open.span.end..close.span.start,
        });
        cursor = pair[1] + 1;
    }

    if let Some(&unmatched) = quotes.chunks_exact(2).remainder().first() {
        tracing::debug!(
            offset = segments[unmatched].span.start,
            "unmatched quote marker, remainder is read unquoted"
        );
    }

    runs.extend(segments[cursor..].iter().cloned().map(Run::Plain));
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share::lexing::{split, RawToken};

    fn runs(source: &str) -> Vec<Run> {
        pair_quotes(&split(source))
    }

    #[test]
    fn test_no_quotes_passes_segments_through() {
        let source = "TI - AR";
        let segments = split(source);
        let runs = pair_quotes(&segments);
        assert_eq!(
            runs,
            segments.into_iter().map(Run::Plain).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_quoted_span_absorbs_codes() {
        assert_eq!(
            runs("a'TI'b"),
            vec![
                Run::Plain(Segment::new(RawToken::Text, 0..1)),
                Run::Quoted {
                    span: 1..5,
                    inner: 2..4
                },
                Run::Plain(Segment::new(RawToken::Text, 5..6)),
            ]
        );
    }

    #[test]
    fn test_doubled_quote_is_an_empty_pair() {
        assert_eq!(
            runs("it''s"),
            vec![
                Run::Plain(Segment::new(RawToken::Text, 0..2)),
                Run::Quoted {
                    span: 2..4,
                    inner: 3..3
                },
                Run::Plain(Segment::new(RawToken::Text, 4..5)),
            ]
        );
    }

    #[test]
    fn test_pairs_left_to_right() {
        // 'a''b' is two spans, not one span containing a doubled quote
        let result = runs("'a''b'");
        assert_eq!(
            result,
            vec![
                Run::Quoted {
                    span: 0..3,
                    inner: 1..2
                },
                Run::Quoted {
                    span: 3..6,
                    inner: 4..5
                },
            ]
        );
    }

    #[test]
    fn test_unmatched_quote_keeps_both_sides() {
        assert_eq!(
            runs("a'TI"),
            vec![
                Run::Plain(Segment::new(RawToken::Text, 0..1)),
                Run::Plain(Segment::new(RawToken::Quote, 1..2)),
                Run::Plain(Segment::new(RawToken::Title, 2..4)),
            ]
        );
    }

    #[test]
    fn test_unmatched_after_pair() {
        let result = runs("'x'AR'AL");
        assert_eq!(result.len(), 4);
        assert_eq!(
            result[0],
            Run::Quoted {
                span: 0..3,
                inner: 1..2
            }
        );
        assert_eq!(result[1], Run::Plain(Segment::new(RawToken::Artist, 3..5)));
        assert_eq!(result[2], Run::Plain(Segment::new(RawToken::Quote, 5..6)));
        assert_eq!(result[3], Run::Plain(Segment::new(RawToken::Album, 6..8)));
    }

    #[test]
    fn test_trailing_marker_appended_once() {
        let result = runs("'a'");
        assert_eq!(
            result,
            vec![Run::Quoted {
                span: 0..3,
                inner: 1..2
            }]
        );
    }

    #[test]
    fn test_run_spans_cover_source() {
        let source = "x'y'TI'z";
        let result = runs(source);
        let covered: Vec<_> = result.iter().map(Run::span).collect();
        assert_eq!(covered, vec![0..1, 1..4, 4..6, 6..7, 7..8]);
    }
}
