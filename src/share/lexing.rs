//! Delimiter-preserving split of a format string
//!
//!     The first tokenizer stage. A logos lexer cuts the format string at every placeholder
//!     code and at every single quote, keeping each delimiter as its own segment. Runs of
//!     ordinary text in between are merged back into one segment, so the result is exactly
//!     the split of the input on all delimiters, in source order, with no empty segments.
//!
//!     No two codes overlap (no code's last character starts another code), so longest-match
//!     lexing gives the same segments as splitting on each delimiter in turn.
//!
//!     A doubled quote `''` is not a delimiter of its own at this stage: it comes out as two
//!     adjacent quote segments and is resolved by [quoting].

pub mod quoting;

use super::pattern::PlaceholderCode;
use logos::Logos;
use std::ops::Range;

/// Raw segment kinds produced by the logos lexer.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawToken {
    #[token("TI")]
    Title,
    #[token("AR")]
    Artist,
    #[token("AL")]
    Album,
    #[token("CO")]
    Composer,
    #[token("SU")]
    SourceUrl,
    #[token("\\n")]
    Newline,
    #[token("'")]
    Quote,

    // Anything else. Characters that may start a code are lexed one at a time so the
    // code tokens above win whenever they match.
    #[regex(r"[^'TASC\\]+")]
    #[regex(r"[TASC\\]")]
    Text,
}

impl RawToken {
    /// The placeholder code this segment stands for, if any.
    pub fn code(&self) -> Option<PlaceholderCode> {
        match self {
            RawToken::Title => Some(PlaceholderCode::Title),
            RawToken::Artist => Some(PlaceholderCode::Artist),
            RawToken::Album => Some(PlaceholderCode::Album),
            RawToken::Composer => Some(PlaceholderCode::Composer),
            RawToken::SourceUrl => Some(PlaceholderCode::SourceUrl),
            RawToken::Newline => Some(PlaceholderCode::Newline),
            RawToken::Quote => Some(PlaceholderCode::Quote),
            RawToken::Text => None,
        }
    }

    pub fn is_quote(&self) -> bool {
        matches!(self, RawToken::Quote)
    }
}

/// One segment of the split, with its byte range in the format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: RawToken,
    pub span: Range<usize>,
}

impl Segment {
    pub fn new(kind: RawToken, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.clone()]
    }
}

/// Split a format string into delimiter and text segments.
///
/// Adjacent text pieces are merged; the result never contains an empty segment.
pub fn split(source: &str) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    for (result, span) in RawToken::lexer(source).spanned() {
        // Every character is covered by some rule; anything unexpected is kept as text.
        let kind = result.unwrap_or(RawToken::Text);
        if span.is_empty() {
            continue;
        }
        match segments.last_mut() {
            Some(last) if kind == RawToken::Text && last.kind == RawToken::Text => {
                last.span.end = span.end;
            }
            _ => segments.push(Segment::new(kind, span)),
        }
    }

    segments
}
