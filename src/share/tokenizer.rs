//! Format string tokenizer
//!
//! Orchestrates the two lexing stages and classifies the result:
//!
//! 1. [split](crate::share::lexing::split) cuts the string at codes and quote markers
//! 2. [pair_quotes](crate::share::lexing::quoting::pair_quotes) collapses quoted spans
//! 3. every run becomes a [Token]:
//!    - a quoted span with content is a literal of that content, markers stripped
//!    - an empty quoted span (a doubled quote) is a literal apostrophe
//!    - an unpaired quote marker contributes nothing
//!    - a code segment is a placeholder, any other segment a literal
//!
//! Tokenizing never fails. Malformed input degrades to literal text.

use super::lexing::quoting::{pair_quotes, Run};
use super::lexing::{split, RawToken};
use super::pattern::PlaceholderCode;
use super::token::Token;

/// Tokenize a format string.
pub fn tokenize(format: &str) -> Vec<Token> {
    let segments = split(format);
    let runs = pair_quotes(&segments);
    let tokens: Vec<Token> = runs
        .into_iter()
        .filter_map(|run| classify(format, run))
        .collect();
    tracing::trace!(format, count = tokens.len(), "tokenized format string");
    tokens
}

fn classify(format: &str, run: Run) -> Option<Token> {
    match run {
        Run::Quoted { inner, .. } if inner.is_empty() => {
            Some(Token::literal(PlaceholderCode::Quote.raw()))
        }
        Run::Quoted { inner, .. } => Some(Token::literal(&format[inner])),
        Run::Plain(segment) => match segment.kind {
            RawToken::Quote => None,
            RawToken::Text => {
                let text = segment.text(format);
                (!text.is_empty()).then(|| Token::literal(text))
            }
            kind => kind.code().map(Token::Placeholder),
        },
    }
}
