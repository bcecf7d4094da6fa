//! Renderer
//!
//!     Walks a token stream and concatenates one fragment per token, with no separator.
//!
//!         - literal: emitted verbatim
//!         - TI, AR, AL: the track field wrapped as prefix + value + suffix
//!         - CO, SU: wrapped the same way when present, empty when absent (no prefix/suffix)
//!         - \n: one line break, never wrapped
//!         - quote codes: the literal text they stand for, should one reach this stage
//!
//!     Rendering is a pure function of its inputs.

use super::modifier::Modifiers;
use super::pattern::PlaceholderCode;
use super::token::Token;
use super::track::TrackSnapshot;
use std::borrow::Cow;

/// Converts a token into its fragment of the share text.
pub trait ToShareString {
    fn to_share_string<'a>(&'a self, track: &'a TrackSnapshot, modifiers: &Modifiers)
        -> Cow<'a, str>;
}

impl ToShareString for Token {
    fn to_share_string<'a>(
        &'a self,
        track: &'a TrackSnapshot,
        modifiers: &Modifiers,
    ) -> Cow<'a, str> {
        match self {
            Token::Literal(text) => Cow::Borrowed(text.as_str()),
            Token::Placeholder(code) => code.to_share_string(track, modifiers),
        }
    }
}

impl ToShareString for PlaceholderCode {
    fn to_share_string<'a>(
        &'a self,
        track: &'a TrackSnapshot,
        modifiers: &Modifiers,
    ) -> Cow<'a, str> {
        let value = match self {
            PlaceholderCode::Quote => return Cow::Borrowed(""),
            PlaceholderCode::QuoteLiteral => return Cow::Borrowed("'"),
            PlaceholderCode::Newline => return Cow::Borrowed("\n"),
            PlaceholderCode::Title => Some(track.title.as_str()),
            PlaceholderCode::Artist => Some(track.artist.as_str()),
            PlaceholderCode::Album => Some(track.album.as_str()),
            PlaceholderCode::Composer => track.composer.as_deref(),
            PlaceholderCode::SourceUrl => track.source_url.as_deref(),
        };
        match value {
            Some(value) => Cow::Owned(modifiers.wrap(*self, value)),
            None => Cow::Borrowed(""),
        }
    }
}

/// Render a token stream into the share text.
pub fn render(tokens: &[Token], track: &TrackSnapshot, modifiers: &Modifiers) -> String {
    let mut result = String::new();
    for token in tokens {
        result.push_str(&token.to_share_string(track, modifiers));
    }
    result
}
