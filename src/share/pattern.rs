//! Placeholder codes
//!
//!     A format string mixes literal text with short fixed codes. The set of codes is closed:
//!     every recognized code is listed in [PlaceholderCode::ALL], and lookups by raw string go
//!     through that table only.
//!
//!         - TI: track title
//!         - AR: artist
//!         - AL: album
//!         - CO: composer (optional field)
//!         - SU: source url (optional field)
//!         - \n: a backslash followed by n, rendered as a line break
//!         - ' and '': quote marker and doubled quote, resolved by the tokenizer
//!
//!     Only the track-field codes can be wrapped by a modifier, see [PlaceholderCode::is_replaceable].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A recognized placeholder code inside a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceholderCode {
    #[serde(rename = "'")]
    Quote,
    #[serde(rename = "''")]
    QuoteLiteral,
    #[serde(rename = "TI")]
    Title,
    #[serde(rename = "AR")]
    Artist,
    #[serde(rename = "AL")]
    Album,
    #[serde(rename = "CO")]
    Composer,
    #[serde(rename = "SU")]
    SourceUrl,
    #[serde(rename = "\\n")]
    Newline,
}

impl PlaceholderCode {
    /// Every code, in declaration order.
    pub const ALL: [PlaceholderCode; 8] = [
        PlaceholderCode::Quote,
        PlaceholderCode::QuoteLiteral,
        PlaceholderCode::Title,
        PlaceholderCode::Artist,
        PlaceholderCode::Album,
        PlaceholderCode::Composer,
        PlaceholderCode::SourceUrl,
        PlaceholderCode::Newline,
    ];

    /// The exact text a user types for this code.
    pub fn raw(&self) -> &'static str {
        match self {
            PlaceholderCode::Quote => "'",
            PlaceholderCode::QuoteLiteral => "''",
            PlaceholderCode::Title => "TI",
            PlaceholderCode::Artist => "AR",
            PlaceholderCode::Album => "AL",
            PlaceholderCode::Composer => "CO",
            PlaceholderCode::SourceUrl => "SU",
            PlaceholderCode::Newline => "\\n",
        }
    }

    /// Exact-match lookup of a raw string in [PlaceholderCode::ALL].
    pub fn from_raw(raw: &str) -> Option<PlaceholderCode> {
        Self::ALL.iter().copied().find(|code| code.raw() == raw)
    }

    /// Whether this code stands for a track field (and so may carry a modifier).
    pub fn is_replaceable(&self) -> bool {
        !matches!(
            self,
            PlaceholderCode::Quote | PlaceholderCode::QuoteLiteral | PlaceholderCode::Newline
        )
    }

    /// The codes that stand for track fields, in declaration order.
    pub fn replaceable() -> impl Iterator<Item = PlaceholderCode> {
        Self::ALL.into_iter().filter(|code| code.is_replaceable())
    }

    /// Human readable name, used by the CLI listing.
    pub fn describe(&self) -> &'static str {
        match self {
            PlaceholderCode::Quote => "quote marker",
            PlaceholderCode::QuoteLiteral => "literal apostrophe",
            PlaceholderCode::Title => "title",
            PlaceholderCode::Artist => "artist",
            PlaceholderCode::Album => "album",
            PlaceholderCode::Composer => "composer",
            PlaceholderCode::SourceUrl => "source url",
            PlaceholderCode::Newline => "line break",
        }
    }
}

impl fmt::Display for PlaceholderCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())
    }
}
