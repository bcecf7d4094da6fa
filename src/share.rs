//! Share text templates
//!
//!     A format string is tokenized once and rendered against a track snapshot and the user's
//!     modifiers. The pieces:
//!
//!         - [pattern]: the closed set of placeholder codes
//!         - [lexing]: delimiter-preserving split and quote pairing
//!         - [tokenizer]: classification into [token::Token]s
//!         - [rendering]: substitution and concatenation
//!         - [modifier], [track]: the renderer's inputs
//!         - [settings]: persisted format string and modifiers, layered with `config`
//!
//!     Tokenizing and rendering hold no state and never fail, so they can be called from any
//!     thread without coordination.

pub mod error;
pub mod lexing;
pub mod modifier;
pub mod pattern;
pub mod rendering;
pub mod settings;
pub mod token;
pub mod tokenizer;
pub mod track;

pub use error::ShareError;
pub use modifier::{Modifier, Modifiers};
pub use pattern::PlaceholderCode;
pub use rendering::{render, ToShareString};
pub use settings::{load_defaults, Loader, ShareSettings, DEFAULT_FORMAT};
pub use token::Token;
pub use tokenizer::tokenize;
pub use track::TrackSnapshot;

/// Tokenize `format` and render it for `track` in one call.
pub fn share_text(format: &str, modifiers: &Modifiers, track: &TrackSnapshot) -> String {
    render(&tokenize(format), track, modifiers)
}
