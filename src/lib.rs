//! # nowplaying
//!
//! Renders "now playing" share text from track metadata and a user-authored format string.
//!
//! ```text
//! #NowPlaying TI - AR (AL)   ->   #NowPlaying Song - Band (Record)
//! ```
//!
//! See the [share] module for the template language.

pub mod share;
