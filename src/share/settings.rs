//! Share settings loader
//!
//! `defaults/nowplaying.default.toml` is embedded into the binary so that the documented
//! defaults and runtime behavior stay in sync. Applications layer user files and single-key
//! overrides on top via [`Loader`] before deserializing into [`ShareSettings`].
//!
//! A user file that sets `modifiers` replaces the whole default list; codes it leaves out
//! simply render unwrapped.

use super::error::ShareError;
use super::modifier::Modifiers;
use super::rendering::render;
use super::token::Token;
use super::tokenizer::tokenize;
use super::track::TrackSnapshot;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/nowplaying.default.toml");

/// Format string used when the user has not configured one.
pub const DEFAULT_FORMAT: &str = "#NowPlaying TI - AR (AL)";

/// Everything needed to turn a track into share text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareSettings {
    pub format: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl ShareSettings {
    pub fn new(format: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            format: format.into(),
            modifiers,
        }
    }

    /// The token stream of the configured format string.
    pub fn tokens(&self) -> Vec<Token> {
        tokenize(&self.format)
    }

    /// Render the share text for one track.
    pub fn render(&self, track: &TrackSnapshot) -> String {
        render(&self.tokens(), track, &self.modifiers)
    }
}

impl Default for ShareSettings {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT, Modifiers::defaults())
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a settings file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        tracing::debug!(path = %path.as_ref().display(), "layering settings file");
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional settings file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        tracing::debug!(path = %path.as_ref().display(), "layering optional settings file");
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ShareError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting settings.
    pub fn build(self) -> Result<ShareSettings, ShareError> {
        let settings: ShareSettings = self.builder.build()?.try_deserialize()?;
        tracing::debug!(
            format = %settings.format,
            modifiers = settings.modifiers.len(),
            "loaded share settings"
        );
        Ok(settings)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ShareSettings, ShareError> {
    Loader::new().build()
}
