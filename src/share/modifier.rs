//! Per-placeholder prefix/suffix modifiers
//!
//!     A modifier wraps the value of one track-field placeholder: `prefix + value + suffix`.
//!     Settings hold at most one modifier per code. Looking up a code with no modifier yields
//!     empty strings, so an unconfigured placeholder renders its bare value.

use super::error::ShareError;
use super::pattern::PlaceholderCode;
use serde::{Deserialize, Serialize};

/// Prefix and suffix applied around one placeholder's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    /// Persisted settings from older releases name this field `id`.
    #[serde(alias = "id")]
    pub code: PlaceholderCode,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

impl Modifier {
    pub fn new(code: PlaceholderCode, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            code,
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// An entry with empty prefix and suffix.
    pub fn empty(code: PlaceholderCode) -> Self {
        Self::new(code, "", "")
    }
}

/// Ordered modifier list holding at most one entry per code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Modifier>", into = "Vec<Modifier>")]
pub struct Modifiers {
    entries: Vec<Modifier>,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// One empty entry per replaceable code.
    pub fn defaults() -> Self {
        PlaceholderCode::replaceable().map(Modifier::empty).collect()
    }

    /// Insert a modifier, replacing any existing entry for the same code in place.
    pub fn set(&mut self, modifier: Modifier) {
        match self.entries.iter_mut().find(|m| m.code == modifier.code) {
            Some(existing) => *existing = modifier,
            None => self.entries.push(modifier),
        }
    }

    pub fn get(&self, code: PlaceholderCode) -> Option<&Modifier> {
        self.entries.iter().find(|m| m.code == code)
    }

    pub fn prefix(&self, code: PlaceholderCode) -> &str {
        self.get(code).map(|m| m.prefix.as_str()).unwrap_or("")
    }

    pub fn suffix(&self, code: PlaceholderCode) -> &str {
        self.get(code).map(|m| m.suffix.as_str()).unwrap_or("")
    }

    /// `prefix + value + suffix` for the given code.
    pub fn wrap(&self, code: PlaceholderCode, value: &str) -> String {
        let prefix = self.prefix(code);
        let suffix = self.suffix(code);
        let mut wrapped = String::with_capacity(prefix.len() + value.len() + suffix.len());
        wrapped.push_str(prefix);
        wrapped.push_str(value);
        wrapped.push_str(suffix);
        wrapped
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modifier> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decode the persisted JSON array of modifiers.
    pub fn from_json(json: &str) -> Result<Self, ShareError> {
        let entries: Vec<Modifier> =
            serde_json::from_str(json).map_err(|e| ShareError::InvalidModifiers(e.to_string()))?;
        Ok(entries.into())
    }

    /// Encode as the persisted JSON array.
    pub fn to_json(&self) -> Result<String, ShareError> {
        serde_json::to_string(&self.entries)
            .map_err(|e| ShareError::InvalidModifiers(e.to_string()))
    }
}

impl From<Vec<Modifier>> for Modifiers {
    /// Duplicate codes keep their first entry.
    fn from(entries: Vec<Modifier>) -> Self {
        let mut modifiers = Modifiers::new();
        for modifier in entries {
            if modifiers.get(modifier.code).is_none() {
                modifiers.entries.push(modifier);
            }
        }
        modifiers
    }
}

impl From<Modifiers> for Vec<Modifier> {
    fn from(modifiers: Modifiers) -> Self {
        modifiers.entries
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}
