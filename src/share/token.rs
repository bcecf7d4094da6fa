//! Tokens of a format string
//!
//!     The tokenizer's output and the renderer's input. Order is document order. A literal is
//!     never empty: quote markers and empty quoted spans are resolved before a token is made.

use super::pattern::PlaceholderCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Token {
    /// Text emitted verbatim
    Literal(String),
    /// A code substituted at render time
    Placeholder(PlaceholderCode),
}

impl Token {
    pub fn literal(text: impl Into<String>) -> Self {
        Token::Literal(text.into())
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Token::Placeholder(_))
    }

    pub fn code(&self) -> Option<PlaceholderCode> {
        match self {
            Token::Placeholder(code) => Some(*code),
            Token::Literal(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_json_shape() {
        let tokens = vec![
            Token::literal("#NowPlaying "),
            Token::Placeholder(PlaceholderCode::Title),
        ];
        let json = serde_json::to_string(&tokens).unwrap();
        assert_eq!(
            json,
            r##"[{"kind":"literal","value":"#NowPlaying "},{"kind":"placeholder","value":"TI"}]"##
        );
    }

    #[test]
    fn test_code() {
        assert_eq!(
            Token::Placeholder(PlaceholderCode::Album).code(),
            Some(PlaceholderCode::Album)
        );
        assert_eq!(Token::literal("x").code(), None);
        assert!(!Token::literal("AL").is_placeholder());
    }
}
