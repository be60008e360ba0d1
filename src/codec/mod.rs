//! Serialized token forms
//!
//! Canonical form: preorder walk, one token per node, the null marker for
//! every absent child. `3(9, 20(15, 7))` becomes `3,9,N,N,20,15,N,N,7,N,N`.
//! The empty tree is a single marker.
//!
//! Alternate form: breadth-first, markers only for absent children of
//! present nodes, trailing markers dropped (`3,9,20,N,N,15,7`). The two
//! forms are not interchangeable.
//!
//! Values whose text would read back as something else (the marker, text
//! holding the delimiter, edge whitespace) are escaped, see `escape`. On
//! decode, tokens are trimmed and trailing delimiters are tolerated.

mod config;
mod escape;
mod level_order;
mod preorder;

pub use config::{CodecConfig, DEFAULT_DELIMITER, DEFAULT_NULL_MARKER};

use std::fmt::{self, Display};
use std::str::FromStr;

use tracing::debug;

use crate::tree::Tree;
use crate::{StreamDefect, TreeError};

/// Encoder/decoder bound to one `CodecConfig`
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Create a codec, rejecting ambiguous layouts
    pub fn new(config: CodecConfig) -> Result<Self, TreeError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active layout
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode in canonical preorder form
    pub fn serialize<T: Display>(&self, tree: &Tree<T>) -> String {
        self.join(preorder::encode(tree))
    }

    /// Decode the canonical preorder form
    pub fn deserialize<T: FromStr>(&self, text: &str) -> Result<Tree<T>, TreeError> {
        let tokens = self.tokenize(text);
        debug!(tokens = tokens.len(), "decoding preorder stream");
        preorder::decode(&tokens, self.marker())
    }

    /// Encode in breadth-first form
    pub fn serialize_level_order<T: Display>(&self, tree: &Tree<T>) -> String {
        self.join(level_order::encode(tree))
    }

    /// Decode the breadth-first form
    pub fn deserialize_level_order<T: FromStr>(&self, text: &str) -> Result<Tree<T>, TreeError> {
        let tokens = self.tokenize(text);
        debug!(tokens = tokens.len(), "decoding level-order stream");
        level_order::decode(&tokens, self.marker())
    }

    fn marker(&self) -> &str {
        self.config.null_marker.trim()
    }

    /// Render slots (`None` = marker) into delimited text
    fn join<T: Display>(&self, slots: Vec<Option<&T>>) -> String {
        let mut out = String::new();
        for (idx, slot) in slots.into_iter().enumerate() {
            if idx > 0 {
                out.push(self.config.delimiter);
            }
            match slot {
                Some(value) => {
                    let text = value.to_string();
                    out.push_str(&escape::escape(&text, self.config.delimiter, self.marker()));
                }
                None => out.push_str(self.marker()),
            }
        }
        out
    }

    fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut tokens: Vec<&str> = text.split(self.config.delimiter).map(str::trim).collect();
        while tokens.last() == Some(&"") {
            tokens.pop();
        }
        tokens
    }
}

/// Classify one token: `None` for the marker, the parsed value otherwise
fn parse_token<T: FromStr>(
    token: &str,
    marker: &str,
    position: usize,
) -> Result<Option<T>, TreeError> {
    if token == marker {
        return Ok(None);
    }
    let invalid = || TreeError::MalformedStream {
        position,
        defect: StreamDefect::InvalidToken {
            token: token.to_string(),
        },
    };
    let text = escape::unescape(token).ok_or_else(invalid)?;
    text.parse().map(Some).map_err(|_| invalid())
}

/// Encode `tree` in the canonical form (`,` delimiter, `N` marker)
pub fn serialize<T: Display>(tree: &Tree<T>) -> String {
    Codec::default().serialize(tree)
}

/// Decode the canonical form
pub fn deserialize<T: FromStr>(text: &str) -> Result<Tree<T>, TreeError> {
    Codec::default().deserialize(text)
}

/// Encode `tree` breadth-first (`,` delimiter, `N` marker)
pub fn serialize_level_order<T: Display>(tree: &Tree<T>) -> String {
    Codec::default().serialize_level_order(tree)
}

/// Decode the breadth-first form
pub fn deserialize_level_order<T: FromStr>(text: &str) -> Result<Tree<T>, TreeError> {
    Codec::default().deserialize_level_order(text)
}

/// Canonical preorder form
impl<T: Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}
