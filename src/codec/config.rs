//! Codec configuration
//!
//! Delimiter and null marker for the textual token forms.

use crate::TreeError;

/// Token delimiter used by the canonical form
pub const DEFAULT_DELIMITER: char = ',';

/// Null marker used by the canonical form
pub const DEFAULT_NULL_MARKER: &str = "N";

/// Textual layout of a serialized tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Separator between tokens
    pub delimiter: char,

    /// Token standing for an absent child
    pub null_marker: String,
}

impl CodecConfig {
    /// Canonical layout: `,` delimiter, `N` marker
    pub fn canonical() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            null_marker: DEFAULT_NULL_MARKER.to_string(),
        }
    }

    /// Replace the delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Replace the null marker
    pub fn with_null_marker(mut self, marker: impl Into<String>) -> Self {
        self.null_marker = marker.into();
        self
    }

    /// Reject layouts whose tokens could not be split back apart
    pub fn validate(&self) -> Result<(), TreeError> {
        let marker = self.null_marker.trim();
        if marker.is_empty() {
            return Err(TreeError::InvalidCodecConfig(
                "null marker must not be blank".to_string(),
            ));
        }
        if self.delimiter.is_alphanumeric() || matches!(self.delimiter, '\\' | '{' | '}') {
            return Err(TreeError::InvalidCodecConfig(format!(
                "delimiter '{}' would collide with value escapes",
                self.delimiter
            )));
        }
        if marker.contains('\\') {
            return Err(TreeError::InvalidCodecConfig(format!(
                "null marker '{}' contains a backslash",
                self.null_marker
            )));
        }
        if marker.contains(self.delimiter) {
            return Err(TreeError::InvalidCodecConfig(format!(
                "null marker '{}' contains the delimiter '{}'",
                self.null_marker, self.delimiter
            )));
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_is_valid() {
        let config = CodecConfig::default();
        assert_eq!(config.delimiter, ',');
        assert_eq!(config.null_marker, "N");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_marker_containing_delimiter() {
        let config = CodecConfig::default().with_null_marker("a,b");
        assert!(matches!(
            config.validate(),
            Err(TreeError::InvalidCodecConfig(_))
        ));
    }

    #[test]
    fn test_blank_marker() {
        let config = CodecConfig::default().with_null_marker("  ");
        assert!(config.validate().is_err());

        let config = CodecConfig::default()
            .with_delimiter(';')
            .with_null_marker("#");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_escape_characters_rejected() {
        for delimiter in ['\\', '{', '}', 'x', '7'] {
            let config = CodecConfig::default().with_delimiter(delimiter);
            assert!(config.validate().is_err(), "delimiter {delimiter:?} accepted");
        }
        let config = CodecConfig::default().with_null_marker("\\N");
        assert!(config.validate().is_err());
        assert!(CodecConfig::default().with_delimiter(' ').validate().is_ok());
    }
}
