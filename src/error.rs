//! Error types for shelftag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for shelftag
#[derive(Debug, Error)]
pub enum ShelftagError {
    #[error("Bookshelf file not found: {0}")]
    BookshelfNotFound(PathBuf),

    #[error("Invalid bookshelf: {0}")]
    InvalidBookshelf(String),

    #[error("Invalid record at index {index}: {message}")]
    InvalidRecord { index: usize, message: String },

    #[error("Rules error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ShelftagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ShelftagError::BookshelfNotFound(_) => 2,
            ShelftagError::InvalidBookshelf(_)
            | ShelftagError::InvalidRecord { .. }
            | ShelftagError::Json(_) => 3,
            ShelftagError::Config(_) | ShelftagError::TomlDeserialize(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ShelftagError::BookshelfNotFound(path) => {
                format!(
                    "Bookshelf file not found: {}\n\n\
                    Suggestions:\n\
                    • Pass the path explicitly: shelftag convert path/to/user_bookshelf.json\n\
                    • Run from the directory that holds user_bookshelf.json",
                    path.display()
                )
            }
            ShelftagError::InvalidBookshelf(_)
            | ShelftagError::InvalidRecord { .. }
            | ShelftagError::Json(_) => {
                format!(
                    "{}\n\n\
                    Expected shape:\n\
                    [\n  {{ \"Title\": \"Dune\", \"Genre\": \"Fiction / Sci-Fi\" }},\n  \
                    {{ \"Title\": \"Walden\", \"Tags\": [\"Non-Fiction\"] }}\n]\n\n\
                    The file was not modified.",
                    self
                )
            }
            ShelftagError::Config(_) | ShelftagError::TomlDeserialize(_) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check the rules file passed with --rules or SHELFTAG_RULES\n\
                    • Write a starter file: shelftag rules --init shelftag.toml\n\
                    • Unset SHELFTAG_RULES to use the built-in rules",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ShelftagError
pub type Result<T> = std::result::Result<T, ShelftagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookshelf_not_found_suggestion() {
        let err = ShelftagError::BookshelfNotFound(PathBuf::from("/tmp/books.json"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("/tmp/books.json"));
        assert!(msg.contains("Suggestions"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_invalid_record_shows_expected_shape() {
        let err = ShelftagError::InvalidRecord {
            index: 3,
            message: "missing \"Title\"".to_string(),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.starts_with("Invalid record at index 3: missing \"Title\""));
        assert!(msg.contains("Expected shape"));
        assert!(msg.contains("not modified"));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_rules_error_suggestions() {
        let err = ShelftagError::Config("Rename chain: A -> B -> C".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("SHELFTAG_RULES"));
        assert!(msg.contains("shelftag rules --init"));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = ShelftagError::Io(std::io::Error::other("disk full"));
        assert_eq!(err.display_with_suggestions(), "IO error: disk full");
        assert_eq!(err.exit_code(), 1);
    }
}
