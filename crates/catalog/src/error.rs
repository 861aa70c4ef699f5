//! Catalog Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.
//!
//! The original system signaled failures with a mix of negative integers,
//! message strings and nulls depending on the operation. Here every operation
//! reports through one closed set of kinds, so callers can match on what
//! happened instead of sniffing a sentinel.

use derive_more::{Display, Error};

/// A catalog error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// The `Display` strings double as the human-readable messages the console
/// prints, so validation rejections carry everything the prompt needs.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[display("database error")]
    Database,
    #[display("database migration error")]
    Migration,
    /// Duplicate category name (compared case-insensitively). `existing` is
    /// the comma-joined list of current category names.
    #[display("category '{name}' already exists (current categories: {existing})")]
    CategoryExists { name: String, existing: String },
    /// Duplicate author name (compared exactly).
    #[display("author '{_0}' already exists")]
    AuthorExists(#[error(not(source))] String),
    /// A book with the same title, author and category is already catalogued.
    #[display("'{_0}' is already catalogued for that author and category")]
    BookExists(#[error(not(source))] String),
    #[display("no category with id {_0}")]
    CategoryNotFound(#[error(not(source))] i64),
    #[display("no book with id {_0}")]
    BookNotFound(#[error(not(source))] i64),
    /// A stored value failed conversion to its domain representation.
    #[display("invalid catalog data: {_0}")]
    InvalidData(#[error(not(source))] &'static str),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Returns `true` for rejections of caller input (duplicates, unknown
    /// ids) as opposed to storage-engine failures.
    pub fn is_validation(&self) -> bool {
        !matches!(self, ErrorKind::Database | ErrorKind::Migration | ErrorKind::InvalidData(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exn::ResultExt;

    #[test]
    fn error_kind_display() {
        assert_eq!(
            ErrorKind::CategoryExists {
                name: "fiction".to_string(),
                existing: "Fiction, History".to_string(),
            }
            .to_string(),
            "category 'fiction' already exists (current categories: Fiction, History)"
        );
        assert_eq!(ErrorKind::AuthorExists("Jane Doe".to_string()).to_string(), "author 'Jane Doe' already exists");
        assert_eq!(ErrorKind::CategoryNotFound(42).to_string(), "no category with id 42");
    }

    #[test]
    fn error_kind_classification() {
        assert!(!ErrorKind::Database.is_retryable());
        assert!(!ErrorKind::Database.is_validation());
        assert!(ErrorKind::BookNotFound(1).is_validation());
        assert!(ErrorKind::AuthorExists("A".to_string()).is_validation());
        assert!(!ErrorKind::InvalidData("rating").is_validation());
    }

    #[test]
    fn error_from_result() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::other("disk on fire"));

        let err: Result<()> = result.or_raise(|| ErrorKind::Database);

        let exn = err.unwrap_err();
        // Exn<E> implements Deref<Target = E>
        assert_eq!(*exn, ErrorKind::Database);
    }
}
