//! Referential-integrity policy.
//!
//! The schema declares the review → book relation but the engine does not
//! enforce it, and the original system was inconsistent about what should
//! happen at the seams (reviews for unknown books, reviews outliving their
//! book). Rather than guess an intent, both checks are explicit knobs that
//! the repository consults at runtime.

use serde::{Deserialize, Serialize};

/// How strictly review references are held against the books table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrityPolicy {
    /// Reject `add_review` for a `book_id` with no matching book.
    pub validate_review_book: bool,
    /// Delete a book's reviews together with the book.
    pub cascade_reviews: bool,
}

impl IntegrityPolicy {
    /// The original behavior: orphans allowed in both directions.
    pub const PERMISSIVE: Self = Self {
        validate_review_book: false,
        cascade_reviews: false,
    };

    /// Both checks enabled.
    pub const STRICT: Self = Self {
        validate_review_book: true,
        cascade_reviews: true,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_permissive() {
        assert_eq!(IntegrityPolicy::default(), IntegrityPolicy::PERMISSIVE);
    }
}
