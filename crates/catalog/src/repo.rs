//! Combined repository for the four catalog entities.
//!
//! Books, authors, categories and reviews are small enough to live behind one
//! repository: every operation is a single lookup-validate-mutate sequence,
//! and the entities only ever appear together (a book is meaningless without
//! its author and category, a review without its book).

use crate::Database;
use crate::error::{ErrorKind, Result};
use crate::models::{Author, Book, BookListing, Category, Review, ReviewRow};
use crate::policy::IntegrityPolicy;
use exn::ResultExt;
use sqlx::SqlitePool;
use time::UtcDateTime;
use tracing::{debug, warn};

/// Repository for managing catalog records.
///
/// Duplicate checks are performed by lookup-then-insert rather than schema
/// constraints, matching the informal uniqueness rules of the data model:
/// category names compare case-insensitively, author names exactly, and
/// books by their (title, author, category) triple.
///
/// # Relationships
///
/// - A book references one author and one category (by id).
/// - A review references one book; many reviews may reference the same book.
/// - The engine does not enforce these references. Whether a review may
///   point at a missing book, and whether reviews die with their book, is
///   decided by the [`IntegrityPolicy`] given at construction.
#[derive(Debug, Clone)]
pub struct Repository {
    pool: SqlitePool,
    policy: IntegrityPolicy,
}
impl From<&Database> for Repository {
    fn from(db: &Database) -> Self {
        Self { pool: db.pool().clone(), policy: IntegrityPolicy::default() }
    }
}
impl Repository {
    /// Create a new repository with the given connection pool and policy.
    pub fn new(pool: SqlitePool, policy: IntegrityPolicy) -> Self {
        Self { pool, policy }
    }

    /// The integrity policy this repository was constructed with.
    pub fn policy(&self) -> IntegrityPolicy {
        self.policy
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// Insert a new category and return its id.
    ///
    /// Names are compared ignoring letter case; a duplicate is rejected with
    /// [`ErrorKind::CategoryExists`], whose message lists every current
    /// category name so the caller can present the alternatives.
    pub async fn insert_category(&self, name: impl AsRef<str>) -> Result<i64> {
        let name = name.as_ref();
        let conflict: Option<i64> = sqlx::query_scalar(include_str!("../queries/find_category_conflict.sql"))
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        if conflict.is_some() {
            let existing =
                self.get_categories().await?.into_iter().map(|c| c.name).collect::<Vec<_>>().join(", ");
            exn::bail!(ErrorKind::CategoryExists { name: name.to_string(), existing });
        }
        let result = sqlx::query(include_str!("../queries/insert_category.sql"))
            .bind(name)
            .execute(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        debug!(category = name, id = result.last_insert_rowid(), "created category");
        Ok(result.last_insert_rowid())
    }

    /// List all categories in insertion order.
    pub async fn get_categories(&self) -> Result<Vec<Category>> {
        sqlx::query_as(include_str!("../queries/get_categories.sql"))
            .fetch_all(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)
    }

    /// Get a single category by id.
    pub async fn get_category(&self, category_id: i64) -> Result<Option<Category>> {
        sqlx::query_as(include_str!("../queries/get_category.sql"))
            .bind(category_id)
            .fetch_optional(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)
    }

    // =========================================================================
    // Authors
    // =========================================================================

    /// Insert a new author and return their id.
    ///
    /// Rejects an exact-match duplicate name with [`ErrorKind::AuthorExists`].
    pub async fn add_author(&self, name: impl AsRef<str>) -> Result<i64> {
        let name = name.as_ref();
        if self.author_by_name(name).await?.is_some() {
            exn::bail!(ErrorKind::AuthorExists(name.to_string()));
        }
        self.insert_author(name).await
    }

    /// Resolve an author id by exact name, inserting the author if absent.
    ///
    /// This is the resolution step the book operations use: callers hand
    /// over a name and never deal in author ids directly.
    pub async fn find_or_create_author(&self, name: impl AsRef<str>) -> Result<i64> {
        let name = name.as_ref();
        match self.author_by_name(name).await? {
            Some(author) => Ok(author.id),
            None => self.insert_author(name).await,
        }
    }

    async fn author_by_name(&self, name: &str) -> Result<Option<Author>> {
        sqlx::query_as(include_str!("../queries/find_author_by_name.sql"))
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)
    }

    async fn insert_author(&self, name: &str) -> Result<i64> {
        let result = sqlx::query(include_str!("../queries/insert_author.sql"))
            .bind(name)
            .execute(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        debug!(author = name, id = result.last_insert_rowid(), "created author");
        Ok(result.last_insert_rowid())
    }

    // =========================================================================
    // Books
    // =========================================================================

    /// Insert a new book and return its id.
    ///
    /// The category id must refer to an existing category
    /// ([`ErrorKind::CategoryNotFound`] otherwise; nothing is inserted). The
    /// author is resolved or created by name. A book whose
    /// (title, author, category) triple is already catalogued is rejected
    /// with [`ErrorKind::BookExists`].
    pub async fn add_book(
        &self,
        title: impl AsRef<str>,
        author_name: impl AsRef<str>,
        category_id: i64,
    ) -> Result<i64> {
        let title = title.as_ref();
        if self.get_category(category_id).await?.is_none() {
            exn::bail!(ErrorKind::CategoryNotFound(category_id));
        }
        let author_id = self.find_or_create_author(author_name).await?;
        let conflict: Option<i64> = sqlx::query_scalar(include_str!("../queries/find_book_conflict.sql"))
            .bind(title)
            .bind(author_id)
            .bind(category_id)
            .fetch_optional(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        if conflict.is_some() {
            exn::bail!(ErrorKind::BookExists(title.to_string()));
        }
        let result = sqlx::query(include_str!("../queries/insert_book.sql"))
            .bind(title)
            .bind(author_id)
            .bind(category_id)
            .execute(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        debug!(book = title, id = result.last_insert_rowid(), "catalogued book");
        Ok(result.last_insert_rowid())
    }

    /// Update a book's title.
    ///
    /// Unconditional, keyed by book id: an unknown id affects zero rows,
    /// creates nothing, and reports `false`.
    pub async fn update_book_title(&self, book_id: i64, title: impl AsRef<str>) -> Result<bool> {
        let result = sqlx::query(include_str!("../queries/update_book_title.sql"))
            .bind(title.as_ref())
            .bind(book_id)
            .execute(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        Ok(result.rows_affected() > 0)
    }

    /// Update a book's author by name, creating the author if absent.
    ///
    /// The update itself is unconditional, keyed by book id; see
    /// [`update_book_title`](Self::update_book_title).
    pub async fn update_book_author(&self, book_id: i64, author_name: impl AsRef<str>) -> Result<bool> {
        let author_id = self.find_or_create_author(author_name).await?;
        let result = sqlx::query(include_str!("../queries/update_book_author.sql"))
            .bind(author_id)
            .bind(book_id)
            .execute(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        Ok(result.rows_affected() > 0)
    }

    /// Update a book's category id.
    ///
    /// Unconditional on both sides: neither the book id nor the category id
    /// is checked, matching the original update semantics. A listing for a
    /// book pointed at a missing category shows the category as absent.
    pub async fn update_book_category(&self, book_id: i64, category_id: i64) -> Result<bool> {
        let result = sqlx::query(include_str!("../queries/update_book_category.sql"))
            .bind(category_id)
            .bind(book_id)
            .execute(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a book by id, reporting whether a row was removed.
    ///
    /// When the policy enables `cascade_reviews`, the book's reviews are
    /// removed in the same transaction. Otherwise reviews referencing the
    /// deleted book are left behind (the original behavior) and a warning
    /// notes how many were orphaned.
    pub async fn delete_book(&self, book_id: i64) -> Result<bool> {
        if self.policy.cascade_reviews {
            let mut tx = self.pool.begin().await.or_raise(|| ErrorKind::Database)?;
            let reviews = sqlx::query(include_str!("../queries/delete_reviews_for_book.sql"))
                .bind(book_id)
                .execute(&mut *tx)
                .await
                .or_raise(|| ErrorKind::Database)?;
            let books = sqlx::query(include_str!("../queries/delete_book.sql"))
                .bind(book_id)
                .execute(&mut *tx)
                .await
                .or_raise(|| ErrorKind::Database)?;
            tx.commit().await.or_raise(|| ErrorKind::Database)?;
            if reviews.rows_affected() > 0 {
                debug!(book_id, reviews = reviews.rows_affected(), "cascaded review deletion");
            }
            return Ok(books.rows_affected() > 0);
        }
        let result = sqlx::query(include_str!("../queries/delete_book.sql"))
            .bind(book_id)
            .execute(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            let orphans: i64 = sqlx::query_scalar(include_str!("../queries/count_reviews_for_book.sql"))
                .bind(book_id)
                .fetch_one(&self.pool)
                .await
                .or_raise(|| ErrorKind::Database)?;
            if orphans > 0 {
                warn!(book_id, orphans, "deleted book leaves orphaned reviews");
            }
        }
        Ok(deleted)
    }

    /// Get a single book by id.
    pub async fn get_book(&self, book_id: i64) -> Result<Option<Book>> {
        sqlx::query_as(include_str!("../queries/get_book.sql"))
            .bind(book_id)
            .fetch_optional(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)
    }

    /// List books by their author's exact name.
    pub async fn get_books_by_author(&self, author_name: impl AsRef<str>) -> Result<Vec<Book>> {
        sqlx::query_as(include_str!("../queries/get_books_by_author.sql"))
            .bind(author_name.as_ref())
            .fetch_all(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)
    }

    /// List books by exact title.
    pub async fn get_books_by_title(&self, title: impl AsRef<str>) -> Result<Vec<Book>> {
        sqlx::query_as(include_str!("../queries/get_books_by_title.sql"))
            .bind(title.as_ref())
            .fetch_all(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)
    }

    /// List the whole catalog as denormalized [`BookListing`] rows,
    /// optionally restricted to one category.
    ///
    /// A book with several reviews appears once per review with identical
    /// book fields; a book with no matching author, category or review
    /// carries `None` in those fields.
    pub async fn get_all_books(&self, category: Option<i64>) -> Result<Vec<BookListing>> {
        let rows: Vec<BookListing> = match category {
            Some(category_id) => {
                sqlx::query_as(include_str!("../queries/list_books_in_category.sql"))
                    .bind(category_id)
                    .fetch_all(&self.pool)
                    .await
            },
            None => sqlx::query_as(include_str!("../queries/list_books.sql")).fetch_all(&self.pool).await,
        }
        .or_raise(|| ErrorKind::Database)?;
        Ok(rows)
    }

    /// Count the book rows.
    pub async fn count_books(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar(include_str!("../queries/count_books.sql"))
            .fetch_one(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        Ok(count as u64)
    }

    /// Count the review rows.
    pub async fn count_reviews(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar(include_str!("../queries/count_reviews.sql"))
            .fetch_one(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        Ok(count as u64)
    }

    // =========================================================================
    // Reviews
    // =========================================================================

    /// Insert a review for a book and return its id.
    ///
    /// The rating is stored as given; range checks belong to input
    /// collection. The referenced book is verified only when the policy
    /// enables `validate_review_book` ([`ErrorKind::BookNotFound`] then).
    pub async fn add_review(
        &self,
        book_id: i64,
        user_id: i64,
        rating: f64,
        body: impl AsRef<str>,
    ) -> Result<i64> {
        if self.policy.validate_review_book && self.get_book(book_id).await?.is_none() {
            exn::bail!(ErrorKind::BookNotFound(book_id));
        }
        let result = sqlx::query(include_str!("../queries/insert_review.sql"))
            .bind(book_id)
            .bind(user_id)
            .bind(rating)
            .bind(body.as_ref())
            .bind(UtcDateTime::now().unix_timestamp())
            .execute(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        debug!(book_id, user_id, rating, id = result.last_insert_rowid(), "recorded review");
        Ok(result.last_insert_rowid())
    }

    /// Delete a review by id, reporting whether a row was removed.
    ///
    /// An unknown id is not an error and touches nothing.
    pub async fn delete_review(&self, review_id: i64) -> Result<bool> {
        let result = sqlx::query(include_str!("../queries/delete_review.sql"))
            .bind(review_id)
            .execute(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        Ok(result.rows_affected() > 0)
    }

    /// Get a single review by id.
    pub async fn get_review_by_id(&self, review_id: i64) -> Result<Option<Review>> {
        let row: Option<ReviewRow> = sqlx::query_as(include_str!("../queries/get_review.sql"))
            .bind(review_id)
            .fetch_optional(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        row.map(Review::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    async fn repo() -> Repository {
        let db = Database::connect_in_memory().await.unwrap();
        Repository::from(&db)
    }

    async fn repo_with(policy: IntegrityPolicy) -> Repository {
        let db = Database::connect_in_memory().await.unwrap();
        Repository::new(db.pool().clone(), policy)
    }

    #[tokio::test]
    async fn test_catalog_round_trip() {
        let repo = repo().await;
        let category_id = repo.insert_category("Fiction").await.unwrap();
        assert_eq!(category_id, 1);
        let author_id = repo.add_author("Jane Doe").await.unwrap();
        assert_eq!(author_id, 1);
        let book_id = repo.add_book("The Trial", "Jane Doe", category_id).await.unwrap();
        assert!(book_id > 0);
        let listing = repo.get_all_books(None).await.unwrap();
        assert_eq!(
            listing,
            vec![BookListing {
                book_id,
                title: "The Trial".to_string(),
                author: Some("Jane Doe".to_string()),
                category: Some("Fiction".to_string()),
                rating: None,
                review: None,
            }]
        );
    }

    #[rstest]
    #[case("fiction")]
    #[case("FICTION")]
    #[case("fIcTiOn")]
    #[tokio::test]
    async fn test_duplicate_category_lists_current_names(#[case] duplicate: &str) {
        let repo = repo().await;
        repo.insert_category("Fiction").await.unwrap();
        repo.insert_category("History").await.unwrap();

        let err = repo.insert_category(duplicate).await.unwrap_err();
        assert!(matches!(*err, ErrorKind::CategoryExists { .. }));
        // The rejection must list every current category name.
        let message = err.to_string();
        assert!(message.contains("Fiction"));
        assert!(message.contains("History"));
        assert_eq!(repo.get_categories().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_categories_keep_insertion_order() {
        let repo = repo().await;
        repo.insert_category("Sci-Fi").await.unwrap();
        repo.insert_category("Biography").await.unwrap();
        let names: Vec<String> = repo.get_categories().await.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Sci-Fi".to_string(), "Biography".to_string()]);
    }

    #[tokio::test]
    async fn test_duplicate_author_rejected() {
        let repo = repo().await;
        repo.add_author("Jane Doe").await.unwrap();
        let err = repo.add_author("Jane Doe").await.unwrap_err();
        assert!(matches!(*err, ErrorKind::AuthorExists(_)));
        // Exact match only: a case variant is a different author.
        repo.add_author("jane doe").await.unwrap();
    }

    #[tokio::test]
    async fn test_add_book_unknown_category_inserts_nothing() {
        let repo = repo().await;
        let err = repo.add_book("The Trial", "Jane Doe", 99).await.unwrap_err();
        assert!(matches!(*err, ErrorKind::CategoryNotFound(99)));
        assert_eq!(repo.count_books().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_book_duplicate_triple() {
        let repo = repo().await;
        let fiction = repo.insert_category("Fiction").await.unwrap();
        let history = repo.insert_category("History").await.unwrap();

        repo.add_book("The Trial", "Jane Doe", fiction).await.unwrap();
        let err = repo.add_book("The Trial", "Jane Doe", fiction).await.unwrap_err();
        assert!(matches!(*err, ErrorKind::BookExists(_)));
        assert_eq!(repo.count_books().await.unwrap(), 1);

        // Varying any element of the triple is a different book.
        repo.add_book("The Trial", "Jane Doe", history).await.unwrap();
        repo.add_book("The Trial", "John Smith", fiction).await.unwrap();
        assert_eq!(repo.count_books().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_add_book_resolves_author_by_name() {
        let repo = repo().await;
        let fiction = repo.insert_category("Fiction").await.unwrap();
        let existing = repo.add_author("Jane Doe").await.unwrap();

        let book_id = repo.add_book("The Trial", "Jane Doe", fiction).await.unwrap();
        let book = repo.get_book(book_id).await.unwrap().unwrap();
        assert_eq!(book.author_id, existing);

        // An unknown name is created on the fly.
        let other = repo.add_book("Elsewhere", "John Smith", fiction).await.unwrap();
        let book = repo.get_book(other).await.unwrap().unwrap();
        assert_ne!(book.author_id, existing);
        assert_eq!(repo.get_books_by_author("John Smith").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_book_title() {
        let repo = repo().await;
        let fiction = repo.insert_category("Fiction").await.unwrap();
        let book_id = repo.add_book("The Trial", "Jane Doe", fiction).await.unwrap();

        assert!(repo.update_book_title(book_id, "The Castle").await.unwrap());
        assert_eq!(repo.get_book(book_id).await.unwrap().unwrap().title, "The Castle");
    }

    #[tokio::test]
    async fn test_update_unknown_book_creates_nothing() {
        let repo = repo().await;
        let before = repo.count_books().await.unwrap();
        assert!(!repo.update_book_title(42, "Ghost Title").await.unwrap());
        assert!(!repo.update_book_category(42, 1).await.unwrap());
        assert_eq!(repo.count_books().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_book_author_creates_author() {
        let repo = repo().await;
        let fiction = repo.insert_category("Fiction").await.unwrap();
        let book_id = repo.add_book("The Trial", "Jane Doe", fiction).await.unwrap();

        assert!(repo.update_book_author(book_id, "John Smith").await.unwrap());
        assert_eq!(repo.get_books_by_author("John Smith").await.unwrap().len(), 1);
        assert!(repo.get_books_by_author("Jane Doe").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_listing_shows_missing_category_as_absent() {
        let repo = repo().await;
        let fiction = repo.insert_category("Fiction").await.unwrap();
        let book_id = repo.add_book("The Trial", "Jane Doe", fiction).await.unwrap();

        // The category update is unchecked; the listing join then finds
        // nothing to resolve the id against.
        assert!(repo.update_book_category(book_id, 999).await.unwrap());
        let listing = repo.get_all_books(None).await.unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].author, Some("Jane Doe".to_string()));
        assert_eq!(listing[0].category, None);
    }

    #[tokio::test]
    async fn test_listing_fans_out_per_review() {
        let repo = repo().await;
        let fiction = repo.insert_category("Fiction").await.unwrap();
        let book_id = repo.add_book("The Trial", "Jane Doe", fiction).await.unwrap();
        repo.add_review(book_id, 1, 4.0, "Tense.").await.unwrap();
        repo.add_review(book_id, 2, 5.0, "A masterpiece.").await.unwrap();

        let listing = repo.get_all_books(None).await.unwrap();
        assert_eq!(listing.len(), 2);
        for row in &listing {
            assert_eq!(row.book_id, book_id);
            assert_eq!(row.title, "The Trial");
            assert_eq!(row.author, Some("Jane Doe".to_string()));
            assert_eq!(row.category, Some("Fiction".to_string()));
        }
        let ratings: Vec<Option<f64>> = listing.iter().map(|row| row.rating).collect();
        assert_eq!(ratings, vec![Some(4.0), Some(5.0)]);
    }

    #[tokio::test]
    async fn test_listing_filtered_by_category() {
        let repo = repo().await;
        let fiction = repo.insert_category("Fiction").await.unwrap();
        let history = repo.insert_category("History").await.unwrap();
        repo.add_book("The Trial", "Jane Doe", fiction).await.unwrap();
        repo.add_book("Rome", "John Smith", history).await.unwrap();

        let listing = repo.get_all_books(Some(history)).await.unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].title, "Rome");
    }

    #[tokio::test]
    async fn test_delete_unknown_review_touches_nothing() {
        let repo = repo().await;
        let fiction = repo.insert_category("Fiction").await.unwrap();
        let book_id = repo.add_book("The Trial", "Jane Doe", fiction).await.unwrap();
        repo.add_review(book_id, 1, 3.5, "Fine.").await.unwrap();

        assert!(!repo.delete_review(999).await.unwrap());
        assert_eq!(repo.count_reviews().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_review_round_trip() {
        let repo = repo().await;
        let fiction = repo.insert_category("Fiction").await.unwrap();
        let book_id = repo.add_book("The Trial", "Jane Doe", fiction).await.unwrap();
        let review_id = repo.add_review(book_id, 7, 4.5, "Slow start, strong finish.").await.unwrap();

        let review = repo.get_review_by_id(review_id).await.unwrap().unwrap();
        assert_eq!(review.book_id, book_id);
        assert_eq!(review.user_id, 7);
        assert_eq!(review.rating, 4.5);
        assert_eq!(review.body, "Slow start, strong finish.");

        assert!(repo.delete_review(review_id).await.unwrap());
        assert!(repo.get_review_by_id(review_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_permissive_policy_allows_orphan_review() {
        let repo = repo().await;
        repo.add_review(42, 1, 4.0, "For a book nobody catalogued.").await.unwrap();
        assert_eq!(repo.count_reviews().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_validating_policy_rejects_orphan_review() {
        let repo = repo_with(IntegrityPolicy { validate_review_book: true, cascade_reviews: false }).await;
        let err = repo.add_review(42, 1, 4.0, "For a book nobody catalogued.").await.unwrap_err();
        assert!(matches!(*err, ErrorKind::BookNotFound(42)));
        assert_eq!(repo.count_reviews().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_book_without_cascade_keeps_reviews() {
        let repo = repo().await;
        let fiction = repo.insert_category("Fiction").await.unwrap();
        let book_id = repo.add_book("The Trial", "Jane Doe", fiction).await.unwrap();
        repo.add_review(book_id, 1, 4.0, "Tense.").await.unwrap();

        assert!(repo.delete_book(book_id).await.unwrap());
        assert_eq!(repo.count_books().await.unwrap(), 0);
        assert_eq!(repo.count_reviews().await.unwrap(), 1, "orphan remains by default");
    }

    #[tokio::test]
    async fn test_delete_book_with_cascade_removes_reviews() {
        let repo = repo_with(IntegrityPolicy::STRICT).await;
        let fiction = repo.insert_category("Fiction").await.unwrap();
        let book_id = repo.add_book("The Trial", "Jane Doe", fiction).await.unwrap();
        repo.add_review(book_id, 1, 4.0, "Tense.").await.unwrap();
        repo.add_review(book_id, 2, 5.0, "A masterpiece.").await.unwrap();

        assert!(repo.delete_book(book_id).await.unwrap());
        assert_eq!(repo.count_reviews().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_unknown_book_reports_false() {
        let repo = repo().await;
        assert!(!repo.delete_book(42).await.unwrap());
    }
}
