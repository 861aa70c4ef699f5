/// One denormalized row of the catalog listing join.
///
/// Selecting from "books LEFT JOIN authors/categories/reviews" fans a book
/// with several reviews out into one row per review, repeating the book
/// fields. A book whose author, category or review rows are missing carries
/// `None` in the corresponding fields.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct BookListing {
    pub book_id: i64,
    pub title: String,
    pub author: Option<String>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub review: Option<String>,
}
