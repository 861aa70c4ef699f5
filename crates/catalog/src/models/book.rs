/// A catalogued book referencing one author and one category.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Book {
    #[sqlx(rename = "book_id")]
    pub id: i64,
    pub title: String,
    pub author_id: i64,
    pub category_id: i64,
}
