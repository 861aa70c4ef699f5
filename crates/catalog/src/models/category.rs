/// A named grouping assigned to books.
///
/// Names are unique ignoring letter case; the insert operation enforces
/// this, not the schema. Categories are permanent once created.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Category {
    #[sqlx(rename = "category_id")]
    pub id: i64,
    pub name: String,
}
