/// A named creator assigned to books.
///
/// Names are unique by exact string match. Authors are permanent once
/// created; book operations resolve or create them by name.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Author {
    #[sqlx(rename = "author_id")]
    pub id: i64,
    pub name: String,
}
