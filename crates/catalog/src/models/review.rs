use crate::error::{Error, ErrorKind};
use exn::ResultExt;
use time::UtcDateTime;

/// A user-submitted rating and text tied to one book.
///
/// The rating is intended to lie in 0–5 but storage does not enforce it;
/// range checks belong to whoever collects the input. The referenced book is
/// only verified when the integrity policy asks for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i64,
    pub book_id: i64,
    pub user_id: i64,
    pub rating: f64,
    pub body: String,
    pub created_at: UtcDateTime,
}

#[derive(sqlx::FromRow)]
pub(crate) struct ReviewRow {
    review_id: i64,
    book_id: i64,
    user_id: i64,
    rating: f64,
    body: String,
    created_at: i64,
}
impl TryFrom<ReviewRow> for Review {
    type Error = Error;
    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.review_id,
            book_id: row.book_id,
            user_id: row.user_id,
            rating: row.rating,
            body: row.body,
            created_at: UtcDateTime::from_unix_timestamp(row.created_at)
                .or_raise(|| ErrorKind::InvalidData("review creation date"))?,
        })
    }
}
