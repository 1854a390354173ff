//! Review rating persistence.

use crate::{Persist, ReviewCondition};
use async_trait::async_trait;
use shelfmark_core::{ReviewRating, ShelfmarkResult};
use sqlx::PgConnection;

const COLUMNS: &str = "id, score, review_text, book_id, user_id, created_at, updated_at";

#[async_trait]
impl Persist for ReviewRating {
    const ENTITY: &'static str = "ReviewRating";

    type Condition = ReviewCondition;

    fn matches(&self, condition: &Self::Condition) -> bool {
        match condition {
            ReviewCondition::ByBook(book_id) => self.book_id == *book_id,
        }
    }

    fn same_row(&self, other: &Self) -> bool {
        self.id == other.id
    }

    async fn fetch_all(conn: &mut PgConnection) -> ShelfmarkResult<Vec<Self>> {
        let rows = sqlx::query_as::<_, Self>(&format!("SELECT {COLUMNS} FROM review_ratings"))
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    async fn fetch_where(
        conn: &mut PgConnection,
        condition: &Self::Condition,
    ) -> ShelfmarkResult<Vec<Self>> {
        let rows = match condition {
            ReviewCondition::ByBook(book_id) => {
                sqlx::query_as::<_, Self>(&format!(
                    "SELECT {COLUMNS} FROM review_ratings WHERE book_id = $1"
                ))
                .bind(*book_id)
                .fetch_all(conn)
                .await?
            }
        };
        Ok(rows)
    }

    async fn insert(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query(
            "INSERT INTO review_ratings (id, score, review_text, book_id, user_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(self.id)
        .bind(self.score)
        .bind(&self.review_text)
        .bind(self.book_id)
        .bind(&self.user_id)
        .bind(self.created_at)
        .bind(self.updated_at)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    async fn replace(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query(
            "UPDATE review_ratings SET score = $1, review_text = $2, book_id = $3, \
             user_id = $4, updated_at = $5 WHERE id = $6",
        )
        .bind(self.score)
        .bind(&self.review_text)
        .bind(self.book_id)
        .bind(&self.user_id)
        .bind(self.updated_at)
        .bind(self.id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    async fn remove(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query("DELETE FROM review_ratings WHERE id = $1")
            .bind(self.id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}
