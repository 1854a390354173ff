//! User persistence. Users are keyed by the identity provider's subject
//! claim, not by a surrogate id.

use crate::{Persist, UserCondition};
use async_trait::async_trait;
use shelfmark_core::{ShelfmarkResult, User};
use sqlx::PgConnection;

const COLUMNS: &str = "id, user_name, display_name, email, profile_picture_url, created_at, updated_at";

#[async_trait]
impl Persist for User {
    const ENTITY: &'static str = "User";

    type Condition = UserCondition;

    fn matches(&self, condition: &Self::Condition) -> bool {
        match condition {
            UserCondition::ById(id) => self.id == *id,
        }
    }

    fn same_row(&self, other: &Self) -> bool {
        self.id == other.id
    }

    async fn fetch_all(conn: &mut PgConnection) -> ShelfmarkResult<Vec<Self>> {
        let rows = sqlx::query_as::<_, Self>(&format!("SELECT {COLUMNS} FROM users"))
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    async fn fetch_where(
        conn: &mut PgConnection,
        condition: &Self::Condition,
    ) -> ShelfmarkResult<Vec<Self>> {
        let rows = match condition {
            UserCondition::ById(id) => {
                sqlx::query_as::<_, Self>(&format!("SELECT {COLUMNS} FROM users WHERE id = $1"))
                    .bind(id)
                    .fetch_all(conn)
                    .await?
            }
        };
        Ok(rows)
    }

    async fn insert(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query(
            "INSERT INTO users (id, user_name, display_name, email, profile_picture_url, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&self.id)
        .bind(&self.user_name)
        .bind(&self.display_name)
        .bind(&self.email)
        .bind(&self.profile_picture_url)
        .bind(self.created_at)
        .bind(self.updated_at)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    async fn replace(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query(
            "UPDATE users SET user_name = $1, display_name = $2, email = $3, \
             profile_picture_url = $4, updated_at = $5 WHERE id = $6",
        )
        .bind(&self.user_name)
        .bind(&self.display_name)
        .bind(&self.email)
        .bind(&self.profile_picture_url)
        .bind(self.updated_at)
        .bind(&self.id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    async fn remove(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(&self.id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}
