//! Book persistence.

use crate::{BookCondition, Persist};
use async_trait::async_trait;
use shelfmark_core::{Book, ShelfmarkResult};
use sqlx::PgConnection;

const COLUMNS: &str = "id, title, isbn, description, published_date, cover_image_url, \
                       category_id, author_id, publisher_id, created_at, updated_at";

#[async_trait]
impl Persist for Book {
    const ENTITY: &'static str = "Book";

    type Condition = BookCondition;

    fn matches(&self, condition: &Self::Condition) -> bool {
        match condition {
            BookCondition::ById(id) => self.id == *id,
        }
    }

    fn same_row(&self, other: &Self) -> bool {
        self.id == other.id
    }

    async fn fetch_all(conn: &mut PgConnection) -> ShelfmarkResult<Vec<Self>> {
        let rows = sqlx::query_as::<_, Self>(&format!("SELECT {COLUMNS} FROM books"))
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    async fn fetch_where(
        conn: &mut PgConnection,
        condition: &Self::Condition,
    ) -> ShelfmarkResult<Vec<Self>> {
        let rows = match condition {
            BookCondition::ById(id) => {
                sqlx::query_as::<_, Self>(&format!("SELECT {COLUMNS} FROM books WHERE id = $1"))
                    .bind(*id)
                    .fetch_all(conn)
                    .await?
            }
        };
        Ok(rows)
    }

    async fn insert(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO books (id, title, isbn, description, published_date, cover_image_url,
                               category_id, author_id, publisher_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(self.id)
        .bind(&self.title)
        .bind(&self.isbn)
        .bind(&self.description)
        .bind(self.published_date)
        .bind(&self.cover_image_url)
        .bind(self.category_id)
        .bind(self.author_id)
        .bind(self.publisher_id)
        .bind(self.created_at)
        .bind(self.updated_at)
        .execute(conn)
        .await?;

        Ok(result.rows_affected())
    }

    async fn replace(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $1, isbn = $2, description = $3, published_date = $4,
                cover_image_url = $5, category_id = $6, author_id = $7,
                publisher_id = $8, updated_at = $9
            WHERE id = $10
            "#,
        )
        .bind(&self.title)
        .bind(&self.isbn)
        .bind(&self.description)
        .bind(self.published_date)
        .bind(&self.cover_image_url)
        .bind(self.category_id)
        .bind(self.author_id)
        .bind(self.publisher_id)
        .bind(self.updated_at)
        .bind(self.id)
        .execute(conn)
        .await?;

        Ok(result.rows_affected())
    }

    async fn remove(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(self.id)
            .execute(conn)
            .await?;

        Ok(result.rows_affected())
    }
}
