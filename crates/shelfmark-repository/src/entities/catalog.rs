//! Author, publisher, category, and tag persistence.

use crate::{AuthorCondition, CategoryCondition, Persist, PublisherCondition, TagCondition};
use async_trait::async_trait;
use shelfmark_core::{Author, Category, Publisher, ShelfmarkResult, Tag};
use sqlx::PgConnection;

#[async_trait]
impl Persist for Author {
    const ENTITY: &'static str = "Author";

    type Condition = AuthorCondition;

    fn matches(&self, condition: &Self::Condition) -> bool {
        match condition {
            AuthorCondition::ById(id) => self.id == *id,
        }
    }

    fn same_row(&self, other: &Self) -> bool {
        self.id == other.id
    }

    async fn fetch_all(conn: &mut PgConnection) -> ShelfmarkResult<Vec<Self>> {
        let rows = sqlx::query_as::<_, Self>(
            "SELECT id, name, biography, birth_date, created_at, updated_at FROM authors",
        )
        .fetch_all(conn)
        .await?;
        Ok(rows)
    }

    async fn fetch_where(
        conn: &mut PgConnection,
        condition: &Self::Condition,
    ) -> ShelfmarkResult<Vec<Self>> {
        let rows = match condition {
            AuthorCondition::ById(id) => {
                sqlx::query_as::<_, Self>(
                    "SELECT id, name, biography, birth_date, created_at, updated_at \
                     FROM authors WHERE id = $1",
                )
                .bind(*id)
                .fetch_all(conn)
                .await?
            }
        };
        Ok(rows)
    }

    async fn insert(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query(
            "INSERT INTO authors (id, name, biography, birth_date, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(&self.biography)
        .bind(self.birth_date)
        .bind(self.created_at)
        .bind(self.updated_at)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    async fn replace(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query(
            "UPDATE authors SET name = $1, biography = $2, birth_date = $3, updated_at = $4 \
             WHERE id = $5",
        )
        .bind(&self.name)
        .bind(&self.biography)
        .bind(self.birth_date)
        .bind(self.updated_at)
        .bind(self.id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    async fn remove(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(self.id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl Persist for Publisher {
    const ENTITY: &'static str = "Publisher";

    type Condition = PublisherCondition;

    fn matches(&self, condition: &Self::Condition) -> bool {
        match condition {
            PublisherCondition::ById(id) => self.id == *id,
        }
    }

    fn same_row(&self, other: &Self) -> bool {
        self.id == other.id
    }

    async fn fetch_all(conn: &mut PgConnection) -> ShelfmarkResult<Vec<Self>> {
        let rows = sqlx::query_as::<_, Self>(
            "SELECT id, name, website, address, created_at, updated_at FROM publishers",
        )
        .fetch_all(conn)
        .await?;
        Ok(rows)
    }

    async fn fetch_where(
        conn: &mut PgConnection,
        condition: &Self::Condition,
    ) -> ShelfmarkResult<Vec<Self>> {
        let rows = match condition {
            PublisherCondition::ById(id) => {
                sqlx::query_as::<_, Self>(
                    "SELECT id, name, website, address, created_at, updated_at \
                     FROM publishers WHERE id = $1",
                )
                .bind(*id)
                .fetch_all(conn)
                .await?
            }
        };
        Ok(rows)
    }

    async fn insert(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query(
            "INSERT INTO publishers (id, name, website, address, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(&self.website)
        .bind(&self.address)
        .bind(self.created_at)
        .bind(self.updated_at)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    async fn replace(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query(
            "UPDATE publishers SET name = $1, website = $2, address = $3, updated_at = $4 \
             WHERE id = $5",
        )
        .bind(&self.name)
        .bind(&self.website)
        .bind(&self.address)
        .bind(self.updated_at)
        .bind(self.id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    async fn remove(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query("DELETE FROM publishers WHERE id = $1")
            .bind(self.id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl Persist for Category {
    const ENTITY: &'static str = "Category";

    type Condition = CategoryCondition;

    fn matches(&self, condition: &Self::Condition) -> bool {
        match condition {
            CategoryCondition::ById(id) => self.id == *id,
        }
    }

    fn same_row(&self, other: &Self) -> bool {
        self.id == other.id
    }

    async fn fetch_all(conn: &mut PgConnection) -> ShelfmarkResult<Vec<Self>> {
        let rows = sqlx::query_as::<_, Self>(
            "SELECT id, name, description, created_at, updated_at FROM categories",
        )
        .fetch_all(conn)
        .await?;
        Ok(rows)
    }

    async fn fetch_where(
        conn: &mut PgConnection,
        condition: &Self::Condition,
    ) -> ShelfmarkResult<Vec<Self>> {
        let rows = match condition {
            CategoryCondition::ById(id) => {
                sqlx::query_as::<_, Self>(
                    "SELECT id, name, description, created_at, updated_at \
                     FROM categories WHERE id = $1",
                )
                .bind(*id)
                .fetch_all(conn)
                .await?
            }
        };
        Ok(rows)
    }

    async fn insert(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query(
            "INSERT INTO categories (id, name, description, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(&self.description)
        .bind(self.created_at)
        .bind(self.updated_at)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    async fn replace(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query(
            "UPDATE categories SET name = $1, description = $2, updated_at = $3 WHERE id = $4",
        )
        .bind(&self.name)
        .bind(&self.description)
        .bind(self.updated_at)
        .bind(self.id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    async fn remove(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(self.id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl Persist for Tag {
    const ENTITY: &'static str = "Tag";

    type Condition = TagCondition;

    fn matches(&self, condition: &Self::Condition) -> bool {
        match condition {
            TagCondition::ById(id) => self.id == *id,
        }
    }

    fn same_row(&self, other: &Self) -> bool {
        self.id == other.id
    }

    async fn fetch_all(conn: &mut PgConnection) -> ShelfmarkResult<Vec<Self>> {
        let rows =
            sqlx::query_as::<_, Self>("SELECT id, name, created_at, updated_at FROM tags")
                .fetch_all(conn)
                .await?;
        Ok(rows)
    }

    async fn fetch_where(
        conn: &mut PgConnection,
        condition: &Self::Condition,
    ) -> ShelfmarkResult<Vec<Self>> {
        let rows = match condition {
            TagCondition::ById(id) => {
                sqlx::query_as::<_, Self>(
                    "SELECT id, name, created_at, updated_at FROM tags WHERE id = $1",
                )
                .bind(*id)
                .fetch_all(conn)
                .await?
            }
        };
        Ok(rows)
    }

    async fn insert(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query(
            "INSERT INTO tags (id, name, created_at, updated_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(self.created_at)
        .bind(self.updated_at)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    async fn replace(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query("UPDATE tags SET name = $1, updated_at = $2 WHERE id = $3")
            .bind(&self.name)
            .bind(self.updated_at)
            .bind(self.id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    async fn remove(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(self.id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}
