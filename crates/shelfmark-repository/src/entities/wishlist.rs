//! Wishlist and wishlist-book join persistence.

use crate::{Persist, WishlistBookCondition, WishlistCondition};
use async_trait::async_trait;
use shelfmark_core::{ShelfmarkResult, Wishlist, WishlistBook};
use sqlx::PgConnection;

#[async_trait]
impl Persist for Wishlist {
    const ENTITY: &'static str = "Wishlist";

    type Condition = WishlistCondition;

    fn matches(&self, condition: &Self::Condition) -> bool {
        match condition {
            WishlistCondition::ById(id) => self.id == *id,
            WishlistCondition::ByUser(user_id) => self.user_id == *user_id,
        }
    }

    fn same_row(&self, other: &Self) -> bool {
        self.id == other.id
    }

    async fn fetch_all(conn: &mut PgConnection) -> ShelfmarkResult<Vec<Self>> {
        let rows = sqlx::query_as::<_, Self>(
            "SELECT id, name, user_id, created_at, updated_at FROM wishlists",
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
            WishlistCondition::ById(id) => {
                sqlx::query_as::<_, Self>(
                    "SELECT id, name, user_id, created_at, updated_at \
                     FROM wishlists WHERE id = $1",
                )
                .bind(*id)
                .fetch_all(conn)
                .await?
            }
            WishlistCondition::ByUser(user_id) => {
                sqlx::query_as::<_, Self>(
                    "SELECT id, name, user_id, created_at, updated_at \
                     FROM wishlists WHERE user_id = $1",
                )
                .bind(user_id)
                .fetch_all(conn)
                .await?
            }
        };
        Ok(rows)
    }

    async fn insert(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query(
            "INSERT INTO wishlists (id, name, user_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(&self.user_id)
        .bind(self.created_at)
        .bind(self.updated_at)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    async fn replace(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query(
            "UPDATE wishlists SET name = $1, user_id = $2, updated_at = $3 WHERE id = $4",
        )
        .bind(&self.name)
        .bind(&self.user_id)
        .bind(self.updated_at)
        .bind(self.id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    async fn remove(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query("DELETE FROM wishlists WHERE id = $1")
            .bind(self.id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl Persist for WishlistBook {
    const ENTITY: &'static str = "WishlistBook";

    type Condition = WishlistBookCondition;

    fn matches(&self, condition: &Self::Condition) -> bool {
        match condition {
            WishlistBookCondition::Pair(wishlist_id, book_id) => {
                self.wishlist_id == *wishlist_id && self.book_id == *book_id
            }
            WishlistBookCondition::ByWishlist(wishlist_id) => self.wishlist_id == *wishlist_id,
        }
    }

    fn same_row(&self, other: &Self) -> bool {
        self.wishlist_id == other.wishlist_id && self.book_id == other.book_id
    }

    async fn fetch_all(conn: &mut PgConnection) -> ShelfmarkResult<Vec<Self>> {
        let rows = sqlx::query_as::<_, Self>(
            "SELECT wishlist_id, book_id, added_date FROM wishlist_books",
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
            WishlistBookCondition::Pair(wishlist_id, book_id) => {
                sqlx::query_as::<_, Self>(
                    "SELECT wishlist_id, book_id, added_date FROM wishlist_books \
                     WHERE wishlist_id = $1 AND book_id = $2",
                )
                .bind(*wishlist_id)
                .bind(*book_id)
                .fetch_all(conn)
                .await?
            }
            WishlistBookCondition::ByWishlist(wishlist_id) => {
                sqlx::query_as::<_, Self>(
                    "SELECT wishlist_id, book_id, added_date FROM wishlist_books \
                     WHERE wishlist_id = $1",
                )
                .bind(*wishlist_id)
                .fetch_all(conn)
                .await?
            }
        };
        Ok(rows)
    }

    async fn insert(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query(
            "INSERT INTO wishlist_books (wishlist_id, book_id, added_date) \
             VALUES ($1, $2, $3)",
        )
        .bind(self.wishlist_id)
        .bind(self.book_id)
        .bind(self.added_date)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    async fn replace(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query(
            "UPDATE wishlist_books SET added_date = $1 \
             WHERE wishlist_id = $2 AND book_id = $3",
        )
        .bind(self.added_date)
        .bind(self.wishlist_id)
        .bind(self.book_id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    async fn remove(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result =
            sqlx::query("DELETE FROM wishlist_books WHERE wishlist_id = $1 AND book_id = $2")
                .bind(self.wishlist_id)
                .bind(self.book_id)
                .execute(conn)
                .await?;
        Ok(result.rows_affected())
    }
}
