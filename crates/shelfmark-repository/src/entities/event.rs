//! Event and event-book join persistence.

use crate::{BookEventCondition, EventCondition, Persist};
use async_trait::async_trait;
use shelfmark_core::{BookEvent, Event, ShelfmarkResult};
use sqlx::PgConnection;

#[async_trait]
impl Persist for Event {
    const ENTITY: &'static str = "Event";

    type Condition = EventCondition;

    fn matches(&self, condition: &Self::Condition) -> bool {
        match condition {
            EventCondition::ById(id) => self.id == *id,
        }
    }

    fn same_row(&self, other: &Self) -> bool {
        self.id == other.id
    }

    async fn fetch_all(conn: &mut PgConnection) -> ShelfmarkResult<Vec<Self>> {
        let rows = sqlx::query_as::<_, Self>(
            "SELECT id, name, location, start_date, description, created_at, updated_at \
             FROM events",
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
            EventCondition::ById(id) => {
                sqlx::query_as::<_, Self>(
                    "SELECT id, name, location, start_date, description, created_at, updated_at \
                     FROM events WHERE id = $1",
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
            "INSERT INTO events (id, name, location, start_date, description, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(&self.location)
        .bind(self.start_date)
        .bind(&self.description)
        .bind(self.created_at)
        .bind(self.updated_at)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    async fn replace(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query(
            "UPDATE events SET name = $1, location = $2, start_date = $3, description = $4, \
             updated_at = $5 WHERE id = $6",
        )
        .bind(&self.name)
        .bind(&self.location)
        .bind(self.start_date)
        .bind(&self.description)
        .bind(self.updated_at)
        .bind(self.id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    async fn remove(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(self.id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl Persist for BookEvent {
    const ENTITY: &'static str = "BookEvent";

    type Condition = BookEventCondition;

    fn matches(&self, condition: &Self::Condition) -> bool {
        match condition {
            BookEventCondition::Pair(event_id, book_id) => {
                self.event_id == *event_id && self.book_id == *book_id
            }
            BookEventCondition::ByEvent(event_id) => self.event_id == *event_id,
        }
    }

    fn same_row(&self, other: &Self) -> bool {
        self.event_id == other.event_id && self.book_id == other.book_id
    }

    async fn fetch_all(conn: &mut PgConnection) -> ShelfmarkResult<Vec<Self>> {
        let rows = sqlx::query_as::<_, Self>("SELECT event_id, book_id FROM book_events")
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    async fn fetch_where(
        conn: &mut PgConnection,
        condition: &Self::Condition,
    ) -> ShelfmarkResult<Vec<Self>> {
        let rows = match condition {
            BookEventCondition::Pair(event_id, book_id) => {
                sqlx::query_as::<_, Self>(
                    "SELECT event_id, book_id FROM book_events \
                     WHERE event_id = $1 AND book_id = $2",
                )
                .bind(*event_id)
                .bind(*book_id)
                .fetch_all(conn)
                .await?
            }
            BookEventCondition::ByEvent(event_id) => {
                sqlx::query_as::<_, Self>(
                    "SELECT event_id, book_id FROM book_events WHERE event_id = $1",
                )
                .bind(*event_id)
                .fetch_all(conn)
                .await?
            }
        };
        Ok(rows)
    }

    async fn insert(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result =
            sqlx::query("INSERT INTO book_events (event_id, book_id) VALUES ($1, $2)")
                .bind(self.event_id)
                .bind(self.book_id)
                .execute(conn)
                .await?;
        Ok(result.rows_affected())
    }

    async fn replace(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        // The join row carries nothing beyond its composite key; a replace
        // affects the row only if it exists.
        let result = sqlx::query(
            "UPDATE book_events SET event_id = $1, book_id = $2 \
             WHERE event_id = $1 AND book_id = $2",
        )
        .bind(self.event_id)
        .bind(self.book_id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    async fn remove(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64> {
        let result =
            sqlx::query("DELETE FROM book_events WHERE event_id = $1 AND book_id = $2")
                .bind(self.event_id)
                .bind(self.book_id)
                .execute(conn)
                .await?;
        Ok(result.rows_affected())
    }
}
