//! Per-entity persistence contract.

use async_trait::async_trait;
use shelfmark_core::ShelfmarkResult;
use sqlx::PgConnection;

/// Persistence contract implemented once per entity type.
///
/// The generic repository and both store backends are written entirely
/// against this trait; adding an entity to the system means implementing
/// `Persist` for it and nothing else. Resolution is static — no runtime
/// reflection is involved anywhere.
#[async_trait]
pub trait Persist: Clone + Send + Sync + Unpin + 'static {
    /// Entity name used in error messages and logs.
    const ENTITY: &'static str;

    /// Entity-specific filter understood by both backends.
    type Condition: Clone + Send + Sync + 'static;

    /// Whether this row satisfies the condition (in-memory evaluation).
    fn matches(&self, condition: &Self::Condition) -> bool;

    /// Whether `other` addresses the same logical row (same primary key or
    /// composite key pair). Used to target replaces and removals.
    fn same_row(&self, other: &Self) -> bool;

    /// Fetches every row of this type.
    async fn fetch_all(conn: &mut PgConnection) -> ShelfmarkResult<Vec<Self>>;

    /// Fetches the rows satisfying the condition.
    async fn fetch_where(
        conn: &mut PgConnection,
        condition: &Self::Condition,
    ) -> ShelfmarkResult<Vec<Self>>;

    /// Inserts this row, returning the number of affected rows.
    async fn insert(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64>;

    /// Replaces the stored row addressed by this row's key with these
    /// values (full-row overwrite).
    async fn replace(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64>;

    /// Removes the stored row addressed by this row's key. Removing an
    /// absent row affects zero rows and is not an error.
    async fn remove(&self, conn: &mut PgConnection) -> ShelfmarkResult<u64>;
}
