//! Generic repository trait.

use crate::Persist;
use async_trait::async_trait;
use shelfmark_core::ShelfmarkResult;

/// Type-parameterized CRUD accessor over the persistent store.
///
/// Reads execute immediately. `create`, `update`, and `delete` only stage
/// the mutation into the session shared by every repository of the owning
/// unit of work; nothing is persisted until [`save_changes`]
/// (or [`UnitOfWork::commit`](crate::UnitOfWork::commit)) flushes the whole
/// queue in one transaction.
#[async_trait]
pub trait Repository<E: Persist>: Send + Sync {
    /// Returns every row of this entity type (no pagination).
    async fn get_all(&self) -> ShelfmarkResult<Vec<E>>;

    /// Returns the rows satisfying the condition.
    async fn get_by_condition(&self, condition: E::Condition) -> ShelfmarkResult<Vec<E>>;

    /// Returns the first row satisfying the condition, if any.
    async fn get_first(&self, condition: E::Condition) -> ShelfmarkResult<Option<E>> {
        Ok(self.get_by_condition(condition).await?.into_iter().next())
    }

    /// Stages an insert; does not itself persist.
    fn create(&self, entity: E);

    /// Stages a full-row replace; does not itself persist.
    fn update(&self, entity: E);

    /// Stages a row removal; does not itself persist.
    fn delete(&self, entity: E);

    /// Flushes all staged writes of the owning session to the store,
    /// returning the number of affected rows.
    async fn save_changes(&self) -> ShelfmarkResult<u64>;
}
