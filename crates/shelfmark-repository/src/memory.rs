//! In-memory store backend.
//!
//! Mirrors the Postgres backend's staging semantics without a database:
//! writes queue up until `commit`/`save_changes`, duplicate inserts are
//! rejected the way a unique key would reject them, replacing an absent
//! row affects zero rows, and a failed commit rolls every write of the
//! batch back. Service unit tests run against this backend through
//! [`MemoryUnitOfWork`].

use crate::unit_of_work::RepositoryRegistry;
use crate::{Persist, Repository, UnitOfWork};
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use shelfmark_core::{ShelfmarkError, ShelfmarkResult};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

type PendingWrite = Box<dyn FnOnce(&MemoryStore) -> ShelfmarkResult<u64> + Send>;

/// A `Vec<E>` table that can be cloned behind type erasure, so `flush` can
/// snapshot every table without knowing the entity types involved.
trait Table: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn boxed_clone(&self) -> Box<dyn Table>;
}

impl<E: Persist> Table for Vec<E> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn boxed_clone(&self) -> Box<dyn Table> {
        Box::new(self.clone())
    }
}

/// Type-indexed in-memory tables plus the staged-write queue.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<TypeId, Box<dyn Table>>>,
    pending: Mutex<Vec<PendingWrite>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every committed row of entity type `E`.
    #[must_use]
    pub fn rows<E: Persist>(&self) -> Vec<E> {
        self.tables
            .read()
            .get(&TypeId::of::<E>())
            .and_then(|table| table.as_any().downcast_ref::<Vec<E>>())
            .cloned()
            .unwrap_or_default()
    }

    /// Inserts rows directly, bypassing the staging queue. Test setup only.
    pub fn seed<E: Persist>(&self, rows: impl IntoIterator<Item = E>) {
        self.with_table_mut::<E, _>(|table| table.extend(rows));
    }

    fn with_table_mut<E: Persist, T>(&self, f: impl FnOnce(&mut Vec<E>) -> T) -> T {
        let mut tables = self.tables.write();
        let table = tables
            .entry(TypeId::of::<E>())
            .or_insert_with(|| Box::new(Vec::<E>::new()));
        let table = table
            .as_any_mut()
            .downcast_mut::<Vec<E>>()
            .expect("one table per entity type");
        f(table)
    }

    fn apply_insert<E: Persist>(&self, entity: E) -> ShelfmarkResult<u64> {
        self.with_table_mut::<E, _>(|table| {
            if table.iter().any(|row| row.same_row(&entity)) {
                return Err(ShelfmarkError::Conflict(format!(
                    "{} already exists",
                    E::ENTITY
                )));
            }
            table.push(entity);
            Ok(1)
        })
    }

    fn apply_replace<E: Persist>(&self, entity: E) -> ShelfmarkResult<u64> {
        self.with_table_mut::<E, _>(|table| {
            match table.iter_mut().find(|row| row.same_row(&entity)) {
                Some(row) => {
                    *row = entity;
                    Ok(1)
                }
                None => Ok(0),
            }
        })
    }

    fn apply_remove<E: Persist>(&self, entity: E) -> ShelfmarkResult<u64> {
        self.with_table_mut::<E, _>(|table| {
            let before = table.len();
            table.retain(|row| !row.same_row(&entity));
            Ok((before - table.len()) as u64)
        })
    }

    fn stage(&self, write: PendingWrite) {
        self.pending.lock().push(write);
    }

    /// Applies every staged write. An error from any write restores the
    /// tables to their pre-flush state; the queue is drained either way.
    fn flush(&self) -> ShelfmarkResult<u64> {
        let pending: Vec<PendingWrite> = std::mem::take(&mut *self.pending.lock());
        if pending.is_empty() {
            return Ok(0);
        }

        let snapshot: HashMap<TypeId, Box<dyn Table>> = self
            .tables
            .read()
            .iter()
            .map(|(id, table)| (*id, table.boxed_clone()))
            .collect();

        let mut affected = 0u64;
        for write in pending {
            match write(self) {
                Ok(rows) => affected += rows,
                Err(err) => {
                    *self.tables.write() = snapshot;
                    return Err(err);
                }
            }
        }
        Ok(affected)
    }
}

/// In-memory repository for entity type `E`.
pub struct MemoryRepository<E: Persist> {
    store: Arc<MemoryStore>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Persist> Clone for MemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _entity: PhantomData,
        }
    }
}

impl<E: Persist> MemoryRepository<E> {
    fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E: Persist> Repository<E> for MemoryRepository<E> {
    async fn get_all(&self) -> ShelfmarkResult<Vec<E>> {
        Ok(self.store.rows::<E>())
    }

    async fn get_by_condition(&self, condition: E::Condition) -> ShelfmarkResult<Vec<E>> {
        Ok(self
            .store
            .rows::<E>()
            .into_iter()
            .filter(|row| row.matches(&condition))
            .collect())
    }

    fn create(&self, entity: E) {
        self.store
            .stage(Box::new(move |store| store.apply_insert(entity)));
    }

    fn update(&self, entity: E) {
        self.store
            .stage(Box::new(move |store| store.apply_replace(entity)));
    }

    fn delete(&self, entity: E) {
        self.store
            .stage(Box::new(move |store| store.apply_remove(entity)));
    }

    async fn save_changes(&self) -> ShelfmarkResult<u64> {
        self.store.flush()
    }
}

/// In-memory unit of work, the test counterpart of
/// [`PgUnitOfWork`](crate::PgUnitOfWork).
#[derive(Default)]
pub struct MemoryUnitOfWork {
    store: Arc<MemoryStore>,
    registry: RepositoryRegistry,
}

impl MemoryUnitOfWork {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The backing store, for seeding and inspecting rows in tests.
    #[must_use]
    pub fn store(&self) -> &Arc<MemoryStore> {
        &self.store
    }
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    type Repo<E: Persist> = MemoryRepository<E>;

    fn repository<E: Persist>(&self) -> MemoryRepository<E> {
        self.registry
            .get_or_insert(|| MemoryRepository::new(Arc::clone(&self.store)))
    }

    async fn commit(&self) -> ShelfmarkResult<u64> {
        self.store.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CategoryCondition;
    use shelfmark_core::Category;

    #[tokio::test]
    async fn test_writes_invisible_until_commit() {
        let uow = MemoryUnitOfWork::new();
        let repo = uow.repository::<Category>();

        repo.create(Category::new("Fiction".to_string(), String::new()));
        assert!(repo.get_all().await.unwrap().is_empty());

        let affected = uow.commit().await.unwrap();
        assert_eq!(affected, 1);
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_insert_conflicts() {
        let uow = MemoryUnitOfWork::new();
        let repo = uow.repository::<Category>();

        let category = Category::new("Fiction".to_string(), String::new());
        repo.create(category.clone());
        uow.commit().await.unwrap();

        repo.create(category);
        let err = uow.commit().await.unwrap_err();
        assert!(matches!(err, ShelfmarkError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_failed_commit_rolls_back_earlier_writes() {
        let uow = MemoryUnitOfWork::new();
        let repo = uow.repository::<Category>();

        let fiction = Category::new("Fiction".to_string(), String::new());
        repo.create(fiction.clone());
        uow.commit().await.unwrap();

        // One valid insert staged ahead of a conflicting one.
        repo.create(Category::new("Poetry".to_string(), String::new()));
        repo.create(fiction);
        let err = uow.commit().await.unwrap_err();
        assert!(matches!(err, ShelfmarkError::Conflict(_)));

        let rows = repo.get_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Fiction");
    }

    #[tokio::test]
    async fn test_replace_absent_row_affects_nothing() {
        let uow = MemoryUnitOfWork::new();
        let repo = uow.repository::<Category>();

        repo.update(Category::new("Fiction".to_string(), String::new()));
        assert_eq!(uow.commit().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_condition_filters_rows() {
        let uow = MemoryUnitOfWork::new();
        let fiction = Category::new("Fiction".to_string(), String::new());
        let poetry = Category::new("Poetry".to_string(), String::new());
        uow.store().seed(vec![fiction.clone(), poetry]);

        let repo = uow.repository::<Category>();
        let found = repo
            .get_by_condition(CategoryCondition::ById(fiction.id))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Fiction");
    }
}
