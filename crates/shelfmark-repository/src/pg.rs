//! Postgres-backed repository and unit of work.
//!
//! All repositories created by one [`PgUnitOfWork`] share a [`PgSession`]:
//! reads run on a pooled connection immediately, writes are queued as
//! closures and flushed inside a single transaction when the unit of work
//! commits (or any of its repositories calls `save_changes`).

use crate::unit_of_work::RepositoryRegistry;
use crate::{DatabasePool, Persist, Repository, UnitOfWork};
use async_trait::async_trait;
use futures::future::BoxFuture;
use parking_lot::Mutex;
use shelfmark_core::ShelfmarkResult;
use sqlx::{PgConnection, PgPool};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// A queued write: given a live connection, applies one staged mutation and
/// reports the rows it affected.
type StagedWrite =
    Box<dyn for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, ShelfmarkResult<u64>> + Send>;

/// Coerces a closure into a [`StagedWrite`] so call sites infer the
/// higher-ranked lifetime correctly.
fn staged<F>(f: F) -> StagedWrite
where
    F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, ShelfmarkResult<u64>>
        + Send
        + 'static,
{
    Box::new(f)
}

/// Shared state of one unit of work: the pool for reads and the queue of
/// staged writes.
struct PgSession {
    pool: PgPool,
    pending: Mutex<Vec<StagedWrite>>,
}

impl PgSession {
    fn new(pool: PgPool) -> Self {
        Self {
            pool,
            pending: Mutex::new(Vec::new()),
        }
    }

    fn stage(&self, write: StagedWrite) {
        self.pending.lock().push(write);
    }

    /// Applies every staged write inside one transaction. An error from any
    /// write rolls the whole batch back; the queue is drained either way.
    async fn flush(&self) -> ShelfmarkResult<u64> {
        let pending: Vec<StagedWrite> = std::mem::take(&mut *self.pending.lock());
        if pending.is_empty() {
            return Ok(0);
        }

        debug!(writes = pending.len(), "flushing staged writes");
        let mut tx = self.pool.begin().await?;
        let mut affected = 0u64;
        for write in pending {
            affected += write(&mut *tx).await?;
        }
        tx.commit().await?;

        debug!(affected, "staged writes committed");
        Ok(affected)
    }
}

/// Postgres repository for entity type `E`.
///
/// Cheap handle over the owning unit of work's session; cloning shares the
/// same staged-write queue.
pub struct PgRepository<E: Persist> {
    session: Arc<PgSession>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Persist> Clone for PgRepository<E> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            _entity: PhantomData,
        }
    }
}

impl<E: Persist> PgRepository<E> {
    fn new(session: Arc<PgSession>) -> Self {
        Self {
            session,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E: Persist> Repository<E> for PgRepository<E> {
    async fn get_all(&self) -> ShelfmarkResult<Vec<E>> {
        debug!(entity = E::ENTITY, "fetching all rows");
        let mut conn = self.session.pool.acquire().await?;
        E::fetch_all(&mut conn).await
    }

    async fn get_by_condition(&self, condition: E::Condition) -> ShelfmarkResult<Vec<E>> {
        debug!(entity = E::ENTITY, "fetching rows by condition");
        let mut conn = self.session.pool.acquire().await?;
        E::fetch_where(&mut conn, &condition).await
    }

    fn create(&self, entity: E) {
        debug!(entity = E::ENTITY, "staging insert");
        self.session.stage(staged(
            move |conn: &mut PgConnection| -> BoxFuture<'_, ShelfmarkResult<u64>> {
                Box::pin(async move { entity.insert(conn).await })
            },
        ));
    }

    fn update(&self, entity: E) {
        debug!(entity = E::ENTITY, "staging replace");
        self.session.stage(staged(
            move |conn: &mut PgConnection| -> BoxFuture<'_, ShelfmarkResult<u64>> {
                Box::pin(async move { entity.replace(conn).await })
            },
        ));
    }

    fn delete(&self, entity: E) {
        debug!(entity = E::ENTITY, "staging removal");
        self.session.stage(staged(
            move |conn: &mut PgConnection| -> BoxFuture<'_, ShelfmarkResult<u64>> {
                Box::pin(async move { entity.remove(conn).await })
            },
        ));
    }

    async fn save_changes(&self) -> ShelfmarkResult<u64> {
        self.session.flush().await
    }
}

/// Postgres unit of work. Create one per inbound request.
pub struct PgUnitOfWork {
    session: Arc<PgSession>,
    registry: RepositoryRegistry,
}

impl PgUnitOfWork {
    /// Creates a unit of work over the given pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            session: Arc::new(PgSession::new(pool)),
            registry: RepositoryRegistry::new(),
        }
    }

    /// Creates a unit of work over a shared [`DatabasePool`].
    #[must_use]
    pub fn from_pool(pool: &DatabasePool) -> Self {
        Self::new(pool.inner().clone())
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    type Repo<E: Persist> = PgRepository<E>;

    fn repository<E: Persist>(&self) -> PgRepository<E> {
        self.registry
            .get_or_insert(|| PgRepository::new(Arc::clone(&self.session)))
    }

    async fn commit(&self) -> ShelfmarkResult<u64> {
        self.session.flush().await
    }
}
