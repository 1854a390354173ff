//! Unit of work: one session and one repository cache per inbound request.

use crate::{Persist, Repository};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::any::{Any, TypeId};
use std::collections::HashMap;

/// Coordinates repositories over one store session.
///
/// One unit of work is created per inbound request and dropped at request
/// end, which releases the staged-write queue and any pooled connection.
/// Repositories for arbitrary entity types can be requested without
/// upfront registration; the first request for a type constructs the
/// repository, subsequent requests return the cached instance.
#[async_trait]
pub trait UnitOfWork: Send + Sync + 'static {
    /// Concrete repository type bound to entity type `E`.
    type Repo<E: Persist>: Repository<E>;

    /// Returns the repository bound to entity type `E`, constructing and
    /// caching it on first use.
    fn repository<E: Persist>(&self) -> Self::Repo<E>;

    /// Flushes all staged writes for this session to the store, returning
    /// the number of affected rows.
    async fn commit(&self) -> shelfmark_core::ShelfmarkResult<u64>;
}

/// Type-indexed registry of lazily-constructed repository handles.
///
/// Keys are the `TypeId` of the concrete repository handle, so one entry
/// exists per entity type. Handles are cheap clones over the shared
/// session.
#[derive(Default)]
pub(crate) struct RepositoryRegistry {
    entries: Mutex<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

impl RepositoryRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the cached handle of type `R`, constructing it on first use.
    pub(crate) fn get_or_insert<R>(&self, build: impl FnOnce() -> R) -> R
    where
        R: Clone + Send + Sync + 'static,
    {
        let mut entries = self.entries.lock();
        let entry = entries
            .entry(TypeId::of::<R>())
            .or_insert_with(|| Box::new(build()));
        entry
            .downcast_ref::<R>()
            .cloned()
            .expect("registry stores exactly one value per type key")
    }

    /// Number of distinct repository types constructed so far.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_registry_constructs_once_per_type() {
        let registry = RepositoryRegistry::new();
        let built = AtomicUsize::new(0);

        let first: String = registry.get_or_insert(|| {
            built.fetch_add(1, Ordering::SeqCst);
            "repo".to_string()
        });
        let second: String = registry.get_or_insert(|| {
            built.fetch_add(1, Ordering::SeqCst);
            "other".to_string()
        });

        assert_eq!(first, "repo");
        assert_eq!(second, "repo");
        assert_eq!(built.load(Ordering::SeqCst), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_separates_types() {
        let registry = RepositoryRegistry::new();
        let _: String = registry.get_or_insert(|| "a".to_string());
        let _: u32 = registry.get_or_insert(|| 7);
        assert_eq!(registry.len(), 2);
    }
}
