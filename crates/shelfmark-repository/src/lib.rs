//! # Shelfmark Repository
//!
//! Generic repository and per-request unit of work over the persistent
//! store:
//!
//! ```text
//! Service
//!   ↓  UnitOfWork::repository::<E>()   (one cached repository per type)
//! Repository<E>                        (reads now, writes staged)
//!   ↓  shared session queue
//! commit / save_changes                (one transaction, all staged writes)
//!   ↓
//! Postgres (sqlx)  —or—  MemoryStore (test backend)
//! ```
//!
//! Repositories never persist on `create`/`update`/`delete`; they stage the
//! write into the session shared by every repository of the same unit of
//! work. `commit` (or any repository's `save_changes`) flushes the whole
//! queue inside a single transaction, which is what gives a request its
//! atomic boundary without explicit transaction objects.
//!
//! Repository resolution is compile-time generic: [`Persist`] supplies the
//! per-entity persistence contract and a `TypeId`-keyed registry caches one
//! repository instance per entity type for the life of the unit of work.

pub mod condition;
pub mod memory;
mod persist;
pub mod pg;
pub mod pool;
mod repository;
mod unit_of_work;

mod entities;

pub use condition::*;
pub use memory::{MemoryStore, MemoryUnitOfWork};
pub use persist::Persist;
pub use pg::{PgRepository, PgUnitOfWork};
pub use pool::{create_pool, DatabasePool};
pub use repository::Repository;
pub use unit_of_work::UnitOfWork;
