//! # Shelfmark Core
//!
//! Entities, typed IDs, error definitions, and validation helpers for the
//! Shelfmark book-cataloguing service. This crate carries no persistence
//! logic; the repository layer builds on the types defined here.

pub mod entities;
pub mod error;
pub mod id;
#[cfg(feature = "telemetry")]
pub mod telemetry;
pub mod validation;

pub use entities::*;
pub use error::*;
pub use id::*;
pub use validation::*;
