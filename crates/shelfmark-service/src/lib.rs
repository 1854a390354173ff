//! # Shelfmark Service
//!
//! Business logic service layer for Shelfmark. Services are generic over
//! the [`UnitOfWork`](shelfmark_repository::UnitOfWork) backing them, so
//! the same code runs against Postgres in production and the in-memory
//! store in tests.

pub mod book_service;
pub mod catalog_service;
pub mod dto;
pub mod event_service;
pub mod review_service;
pub mod user_service;
pub mod wishlist_service;

pub use book_service::*;
pub use catalog_service::*;
pub use dto::*;
pub use event_service::*;
pub use review_service::*;
pub use user_service::*;
pub use wishlist_service::*;
