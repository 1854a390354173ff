//! Request and response DTOs.

pub mod book_dto;
pub mod catalog_dto;
pub mod event_dto;
pub mod review_dto;
pub mod user_dto;
pub mod wishlist_dto;

pub use book_dto::*;
pub use catalog_dto::*;
pub use event_dto::*;
pub use review_dto::*;
pub use user_dto::*;
pub use wishlist_dto::*;
