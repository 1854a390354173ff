//! Domain entities for the Shelfmark catalogue.
//!
//! All non-join entities carry an id, a creation timestamp, and an optional
//! update timestamp. Join entities ([`WishlistBook`], [`BookEvent`]) are
//! keyed by their composite id pair instead.

mod book;
mod catalog;
mod event;
mod review;
mod user;
mod wishlist;

pub use book::Book;
pub use catalog::{Author, Category, Publisher, Tag};
pub use event::{BookEvent, Event};
pub use review::ReviewRating;
pub use user::User;
pub use wishlist::{Wishlist, WishlistBook};
