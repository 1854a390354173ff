//! Wishlist entity and the wishlist-book join.

use crate::{BookId, SubjectId, WishlistId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-owned wishlist. Deleting the user cascades to their wishlists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Wishlist {
    pub id: WishlistId,
    pub name: String,
    pub user_id: SubjectId,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Wishlist {
    /// Creates a new wishlist for a user.
    #[must_use]
    pub fn new(name: String, user_id: SubjectId) -> Self {
        Self {
            id: WishlistId::new(),
            name,
            user_id,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Join row placing a book on a wishlist. Keyed by the (wishlist, book)
/// pair; the pair must not be duplicated. Deleting the wishlist cascades;
/// deleting a listed book is rejected by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct WishlistBook {
    pub wishlist_id: WishlistId,
    pub book_id: BookId,
    /// When the book was added to the wishlist.
    pub added_date: DateTime<Utc>,
}

impl WishlistBook {
    /// Creates a new wishlist-book association stamped with the current time.
    #[must_use]
    pub fn new(wishlist_id: WishlistId, book_id: BookId) -> Self {
        Self {
            wishlist_id,
            book_id,
            added_date: Utc::now(),
        }
    }
}
