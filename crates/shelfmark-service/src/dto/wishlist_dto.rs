//! Wishlist DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shelfmark_core::{BookId, SubjectId, Wishlist, WishlistId};
use validator::Validate;

/// Request to create a wishlist.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WishlistRequest {
    #[validate(length(min = 2, max = 50, message = "Name must be 2-50 characters"))]
    pub name: String,
}

/// Wishlist response DTO with its book rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistResponse {
    pub id: WishlistId,
    pub name: String,
    pub user_id: SubjectId,
    pub books: Vec<WishlistBookResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl WishlistResponse {
    /// Builds the response from the entity plus its resolved book rows.
    #[must_use]
    pub fn from_wishlist(wishlist: Wishlist, books: Vec<WishlistBookResponse>) -> Self {
        Self {
            id: wishlist.id,
            name: wishlist.name,
            user_id: wishlist.user_id,
            books,
            created_at: wishlist.created_at,
            updated_at: wishlist.updated_at,
        }
    }
}

/// A book on a wishlist, with its title resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistBookResponse {
    pub wishlist_id: WishlistId,
    pub book_id: BookId,
    pub book_title: Option<String>,
    pub added_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wishlist_name_length() {
        assert!(WishlistRequest {
            name: "To read".to_string()
        }
        .validate()
        .is_ok());
        assert!(WishlistRequest {
            name: "x".to_string()
        }
        .validate()
        .is_err());
    }
}
