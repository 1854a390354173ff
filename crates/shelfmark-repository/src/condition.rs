//! Entity-specific query conditions.
//!
//! Each condition enum is the `Persist::Condition` of one entity type and
//! is understood by both store backends: the Postgres backend translates
//! variants into `WHERE` clauses, the memory backend evaluates them with
//! `Persist::matches`.

use shelfmark_core::{AuthorId, BookId, CategoryId, EventId, PublisherId, SubjectId, TagId, WishlistId};

/// Filters over books.
#[derive(Debug, Clone)]
pub enum BookCondition {
    /// Exact id match.
    ById(BookId),
}

/// Filters over authors.
#[derive(Debug, Clone)]
pub enum AuthorCondition {
    ById(AuthorId),
}

/// Filters over publishers.
#[derive(Debug, Clone)]
pub enum PublisherCondition {
    ById(PublisherId),
}

/// Filters over categories.
#[derive(Debug, Clone)]
pub enum CategoryCondition {
    ById(CategoryId),
}

/// Filters over tags.
#[derive(Debug, Clone)]
pub enum TagCondition {
    ById(TagId),
}

/// Filters over events.
#[derive(Debug, Clone)]
pub enum EventCondition {
    ById(EventId),
}

/// Filters over review ratings.
#[derive(Debug, Clone)]
pub enum ReviewCondition {
    /// All reviews for one book.
    ByBook(BookId),
}

/// Filters over users.
#[derive(Debug, Clone)]
pub enum UserCondition {
    /// Exact subject-id match.
    ById(SubjectId),
}

/// Filters over wishlists.
#[derive(Debug, Clone)]
pub enum WishlistCondition {
    ById(WishlistId),
    /// All wishlists owned by one user.
    ByUser(SubjectId),
}

/// Filters over wishlist-book join rows.
#[derive(Debug, Clone)]
pub enum WishlistBookCondition {
    /// The exact (wishlist, book) key pair.
    Pair(WishlistId, BookId),
    /// All join rows of one wishlist.
    ByWishlist(WishlistId),
}

/// Filters over event-book join rows.
#[derive(Debug, Clone)]
pub enum BookEventCondition {
    /// The exact (event, book) key pair.
    Pair(EventId, BookId),
    /// All join rows of one event.
    ByEvent(EventId),
}
