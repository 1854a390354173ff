//! Book entity.

use crate::{AuthorId, BookId, CategoryId, PublisherId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalogued book.
///
/// Every book belongs to exactly one category (deleting a referenced
/// category is rejected by the store). Author and publisher are loose
/// references: deleting either nullifies the book's reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Book {
    /// Unique identifier for the book.
    pub id: BookId,

    /// Book title.
    pub title: String,

    /// International Standard Book Number.
    pub isbn: String,

    /// Free-text description.
    pub description: String,

    /// Original publication date.
    pub published_date: DateTime<Utc>,

    /// Publicly reachable cover image URL, as returned by the image host.
    pub cover_image_url: Option<String>,

    /// Owning category (required).
    pub category_id: CategoryId,

    /// Author reference (optional).
    pub author_id: Option<AuthorId>,

    /// Publisher reference (optional).
    pub publisher_id: Option<PublisherId>,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Book {
    /// Creates a new book record.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        isbn: String,
        description: String,
        published_date: DateTime<Utc>,
        cover_image_url: Option<String>,
        category_id: CategoryId,
        author_id: Option<AuthorId>,
        publisher_id: Option<PublisherId>,
    ) -> Self {
        Self {
            id: BookId::new(),
            title,
            isbn,
            description,
            published_date,
            cover_image_url,
            category_id,
            author_id,
            publisher_id,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Overwrites every mutable field and stamps the update timestamp.
    /// Updates are full-row replacements, not partial patches.
    #[allow(clippy::too_many_arguments)]
    pub fn overwrite(
        &mut self,
        title: String,
        isbn: String,
        description: String,
        published_date: DateTime<Utc>,
        cover_image_url: Option<String>,
        category_id: CategoryId,
        author_id: Option<AuthorId>,
        publisher_id: Option<PublisherId>,
    ) {
        self.title = title;
        self.isbn = isbn;
        self.description = description;
        self.published_date = published_date;
        self.cover_image_url = cover_image_url;
        self.category_id = category_id;
        self.author_id = author_id;
        self.publisher_id = publisher_id;
        self.updated_at = Some(Utc::now());
    }
}
