//! Author, publisher, category, and tag entities.

use crate::{AuthorId, CategoryId, PublisherId, TagId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An author. Books reference authors loosely: deleting an author nullifies
/// the reference on dependent books.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub biography: String,
    pub birth_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Author {
    /// Creates a new author record.
    #[must_use]
    pub fn new(name: String, biography: String, birth_date: DateTime<Utc>) -> Self {
        Self {
            id: AuthorId::new(),
            name,
            biography,
            birth_date,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Overwrites every mutable field and stamps the update timestamp.
    pub fn overwrite(&mut self, name: String, biography: String, birth_date: DateTime<Utc>) {
        self.name = name;
        self.biography = biography;
        self.birth_date = birth_date;
        self.updated_at = Some(Utc::now());
    }
}

/// A publisher. Deleting a publisher nullifies the reference on dependent
/// books.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Publisher {
    pub id: PublisherId,
    pub name: String,
    pub website: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Publisher {
    /// Creates a new publisher record.
    #[must_use]
    pub fn new(name: String, website: String, address: String) -> Self {
        Self {
            id: PublisherId::new(),
            name,
            website,
            address,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Overwrites every mutable field and stamps the update timestamp.
    pub fn overwrite(&mut self, name: String, website: String, address: String) {
        self.name = name;
        self.website = website;
        self.address = address;
        self.updated_at = Some(Utc::now());
    }
}

/// A category. Every book requires one; deleting a category with books is
/// rejected by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Creates a new category record.
    #[must_use]
    pub fn new(name: String, description: String) -> Self {
        Self {
            id: CategoryId::new(),
            name,
            description,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Overwrites every mutable field and stamps the update timestamp.
    pub fn overwrite(&mut self, name: String, description: String) {
        self.name = name;
        self.description = description;
        self.updated_at = Some(Utc::now());
    }
}

/// A free-form tag applied to books.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Tag {
    /// Creates a new tag record.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            id: TagId::new(),
            name,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Overwrites the tag name and stamps the update timestamp.
    pub fn overwrite(&mut self, name: String) {
        self.name = name;
        self.updated_at = Some(Utc::now());
    }
}
