//! Author, publisher, category, and tag DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shelfmark_core::{Author, AuthorId, Category, CategoryId, Publisher, PublisherId, Tag, TagId};
use validator::Validate;

/// Request to create or update an author.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AuthorRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(length(max = 2000, message = "Biography cannot exceed 2000 characters"))]
    pub biography: String,

    pub birth_date: DateTime<Utc>,
}

/// Author response DTO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorResponse {
    pub id: AuthorId,
    pub name: String,
    pub biography: String,
    pub birth_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
            biography: author.biography,
            birth_date: author.birth_date,
            created_at: author.created_at,
            updated_at: author.updated_at,
        }
    }
}

/// Request to create or update a publisher.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PublisherRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(length(max = 200, message = "Website cannot exceed 200 characters"))]
    pub website: String,

    #[validate(length(max = 200, message = "Address cannot exceed 200 characters"))]
    pub address: String,
}

/// Publisher response DTO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublisherResponse {
    pub id: PublisherId,
    pub name: String,
    pub website: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Publisher> for PublisherResponse {
    fn from(publisher: Publisher) -> Self {
        Self {
            id: publisher.id,
            name: publisher.name,
            website: publisher.website,
            address: publisher.address,
            created_at: publisher.created_at,
            updated_at: publisher.updated_at,
        }
    }
}

/// Request to create or update a category.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryRequest {
    #[validate(length(min = 2, max = 50, message = "Name must be 2-50 characters"))]
    pub name: String,

    #[validate(length(max = 500, message = "Description cannot exceed 500 characters"))]
    pub description: String,
}

/// Category response DTO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

/// Request to create or update a tag.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TagRequest {
    #[validate(length(min = 2, max = 50, message = "Name must be 2-50 characters"))]
    pub name: String,
}

/// Tag response DTO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagResponse {
    pub id: TagId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
            created_at: tag.created_at,
            updated_at: tag.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_request_validation() {
        let request = CategoryRequest {
            name: "Fiction".to_string(),
            description: String::new(),
        };
        assert!(request.validate().is_ok());

        let request = CategoryRequest {
            name: "F".to_string(),
            description: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_tag_request_rejects_short_name() {
        let request = TagRequest {
            name: "x".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
