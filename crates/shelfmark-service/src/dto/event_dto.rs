//! Event DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shelfmark_core::{BookId, Event, EventId};
use validator::Validate;

/// Request to create or update an event.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EventRequest {
    #[validate(length(min = 3, max = 100, message = "Name must be 3-100 characters"))]
    pub name: String,

    #[validate(length(max = 200, message = "Location cannot exceed 200 characters"))]
    pub location: String,

    pub start_date: DateTime<Utc>,

    #[validate(length(min = 10, max = 1000, message = "Description must be 10-1000 characters"))]
    pub description: String,
}

/// Event response DTO with the featured books.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    pub id: EventId,
    pub name: String,
    pub location: String,
    pub start_date: DateTime<Utc>,
    pub description: String,
    pub books: Vec<BookEventResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl EventResponse {
    /// Builds the response from the entity plus its resolved book rows.
    #[must_use]
    pub fn from_event(event: Event, books: Vec<BookEventResponse>) -> Self {
        Self {
            id: event.id,
            name: event.name,
            location: event.location,
            start_date: event.start_date,
            description: event.description,
            books,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

/// A book featured at an event, with its title resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookEventResponse {
    pub event_id: EventId,
    pub book_id: BookId,
    pub book_title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_request_validation() {
        let request = EventRequest {
            name: "Book Fair".to_string(),
            location: "City Hall".to_string(),
            start_date: Utc::now(),
            description: "Annual city-wide book fair".to_string(),
        };
        assert!(request.validate().is_ok());

        let request = EventRequest {
            name: "BF".to_string(),
            location: String::new(),
            start_date: Utc::now(),
            description: "too short".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
