//! Event entity and the event-book join.

use crate::{BookId, EventId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A book-related event (signing, fair, reading).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub location: String,
    pub start_date: DateTime<Utc>,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Event {
    /// Creates a new event record.
    #[must_use]
    pub fn new(
        name: String,
        location: String,
        start_date: DateTime<Utc>,
        description: String,
    ) -> Self {
        Self {
            id: EventId::new(),
            name,
            location,
            start_date,
            description,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Overwrites every mutable field and stamps the update timestamp.
    pub fn overwrite(
        &mut self,
        name: String,
        location: String,
        start_date: DateTime<Utc>,
        description: String,
    ) {
        self.name = name;
        self.location = location;
        self.start_date = start_date;
        self.description = description;
        self.updated_at = Some(Utc::now());
    }
}

/// Join row featuring a book at an event. Keyed by the (event, book) pair;
/// the pair must not be duplicated. Deleting the event cascades; deleting a
/// featured book is rejected by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct BookEvent {
    pub event_id: EventId,
    pub book_id: BookId,
}

impl BookEvent {
    /// Creates a new event-book association.
    #[must_use]
    pub const fn new(event_id: EventId, book_id: BookId) -> Self {
        Self { event_id, book_id }
    }
}
