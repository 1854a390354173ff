//! Event service.

use crate::dto::{BookEventResponse, EventRequest, EventResponse};
use shelfmark_core::{
    Book, BookEvent, BookId, Event, EventId, ShelfmarkError, ShelfmarkResult, ValidateExt,
};
use shelfmark_repository::{
    BookCondition, BookEventCondition, EventCondition, Repository, UnitOfWork,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Service managing events and the books featured at them.
pub struct EventService<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> EventService<U> {
    /// Creates a new event service.
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    pub async fn list(&self) -> ShelfmarkResult<Vec<EventResponse>> {
        debug!("Listing events");

        let events = self.uow.repository::<Event>().get_all().await?;
        let mut responses = Vec::with_capacity(events.len());
        for event in events {
            let books = self.books_of(event.id).await?;
            responses.push(EventResponse::from_event(event, books));
        }
        Ok(responses)
    }

    pub async fn get(&self, id: EventId) -> ShelfmarkResult<Option<EventResponse>> {
        debug!("Getting event: {}", id);

        let Some(event) = self
            .uow
            .repository::<Event>()
            .get_first(EventCondition::ById(id))
            .await?
        else {
            return Ok(None);
        };

        let books = self.books_of(event.id).await?;
        Ok(Some(EventResponse::from_event(event, books)))
    }

    pub async fn create(&self, request: EventRequest) -> ShelfmarkResult<EventResponse> {
        debug!("Creating event: {}", request.name);
        request.validate_request()?;

        let event = Event::new(
            request.name,
            request.location,
            request.start_date,
            request.description,
        );
        self.uow.repository::<Event>().create(event.clone());
        self.uow.commit().await?;

        info!("Event created: {}", event.id);
        Ok(EventResponse::from_event(event, Vec::new()))
    }

    pub async fn update(&self, id: EventId, request: EventRequest) -> ShelfmarkResult<EventResponse> {
        debug!("Updating event: {}", id);
        request.validate_request()?;

        let repo = self.uow.repository::<Event>();
        let mut event = repo
            .get_first(EventCondition::ById(id))
            .await?
            .ok_or_else(|| ShelfmarkError::not_found("Event", id))?;

        event.overwrite(
            request.name,
            request.location,
            request.start_date,
            request.description,
        );
        repo.update(event.clone());
        self.uow.commit().await?;

        info!("Event updated: {}", id);
        let books = self.books_of(event.id).await?;
        Ok(EventResponse::from_event(event, books))
    }

    pub async fn delete(&self, id: EventId) -> ShelfmarkResult<()> {
        debug!("Deleting event: {}", id);

        let repo = self.uow.repository::<Event>();
        let Some(event) = repo.get_first(EventCondition::ById(id)).await? else {
            debug!("Event absent, nothing to delete: {}", id);
            return Ok(());
        };

        repo.delete(event);
        self.uow.commit().await?;

        info!("Event deleted: {}", id);
        Ok(())
    }

    /// Features a book at an event. Featuring the same book twice fails
    /// with a conflict and leaves exactly one row.
    pub async fn add_book(
        &self,
        event_id: EventId,
        book_id: BookId,
    ) -> ShelfmarkResult<BookEventResponse> {
        debug!("Featuring book {} at event {}", book_id, event_id);

        if event_id.is_nil() || book_id.is_nil() {
            return Err(ShelfmarkError::validation(
                "Event id and book id must not be nil",
            ));
        }

        let repo = self.uow.repository::<BookEvent>();
        let existing = repo
            .get_first(BookEventCondition::Pair(event_id, book_id))
            .await?;
        if existing.is_some() {
            return Err(ShelfmarkError::conflict(
                "Book is already featured in the event",
            ));
        }

        let row = BookEvent::new(event_id, book_id);
        repo.create(row.clone());
        self.uow.commit().await?;

        info!("Book {} featured at event {}", book_id, event_id);
        let book_title = self.book_title(book_id).await?;
        Ok(BookEventResponse {
            event_id: row.event_id,
            book_id: row.book_id,
            book_title,
        })
    }

    /// Unfeatures a book; removing a book that was never featured is a
    /// silent no-op.
    pub async fn remove_book(&self, event_id: EventId, book_id: BookId) -> ShelfmarkResult<()> {
        debug!("Unfeaturing book {} from event {}", book_id, event_id);

        let repo = self.uow.repository::<BookEvent>();
        let Some(row) = repo
            .get_first(BookEventCondition::Pair(event_id, book_id))
            .await?
        else {
            debug!("Book {} not featured at event {}, nothing to remove", book_id, event_id);
            return Ok(());
        };

        repo.delete(row);
        self.uow.commit().await?;

        info!("Book {} unfeatured from event {}", book_id, event_id);
        Ok(())
    }

    async fn books_of(&self, event_id: EventId) -> ShelfmarkResult<Vec<BookEventResponse>> {
        let rows = self
            .uow
            .repository::<BookEvent>()
            .get_by_condition(BookEventCondition::ByEvent(event_id))
            .await?;

        let mut books = Vec::with_capacity(rows.len());
        for row in rows {
            let book_title = self.book_title(row.book_id).await?;
            books.push(BookEventResponse {
                event_id: row.event_id,
                book_id: row.book_id,
                book_title,
            });
        }
        Ok(books)
    }

    async fn book_title(&self, book_id: BookId) -> ShelfmarkResult<Option<String>> {
        Ok(self
            .uow
            .repository::<Book>()
            .get_first(BookCondition::ById(book_id))
            .await?
            .map(|b| b.title))
    }
}
