//! Book service with denormalized reference names.

use crate::dto::{BookRequest, BookResponse};
use shelfmark_core::{
    Author, Book, BookId, Category, Publisher, ShelfmarkError, ShelfmarkResult, ValidateExt,
};
use shelfmark_repository::{
    AuthorCondition, BookCondition, CategoryCondition, PublisherCondition, Repository, UnitOfWork,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Book CRUD service.
///
/// Reads resolve the category, author, and publisher names by composing
/// repository reads; references that point nowhere resolve to `None`.
pub struct BookService<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> BookService<U> {
    /// Creates a new book service.
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    pub async fn list(&self) -> ShelfmarkResult<Vec<BookResponse>> {
        debug!("Listing books");

        let books = self.uow.repository::<Book>().get_all().await?;

        // One read per reference table instead of one per book.
        let categories: HashMap<_, _> = self
            .uow
            .repository::<Category>()
            .get_all()
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();
        let authors: HashMap<_, _> = self
            .uow
            .repository::<Author>()
            .get_all()
            .await?
            .into_iter()
            .map(|a| (a.id, a.name))
            .collect();
        let publishers: HashMap<_, _> = self
            .uow
            .repository::<Publisher>()
            .get_all()
            .await?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect();

        Ok(books
            .into_iter()
            .map(|book| {
                let category_name = categories.get(&book.category_id).cloned();
                let author_name = book.author_id.and_then(|id| authors.get(&id).cloned());
                let publisher_name = book.publisher_id.and_then(|id| publishers.get(&id).cloned());
                BookResponse::from_book(book, category_name, author_name, publisher_name)
            })
            .collect())
    }

    pub async fn get(&self, id: BookId) -> ShelfmarkResult<Option<BookResponse>> {
        debug!("Getting book: {}", id);

        let Some(book) = self
            .uow
            .repository::<Book>()
            .get_first(BookCondition::ById(id))
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(self.resolve(book).await?))
    }

    pub async fn create(&self, request: BookRequest) -> ShelfmarkResult<BookResponse> {
        debug!("Creating book: {}", request.title);
        request.validate_request()?;

        let book = Book::new(
            request.title,
            request.isbn,
            request.description,
            request.published_date,
            request.cover_image_url,
            request.category_id,
            request.author_id,
            request.publisher_id,
        );
        self.uow.repository::<Book>().create(book.clone());
        self.uow.commit().await?;

        info!("Book created: {}", book.id);
        self.resolve(book).await
    }

    pub async fn update(&self, id: BookId, request: BookRequest) -> ShelfmarkResult<BookResponse> {
        debug!("Updating book: {}", id);
        request.validate_request()?;

        let repo = self.uow.repository::<Book>();
        let mut book = repo
            .get_first(BookCondition::ById(id))
            .await?
            .ok_or_else(|| ShelfmarkError::not_found("Book", id))?;

        // A request without a cover URL keeps the stored one.
        let cover_image_url = request.cover_image_url.or_else(|| book.cover_image_url.clone());

        book.overwrite(
            request.title,
            request.isbn,
            request.description,
            request.published_date,
            cover_image_url,
            request.category_id,
            request.author_id,
            request.publisher_id,
        );
        repo.update(book.clone());
        self.uow.commit().await?;

        info!("Book updated: {}", id);
        self.resolve(book).await
    }

    pub async fn delete(&self, id: BookId) -> ShelfmarkResult<()> {
        debug!("Deleting book: {}", id);

        let repo = self.uow.repository::<Book>();
        let Some(book) = repo.get_first(BookCondition::ById(id)).await? else {
            debug!("Book absent, nothing to delete: {}", id);
            return Ok(());
        };

        // A book still referenced by reviews, wishlists, or events is
        // rejected by the store (FK restrict); the error propagates.
        repo.delete(book);
        self.uow.commit().await?;

        info!("Book deleted: {}", id);
        Ok(())
    }

    async fn resolve(&self, book: Book) -> ShelfmarkResult<BookResponse> {
        let category_name = self
            .uow
            .repository::<Category>()
            .get_first(CategoryCondition::ById(book.category_id))
            .await?
            .map(|c| c.name);

        let author_name = match book.author_id {
            Some(id) => self
                .uow
                .repository::<Author>()
                .get_first(AuthorCondition::ById(id))
                .await?
                .map(|a| a.name),
            None => None,
        };

        let publisher_name = match book.publisher_id {
            Some(id) => self
                .uow
                .repository::<Publisher>()
                .get_first(PublisherCondition::ById(id))
                .await?
                .map(|p| p.name),
            None => None,
        };

        Ok(BookResponse::from_book(
            book,
            category_name,
            author_name,
            publisher_name,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shelfmark_core::CategoryId;
    use shelfmark_repository::MemoryUnitOfWork;

    fn book_request(category_id: CategoryId) -> BookRequest {
        BookRequest {
            title: "Dune".to_string(),
            isbn: "9780441013593".to_string(),
            description: "Desert planet epic".to_string(),
            published_date: Utc::now(),
            cover_image_url: None,
            category_id,
            author_id: None,
            publisher_id: None,
        }
    }

    #[tokio::test]
    async fn test_created_book_resolves_category_name() {
        let uow = Arc::new(MemoryUnitOfWork::new());
        let category = Category::new("Fiction".to_string(), String::new());
        uow.store().seed(vec![category.clone()]);

        let service = BookService::new(uow);
        let book = service.create(book_request(category.id)).await.unwrap();

        assert_eq!(book.category_name.as_deref(), Some("Fiction"));
        assert!(book.author_name.is_none());
        assert!(book.publisher_name.is_none());

        let fetched = service.get(book.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "Dune");
        assert_eq!(fetched.isbn, "9780441013593");
    }

    #[tokio::test]
    async fn test_list_resolves_reference_names() {
        let uow = Arc::new(MemoryUnitOfWork::new());
        let category = Category::new("Fiction".to_string(), String::new());
        let author = Author::new("Frank Herbert".to_string(), String::new(), Utc::now());
        uow.store().seed(vec![category.clone()]);
        uow.store().seed(vec![author.clone()]);

        let service = BookService::new(uow);
        let mut request = book_request(category.id);
        request.author_id = Some(author.id);
        service.create(request).await.unwrap();

        let books = service.list().await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].category_name.as_deref(), Some("Fiction"));
        assert_eq!(books[0].author_name.as_deref(), Some("Frank Herbert"));
    }

    #[tokio::test]
    async fn test_update_keeps_cover_url_when_absent() {
        let uow = Arc::new(MemoryUnitOfWork::new());
        let category = Category::new("Fiction".to_string(), String::new());
        uow.store().seed(vec![category.clone()]);

        let service = BookService::new(uow);
        let mut request = book_request(category.id);
        request.cover_image_url = Some("https://img.example.com/dune.jpg".to_string());
        let created = service.create(request).await.unwrap();

        let updated = service
            .update(created.id, book_request(category.id))
            .await
            .unwrap();

        assert_eq!(
            updated.cover_image_url.as_deref(),
            Some("https://img.example.com/dune.jpg")
        );
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_update_missing_book_fails() {
        let service = BookService::new(Arc::new(MemoryUnitOfWork::new()));
        let result = service.update(BookId::new(), book_request(CategoryId::new())).await;
        assert!(matches!(result, Err(ShelfmarkError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let uow = Arc::new(MemoryUnitOfWork::new());
        let category = Category::new("Fiction".to_string(), String::new());
        uow.store().seed(vec![category.clone()]);

        let service = BookService::new(uow);
        let created = service.create(book_request(category.id)).await.unwrap();

        service.delete(created.id).await.unwrap();
        service.delete(created.id).await.unwrap();
        assert!(service.list().await.unwrap().is_empty());
    }
}
