//! Wishlist service.

use crate::dto::{WishlistBookResponse, WishlistRequest, WishlistResponse};
use shelfmark_core::{
    Book, BookId, ShelfmarkError, ShelfmarkResult, SubjectId, ValidateExt, Wishlist, WishlistBook,
    WishlistId,
};
use shelfmark_repository::{
    BookCondition, Repository, UnitOfWork, WishlistBookCondition, WishlistCondition,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Service managing wishlists and their book associations.
pub struct WishlistService<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> WishlistService<U> {
    /// Creates a new wishlist service.
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// All wishlists owned by the user, with their book rows resolved.
    pub async fn wishlists_by_user(
        &self,
        user_id: &SubjectId,
    ) -> ShelfmarkResult<Vec<WishlistResponse>> {
        debug!("Listing wishlists for user: {}", user_id);

        let wishlists = self
            .uow
            .repository::<Wishlist>()
            .get_by_condition(WishlistCondition::ByUser(user_id.clone()))
            .await?;

        let mut responses = Vec::with_capacity(wishlists.len());
        for wishlist in wishlists {
            let books = self.books_of(wishlist.id).await?;
            responses.push(WishlistResponse::from_wishlist(wishlist, books));
        }
        Ok(responses)
    }

    /// Creates a wishlist owned by the user.
    pub async fn create_wishlist(
        &self,
        request: WishlistRequest,
        user_id: SubjectId,
    ) -> ShelfmarkResult<WishlistResponse> {
        debug!("Creating wishlist for user: {}", user_id);

        if user_id.is_empty() {
            return Err(ShelfmarkError::validation("User id must not be empty"));
        }
        request.validate_request()?;

        let wishlist = Wishlist::new(request.name, user_id);
        self.uow.repository::<Wishlist>().create(wishlist.clone());
        self.uow.commit().await?;

        info!("Wishlist created: {}", wishlist.id);
        Ok(WishlistResponse::from_wishlist(wishlist, Vec::new()))
    }

    /// Adds a book to a wishlist. Adding the same book twice fails with a
    /// conflict and leaves exactly one row.
    pub async fn add_book(
        &self,
        wishlist_id: WishlistId,
        book_id: BookId,
    ) -> ShelfmarkResult<WishlistBookResponse> {
        debug!("Adding book {} to wishlist {}", book_id, wishlist_id);

        if wishlist_id.is_nil() || book_id.is_nil() {
            return Err(ShelfmarkError::validation(
                "Wishlist id and book id must not be nil",
            ));
        }

        let repo = self.uow.repository::<WishlistBook>();
        let existing = repo
            .get_first(WishlistBookCondition::Pair(wishlist_id, book_id))
            .await?;
        if existing.is_some() {
            return Err(ShelfmarkError::conflict("Book is already in the wishlist"));
        }

        let row = WishlistBook::new(wishlist_id, book_id);
        repo.create(row.clone());
        self.uow.commit().await?;

        info!("Book {} added to wishlist {}", book_id, wishlist_id);
        let book_title = self.book_title(book_id).await?;
        Ok(WishlistBookResponse {
            wishlist_id: row.wishlist_id,
            book_id: row.book_id,
            book_title,
            added_date: row.added_date,
        })
    }

    /// Removes a book from a wishlist; removing a book that was never added
    /// is a silent no-op.
    pub async fn remove_book(
        &self,
        wishlist_id: WishlistId,
        book_id: BookId,
    ) -> ShelfmarkResult<()> {
        debug!("Removing book {} from wishlist {}", book_id, wishlist_id);

        let repo = self.uow.repository::<WishlistBook>();
        let Some(row) = repo
            .get_first(WishlistBookCondition::Pair(wishlist_id, book_id))
            .await?
        else {
            debug!("Book {} not on wishlist {}, nothing to remove", book_id, wishlist_id);
            return Ok(());
        };

        repo.delete(row);
        self.uow.commit().await?;

        info!("Book {} removed from wishlist {}", book_id, wishlist_id);
        Ok(())
    }

    async fn books_of(&self, wishlist_id: WishlistId) -> ShelfmarkResult<Vec<WishlistBookResponse>> {
        let rows = self
            .uow
            .repository::<WishlistBook>()
            .get_by_condition(WishlistBookCondition::ByWishlist(wishlist_id))
            .await?;

        let mut books = Vec::with_capacity(rows.len());
        for row in rows {
            let book_title = self.book_title(row.book_id).await?;
            books.push(WishlistBookResponse {
                wishlist_id: row.wishlist_id,
                book_id: row.book_id,
                book_title,
                added_date: row.added_date,
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

#[cfg(test)]
mod tests {
    use super::*;
    use shelfmark_core::Category;
    use shelfmark_repository::MemoryUnitOfWork;

    fn seeded_book(uow: &MemoryUnitOfWork) -> Book {
        let category = Category::new("Fiction".to_string(), String::new());
        let book = Book::new(
            "Dune".to_string(),
            "9780441013593".to_string(),
            String::new(),
            chrono::Utc::now(),
            None,
            category.id,
            None,
            None,
        );
        uow.store().seed(vec![category]);
        uow.store().seed(vec![book.clone()]);
        book
    }

    #[tokio::test]
    async fn test_create_wishlist_requires_user_id() {
        let service = WishlistService::new(Arc::new(MemoryUnitOfWork::new()));

        let result = service
            .create_wishlist(
                WishlistRequest {
                    name: "To read".to_string(),
                },
                SubjectId::new(""),
            )
            .await;

        assert!(matches!(result, Err(ShelfmarkError::Validation(_))));
    }

    #[tokio::test]
    async fn test_add_book_twice_conflicts_with_one_row() {
        let uow = Arc::new(MemoryUnitOfWork::new());
        let book = seeded_book(&uow);
        let service = WishlistService::new(Arc::clone(&uow));

        let wishlist = service
            .create_wishlist(
                WishlistRequest {
                    name: "To read".to_string(),
                },
                "auth0|alice".into(),
            )
            .await
            .unwrap();

        service.add_book(wishlist.id, book.id).await.unwrap();
        let err = service.add_book(wishlist.id, book.id).await.unwrap_err();

        assert!(matches!(err, ShelfmarkError::Conflict(_)));
        assert_eq!(err.to_string(), "Conflict: Book is already in the wishlist");
        assert_eq!(uow.store().rows::<WishlistBook>().len(), 1);
    }

    #[tokio::test]
    async fn test_add_book_rejects_nil_ids() {
        let service = WishlistService::new(Arc::new(MemoryUnitOfWork::new()));
        let nil = WishlistId::from_uuid(uuid::Uuid::nil());

        let result = service.add_book(nil, BookId::new()).await;
        assert!(matches!(result, Err(ShelfmarkError::Validation(_))));
    }

    #[tokio::test]
    async fn test_remove_never_added_book_is_silent() {
        let uow = Arc::new(MemoryUnitOfWork::new());
        let service = WishlistService::new(Arc::clone(&uow));

        service
            .remove_book(WishlistId::new(), BookId::new())
            .await
            .unwrap();
        assert!(uow.store().rows::<WishlistBook>().is_empty());
    }

    #[tokio::test]
    async fn test_wishlists_by_user_resolves_book_titles() {
        let uow = Arc::new(MemoryUnitOfWork::new());
        let book = seeded_book(&uow);
        let service = WishlistService::new(Arc::clone(&uow));

        let owner: SubjectId = "auth0|alice".into();
        let wishlist = service
            .create_wishlist(
                WishlistRequest {
                    name: "To read".to_string(),
                },
                owner.clone(),
            )
            .await
            .unwrap();
        service.add_book(wishlist.id, book.id).await.unwrap();

        let wishlists = service.wishlists_by_user(&owner).await.unwrap();
        assert_eq!(wishlists.len(), 1);
        assert_eq!(wishlists[0].books.len(), 1);
        assert_eq!(wishlists[0].books[0].book_title.as_deref(), Some("Dune"));

        // Other users see nothing.
        let other: SubjectId = "auth0|bob".into();
        assert!(service.wishlists_by_user(&other).await.unwrap().is_empty());
    }
}
