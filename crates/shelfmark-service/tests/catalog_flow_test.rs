//! End-to-end flow over the in-memory backend: identity sync, catalogue
//! setup, wishlist and review activity for one user.

use chrono::Utc;
use shelfmark_service::{
    BookRequest, BookService, CategoryRequest, CategoryService, EventRequest, EventService,
    ReviewRatingService, ReviewRequest, UserProfile, UserService, WishlistRequest, WishlistService,
};
use shelfmark_repository::MemoryUnitOfWork;
use std::sync::Arc;

#[tokio::test]
async fn test_full_catalogue_flow() {
    let uow = Arc::new(MemoryUnitOfWork::new());

    // The token-verification layer syncs the user before anything else.
    let users = UserService::new(Arc::clone(&uow));
    let alice = users
        .create_or_update(UserProfile {
            subject: "auth0|alice".into(),
            user_name: "alice".to_string(),
            display_name: Some("Alice".to_string()),
            email: Some("alice@example.com".to_string()),
            profile_picture_url: None,
        })
        .await
        .unwrap();

    // Catalogue setup.
    let categories = CategoryService::new(Arc::clone(&uow));
    let fiction = categories
        .create(CategoryRequest {
            name: "Fiction".to_string(),
            description: "Made-up stories".to_string(),
        })
        .await
        .unwrap();

    let books = BookService::new(Arc::clone(&uow));
    let dune = books
        .create(BookRequest {
            title: "Dune".to_string(),
            isbn: "9780441013593".to_string(),
            description: "Desert planet epic".to_string(),
            published_date: Utc::now(),
            cover_image_url: None,
            category_id: fiction.id,
            author_id: None,
            publisher_id: None,
        })
        .await
        .unwrap();

    assert_eq!(dune.category_name.as_deref(), Some("Fiction"));
    assert!(dune.author_name.is_none());
    assert!(dune.publisher_name.is_none());

    // Wishlist activity.
    let wishlists = WishlistService::new(Arc::clone(&uow));
    let to_read = wishlists
        .create_wishlist(
            WishlistRequest {
                name: "To read".to_string(),
            },
            alice.id.clone(),
        )
        .await
        .unwrap();
    wishlists.add_book(to_read.id, dune.id).await.unwrap();

    let mine = wishlists.wishlists_by_user(&alice.id).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].books[0].book_title.as_deref(), Some("Dune"));

    // Reviews.
    let reviews = ReviewRatingService::new(Arc::clone(&uow));
    reviews
        .add_review(
            ReviewRequest {
                score: 3,
                review_text: "Slow start".to_string(),
                book_id: dune.id,
            },
            alice.id.clone(),
        )
        .await
        .unwrap();
    reviews
        .add_review(
            ReviewRequest {
                score: 5,
                review_text: "Masterpiece".to_string(),
                book_id: dune.id,
            },
            "auth0|bob".into(),
        )
        .await
        .unwrap();

    assert_eq!(reviews.average_rating(dune.id).await.unwrap(), 4.0);
    let listed = reviews.reviews_for_book(dune.id).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed
        .iter()
        .any(|r| r.user_name.as_deref() == Some("alice")));

    // Event featuring the book.
    let events = EventService::new(Arc::clone(&uow));
    let fair = events
        .create(EventRequest {
            name: "Book Fair".to_string(),
            location: "City Hall".to_string(),
            start_date: Utc::now(),
            description: "Annual city-wide book fair".to_string(),
        })
        .await
        .unwrap();
    events.add_book(fair.id, dune.id).await.unwrap();

    let fetched = events.get(fair.id).await.unwrap().unwrap();
    assert_eq!(fetched.books[0].book_title.as_deref(), Some("Dune"));
}
