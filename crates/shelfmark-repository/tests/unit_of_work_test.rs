//! Unit-of-work behavior over the in-memory backend.

use shelfmark_core::{Book, Category, ShelfmarkError, Tag, Wishlist, WishlistBook};
use shelfmark_repository::{
    MemoryUnitOfWork, Repository, UnitOfWork, WishlistBookCondition, WishlistCondition,
};

fn sample_book(category_id: shelfmark_core::CategoryId) -> Book {
    Book::new(
        "Dune".to_string(),
        "9780441172719".to_string(),
        "Desert planet epic".to_string(),
        chrono::Utc::now(),
        None,
        category_id,
        None,
        None,
    )
}

#[tokio::test]
async fn test_repository_is_cached_per_entity_type() {
    let uow = MemoryUnitOfWork::new();

    let first = uow.repository::<Tag>();
    let second = uow.repository::<Tag>();

    // Both handles share the same staging queue, so a write staged through
    // one is committed when flushing through the other.
    first.create(Tag::new("signed".to_string()));
    assert_eq!(second.save_changes().await.unwrap(), 1);
    assert_eq!(second.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_commit_spans_entity_types() {
    let uow = MemoryUnitOfWork::new();

    let category = Category::new("Fiction".to_string(), String::new());
    let book = sample_book(category.id);

    uow.repository::<Category>().create(category);
    uow.repository::<Book>().create(book);

    assert!(uow.repository::<Category>().get_all().await.unwrap().is_empty());
    assert!(uow.repository::<Book>().get_all().await.unwrap().is_empty());

    assert_eq!(uow.commit().await.unwrap(), 2);
    assert_eq!(uow.repository::<Category>().get_all().await.unwrap().len(), 1);
    assert_eq!(uow.repository::<Book>().get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_commit_with_no_staged_writes_is_a_noop() {
    let uow = MemoryUnitOfWork::new();
    assert_eq!(uow.commit().await.unwrap(), 0);
}

#[tokio::test]
async fn test_duplicate_join_row_is_rejected() {
    let uow = MemoryUnitOfWork::new();

    let wishlist = Wishlist::new("To read".to_string(), "auth0|alice".into());
    let category = Category::new("Fiction".to_string(), String::new());
    let book = sample_book(category.id);

    let repo = uow.repository::<WishlistBook>();
    repo.create(WishlistBook::new(wishlist.id, book.id));
    uow.commit().await.unwrap();

    repo.create(WishlistBook::new(wishlist.id, book.id));
    let err = uow.commit().await.unwrap_err();
    assert!(matches!(err, ShelfmarkError::Conflict(_)));

    let rows = repo
        .get_by_condition(WishlistBookCondition::ByWishlist(wishlist.id))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn test_get_first_returns_earliest_match() {
    let uow = MemoryUnitOfWork::new();

    let owner: shelfmark_core::SubjectId = "auth0|bob".into();
    let a = Wishlist::new("First".to_string(), owner.clone());
    let b = Wishlist::new("Second".to_string(), owner.clone());
    uow.store().seed(vec![a.clone(), b]);

    let repo = uow.repository::<Wishlist>();
    let found = repo
        .get_first(WishlistCondition::ByUser(owner))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, a.id);

    let absent = repo
        .get_first(WishlistCondition::ById(shelfmark_core::WishlistId::new()))
        .await
        .unwrap();
    assert!(absent.is_none());
}

#[tokio::test]
async fn test_delete_absent_row_is_silent() {
    let uow = MemoryUnitOfWork::new();
    let repo = uow.repository::<Tag>();

    repo.delete(Tag::new("orphan".to_string()));
    assert_eq!(uow.commit().await.unwrap(), 0);
}
