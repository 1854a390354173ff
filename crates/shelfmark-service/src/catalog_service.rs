//! Simple CRUD services: authors, publishers, categories, and tags.
//!
//! All four follow the same shape: reads return DTOs (absence is `None`,
//! not an error), creates validate then stage + commit, updates are
//! full-row overwrites that fail with `NotFound` on absence, deletes are
//! silent no-ops on absence.

use crate::dto::{
    AuthorRequest, AuthorResponse, CategoryRequest, CategoryResponse, PublisherRequest,
    PublisherResponse, TagRequest, TagResponse,
};
use shelfmark_core::{
    Author, AuthorId, Category, CategoryId, Publisher, PublisherId, ShelfmarkError,
    ShelfmarkResult, Tag, TagId, ValidateExt,
};
use shelfmark_repository::{
    AuthorCondition, CategoryCondition, PublisherCondition, Repository, TagCondition, UnitOfWork,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Author CRUD service.
pub struct AuthorService<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AuthorService<U> {
    /// Creates a new author service.
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    pub async fn list(&self) -> ShelfmarkResult<Vec<AuthorResponse>> {
        debug!("Listing authors");
        let authors = self.uow.repository::<Author>().get_all().await?;
        Ok(authors.into_iter().map(AuthorResponse::from).collect())
    }

    pub async fn get(&self, id: AuthorId) -> ShelfmarkResult<Option<AuthorResponse>> {
        debug!("Getting author: {}", id);
        let author = self
            .uow
            .repository::<Author>()
            .get_first(AuthorCondition::ById(id))
            .await?;
        Ok(author.map(AuthorResponse::from))
    }

    pub async fn create(&self, request: AuthorRequest) -> ShelfmarkResult<AuthorResponse> {
        debug!("Creating author: {}", request.name);
        request.validate_request()?;

        let author = Author::new(request.name, request.biography, request.birth_date);
        self.uow.repository::<Author>().create(author.clone());
        self.uow.commit().await?;

        info!("Author created: {}", author.id);
        Ok(AuthorResponse::from(author))
    }

    pub async fn update(
        &self,
        id: AuthorId,
        request: AuthorRequest,
    ) -> ShelfmarkResult<AuthorResponse> {
        debug!("Updating author: {}", id);
        request.validate_request()?;

        let repo = self.uow.repository::<Author>();
        let mut author = repo
            .get_first(AuthorCondition::ById(id))
            .await?
            .ok_or_else(|| ShelfmarkError::not_found("Author", id))?;

        author.overwrite(request.name, request.biography, request.birth_date);
        repo.update(author.clone());
        self.uow.commit().await?;

        info!("Author updated: {}", id);
        Ok(AuthorResponse::from(author))
    }

    pub async fn delete(&self, id: AuthorId) -> ShelfmarkResult<()> {
        debug!("Deleting author: {}", id);

        let repo = self.uow.repository::<Author>();
        let Some(author) = repo.get_first(AuthorCondition::ById(id)).await? else {
            debug!("Author absent, nothing to delete: {}", id);
            return Ok(());
        };

        repo.delete(author);
        self.uow.commit().await?;

        info!("Author deleted: {}", id);
        Ok(())
    }
}

/// Publisher CRUD service.
pub struct PublisherService<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> PublisherService<U> {
    /// Creates a new publisher service.
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    pub async fn list(&self) -> ShelfmarkResult<Vec<PublisherResponse>> {
        debug!("Listing publishers");
        let publishers = self.uow.repository::<Publisher>().get_all().await?;
        Ok(publishers.into_iter().map(PublisherResponse::from).collect())
    }

    pub async fn get(&self, id: PublisherId) -> ShelfmarkResult<Option<PublisherResponse>> {
        debug!("Getting publisher: {}", id);
        let publisher = self
            .uow
            .repository::<Publisher>()
            .get_first(PublisherCondition::ById(id))
            .await?;
        Ok(publisher.map(PublisherResponse::from))
    }

    pub async fn create(&self, request: PublisherRequest) -> ShelfmarkResult<PublisherResponse> {
        debug!("Creating publisher: {}", request.name);
        request.validate_request()?;

        let publisher = Publisher::new(request.name, request.website, request.address);
        self.uow.repository::<Publisher>().create(publisher.clone());
        self.uow.commit().await?;

        info!("Publisher created: {}", publisher.id);
        Ok(PublisherResponse::from(publisher))
    }

    pub async fn update(
        &self,
        id: PublisherId,
        request: PublisherRequest,
    ) -> ShelfmarkResult<PublisherResponse> {
        debug!("Updating publisher: {}", id);
        request.validate_request()?;

        let repo = self.uow.repository::<Publisher>();
        let mut publisher = repo
            .get_first(PublisherCondition::ById(id))
            .await?
            .ok_or_else(|| ShelfmarkError::not_found("Publisher", id))?;

        publisher.overwrite(request.name, request.website, request.address);
        repo.update(publisher.clone());
        self.uow.commit().await?;

        info!("Publisher updated: {}", id);
        Ok(PublisherResponse::from(publisher))
    }

    pub async fn delete(&self, id: PublisherId) -> ShelfmarkResult<()> {
        debug!("Deleting publisher: {}", id);

        let repo = self.uow.repository::<Publisher>();
        let Some(publisher) = repo.get_first(PublisherCondition::ById(id)).await? else {
            debug!("Publisher absent, nothing to delete: {}", id);
            return Ok(());
        };

        repo.delete(publisher);
        self.uow.commit().await?;

        info!("Publisher deleted: {}", id);
        Ok(())
    }
}

/// Category CRUD service.
pub struct CategoryService<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CategoryService<U> {
    /// Creates a new category service.
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    pub async fn list(&self) -> ShelfmarkResult<Vec<CategoryResponse>> {
        debug!("Listing categories");
        let categories = self.uow.repository::<Category>().get_all().await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    pub async fn get(&self, id: CategoryId) -> ShelfmarkResult<Option<CategoryResponse>> {
        debug!("Getting category: {}", id);
        let category = self
            .uow
            .repository::<Category>()
            .get_first(CategoryCondition::ById(id))
            .await?;
        Ok(category.map(CategoryResponse::from))
    }

    pub async fn create(&self, request: CategoryRequest) -> ShelfmarkResult<CategoryResponse> {
        debug!("Creating category: {}", request.name);
        request.validate_request()?;

        let category = Category::new(request.name, request.description);
        self.uow.repository::<Category>().create(category.clone());
        self.uow.commit().await?;

        info!("Category created: {}", category.id);
        Ok(CategoryResponse::from(category))
    }

    pub async fn update(
        &self,
        id: CategoryId,
        request: CategoryRequest,
    ) -> ShelfmarkResult<CategoryResponse> {
        debug!("Updating category: {}", id);
        request.validate_request()?;

        let repo = self.uow.repository::<Category>();
        let mut category = repo
            .get_first(CategoryCondition::ById(id))
            .await?
            .ok_or_else(|| ShelfmarkError::not_found("Category", id))?;

        category.overwrite(request.name, request.description);
        repo.update(category.clone());
        self.uow.commit().await?;

        info!("Category updated: {}", id);
        Ok(CategoryResponse::from(category))
    }

    pub async fn delete(&self, id: CategoryId) -> ShelfmarkResult<()> {
        debug!("Deleting category: {}", id);

        let repo = self.uow.repository::<Category>();
        let Some(category) = repo.get_first(CategoryCondition::ById(id)).await? else {
            debug!("Category absent, nothing to delete: {}", id);
            return Ok(());
        };

        // A category still referenced by books is rejected by the store
        // (FK restrict); the error propagates unmodified.
        repo.delete(category);
        self.uow.commit().await?;

        info!("Category deleted: {}", id);
        Ok(())
    }
}

/// Tag CRUD service.
pub struct TagService<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> TagService<U> {
    /// Creates a new tag service.
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    pub async fn list(&self) -> ShelfmarkResult<Vec<TagResponse>> {
        debug!("Listing tags");
        let tags = self.uow.repository::<Tag>().get_all().await?;
        Ok(tags.into_iter().map(TagResponse::from).collect())
    }

    pub async fn get(&self, id: TagId) -> ShelfmarkResult<Option<TagResponse>> {
        debug!("Getting tag: {}", id);
        let tag = self
            .uow
            .repository::<Tag>()
            .get_first(TagCondition::ById(id))
            .await?;
        Ok(tag.map(TagResponse::from))
    }

    pub async fn create(&self, request: TagRequest) -> ShelfmarkResult<TagResponse> {
        debug!("Creating tag: {}", request.name);
        request.validate_request()?;

        let tag = Tag::new(request.name);
        self.uow.repository::<Tag>().create(tag.clone());
        self.uow.commit().await?;

        info!("Tag created: {}", tag.id);
        Ok(TagResponse::from(tag))
    }

    pub async fn update(&self, id: TagId, request: TagRequest) -> ShelfmarkResult<TagResponse> {
        debug!("Updating tag: {}", id);
        request.validate_request()?;

        let repo = self.uow.repository::<Tag>();
        let mut tag = repo
            .get_first(TagCondition::ById(id))
            .await?
            .ok_or_else(|| ShelfmarkError::not_found("Tag", id))?;

        tag.overwrite(request.name);
        repo.update(tag.clone());
        self.uow.commit().await?;

        info!("Tag updated: {}", id);
        Ok(TagResponse::from(tag))
    }

    pub async fn delete(&self, id: TagId) -> ShelfmarkResult<()> {
        debug!("Deleting tag: {}", id);

        let repo = self.uow.repository::<Tag>();
        let Some(tag) = repo.get_first(TagCondition::ById(id)).await? else {
            debug!("Tag absent, nothing to delete: {}", id);
            return Ok(());
        };

        repo.delete(tag);
        self.uow.commit().await?;

        info!("Tag deleted: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shelfmark_repository::MemoryUnitOfWork;

    fn category_service() -> CategoryService<MemoryUnitOfWork> {
        CategoryService::new(Arc::new(MemoryUnitOfWork::new()))
    }

    #[tokio::test]
    async fn test_create_and_fetch_category() {
        let service = category_service();

        let created = service
            .create(CategoryRequest {
                name: "Fiction".to_string(),
                description: "Made-up stories".to_string(),
            })
            .await
            .unwrap();

        let fetched = service.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Fiction");
        assert_eq!(fetched.description, "Made-up stories");
        assert!(fetched.updated_at.is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_name() {
        let service = category_service();

        let result = service
            .create(CategoryRequest {
                name: "F".to_string(),
                description: String::new(),
            })
            .await;

        assert!(matches!(result, Err(ShelfmarkError::Validation(_))));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_overwrites_and_stamps() {
        let service = category_service();
        let created = service
            .create(CategoryRequest {
                name: "Fiction".to_string(),
                description: "Made-up stories".to_string(),
            })
            .await
            .unwrap();

        let updated = service
            .update(
                created.id,
                CategoryRequest {
                    name: "Science Fiction".to_string(),
                    description: String::new(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Science Fiction");
        assert!(updated.description.is_empty());
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_update_missing_category_fails() {
        let service = category_service();

        let result = service
            .update(
                CategoryId::new(),
                CategoryRequest {
                    name: "Fiction".to_string(),
                    description: String::new(),
                },
            )
            .await;

        assert!(matches!(result, Err(ShelfmarkError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_absent_category_is_silent() {
        let service = category_service();
        assert!(service.delete(CategoryId::new()).await.is_ok());
    }

    #[tokio::test]
    async fn test_get_absent_returns_none() {
        let service = category_service();
        assert!(service.get(CategoryId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_author_crud_cycle() {
        let service = AuthorService::new(Arc::new(MemoryUnitOfWork::new()));

        let created = service
            .create(AuthorRequest {
                name: "Frank Herbert".to_string(),
                biography: "American science fiction author".to_string(),
                birth_date: Utc::now(),
            })
            .await
            .unwrap();

        assert_eq!(service.list().await.unwrap().len(), 1);

        service.delete(created.id).await.unwrap();
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_tag_update_missing_fails() {
        let service = TagService::new(Arc::new(MemoryUnitOfWork::new()));

        let result = service
            .update(
                TagId::new(),
                TagRequest {
                    name: "signed".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(ShelfmarkError::NotFound { .. })));
    }
}
