//! User sync service.

use crate::dto::{UserProfile, UserResponse};
use shelfmark_core::{ShelfmarkError, ShelfmarkResult, User};
use shelfmark_repository::{Repository, UnitOfWork, UserCondition};
use std::sync::Arc;
use tracing::{debug, info};

/// Synchronizes users from verified identity claims.
///
/// Invoked once per authenticated request by the token-verification layer,
/// so both paths (insert and overwrite) must be cheap and unconditional.
pub struct UserService<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserService<U> {
    /// Creates a new user service.
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Inserts the user on first sight, otherwise overwrites every profile
    /// field with the claim values (last-write-wins).
    pub async fn create_or_update(&self, profile: UserProfile) -> ShelfmarkResult<UserResponse> {
        debug!("Syncing user profile: {}", profile.subject);

        if profile.subject.is_empty() {
            return Err(ShelfmarkError::validation("Subject claim must not be empty"));
        }

        let repo = self.uow.repository::<User>();
        let existing = repo
            .get_first(UserCondition::ById(profile.subject.clone()))
            .await?;

        let user = match existing {
            Some(mut user) => {
                user.sync_profile(
                    profile.user_name,
                    profile.display_name,
                    profile.email,
                    profile.profile_picture_url,
                );
                repo.update(user.clone());
                user
            }
            None => {
                let user = User::new(
                    profile.subject,
                    profile.user_name,
                    profile.display_name,
                    profile.email,
                    profile.profile_picture_url,
                );
                repo.create(user.clone());
                info!("User registered: {}", user.id);
                user
            }
        };

        self.uow.commit().await?;
        Ok(UserResponse::from(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfmark_repository::MemoryUnitOfWork;

    fn profile(subject: &str, user_name: &str) -> UserProfile {
        UserProfile {
            subject: subject.into(),
            user_name: user_name.to_string(),
            display_name: None,
            email: None,
            profile_picture_url: None,
        }
    }

    #[tokio::test]
    async fn test_first_sync_inserts() {
        let uow = Arc::new(MemoryUnitOfWork::new());
        let service = UserService::new(Arc::clone(&uow));

        let user = service
            .create_or_update(profile("auth0|alice", "alice"))
            .await
            .unwrap();

        assert_eq!(user.user_name, "alice");
        assert_eq!(uow.store().rows::<User>().len(), 1);
    }

    #[tokio::test]
    async fn test_second_sync_overwrites_in_place() {
        let uow = Arc::new(MemoryUnitOfWork::new());
        let service = UserService::new(Arc::clone(&uow));

        service
            .create_or_update(profile("auth0|alice", "alice"))
            .await
            .unwrap();

        let mut updated = profile("auth0|alice", "alice-renamed");
        updated.email = Some("alice@example.com".to_string());
        let user = service.create_or_update(updated).await.unwrap();

        assert_eq!(user.user_name, "alice-renamed");
        assert_eq!(user.email.as_deref(), Some("alice@example.com"));
        assert!(user.updated_at.is_some());
        assert_eq!(uow.store().rows::<User>().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_user_name_is_allowed() {
        let service = UserService::new(Arc::new(MemoryUnitOfWork::new()));

        let user = service
            .create_or_update(profile("auth0|bob", ""))
            .await
            .unwrap();
        assert!(user.user_name.is_empty());
    }

    #[tokio::test]
    async fn test_empty_subject_is_rejected() {
        let service = UserService::new(Arc::new(MemoryUnitOfWork::new()));

        let result = service.create_or_update(profile("", "ghost")).await;
        assert!(matches!(result, Err(ShelfmarkError::Validation(_))));
    }
}
