//! User entity synchronized from external identity claims.

use crate::SubjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user mirrored from the external identity provider.
///
/// The primary key is the provider's stable subject claim; no surrogate id
/// is generated. Profile fields are overwritten wholesale on every token
/// validation (last-write-wins), so nothing here is authoritative beyond
/// the subject id itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    /// External identity subject claim (primary key).
    pub id: SubjectId,

    /// Username from the identity provider. Some login methods do not
    /// furnish one, in which case this is the empty string.
    pub user_name: String,

    /// Display name claim.
    pub display_name: Option<String>,

    /// Email claim.
    pub email: Option<String>,

    /// Profile picture URL claim.
    pub profile_picture_url: Option<String>,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last profile sync that changed the row.
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a new user from identity claims.
    #[must_use]
    pub fn new(
        id: SubjectId,
        user_name: String,
        display_name: Option<String>,
        email: Option<String>,
        profile_picture_url: Option<String>,
    ) -> Self {
        Self {
            id,
            user_name,
            display_name,
            email,
            profile_picture_url,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Overwrites all mutable profile fields unconditionally and stamps the
    /// update timestamp. No merge, no conflict detection.
    pub fn sync_profile(
        &mut self,
        user_name: String,
        display_name: Option<String>,
        email: Option<String>,
        profile_picture_url: Option<String>,
    ) {
        self.user_name = user_name;
        self.display_name = display_name;
        self.email = email;
        self.profile_picture_url = profile_picture_url;
        self.updated_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_profile_is_last_write_wins() {
        let mut user = User::new(
            SubjectId::new("auth0|123"),
            "reader".to_string(),
            Some("Reader One".to_string()),
            Some("reader@example.com".to_string()),
            None,
        );

        user.sync_profile(String::new(), None, Some("new@example.com".to_string()), None);

        assert!(user.user_name.is_empty());
        assert!(user.display_name.is_none());
        assert_eq!(user.email.as_deref(), Some("new@example.com"));
        assert!(user.updated_at.is_some());
    }
}
