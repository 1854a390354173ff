//! User sync DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shelfmark_core::{SubjectId, User};

/// Profile fields extracted from verified token claims by the
/// authentication layer. The service trusts these values as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable subject claim; must not be empty.
    pub subject: SubjectId,
    /// Username claim; some login methods furnish none, leaving it empty.
    #[serde(default)]
    pub user_name: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub profile_picture_url: Option<String>,
}

/// User response DTO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: SubjectId,
    pub user_name: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub profile_picture_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            display_name: user.display_name,
            email: user.email,
            profile_picture_url: user.profile_picture_url,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
