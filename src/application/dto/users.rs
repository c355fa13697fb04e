use crate::domain::user::UserProfile;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Author projection: name, email, and avatar alongside the id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl From<UserProfile> for AuthorDto {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id.into(),
            name: profile.name,
            email: profile.email,
            avatar: profile.avatar,
        }
    }
}

/// Comment-thread projection: no email.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentUserDto {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl From<UserProfile> for CommentUserDto {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id.into(),
            name: profile.name,
            avatar: profile.avatar,
        }
    }
}
