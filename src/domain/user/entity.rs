// src/domain/user/entity.rs
use crate::domain::user::value_objects::UserId;

/// Public display attributes of a user, as projected into article and
/// comment responses. Identity and credential management live elsewhere.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}
