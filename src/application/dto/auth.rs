use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Caller identity resolved by the auth guard: every operation that
/// requires authentication receives one of these, never a raw token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub expires_at: DateTime<Utc>,
}
