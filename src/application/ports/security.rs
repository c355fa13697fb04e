// src/application/ports/security.rs
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};
use async_trait::async_trait;

/// Resolves a bearer token to a caller identity, or fails with
/// `Unauthenticated`. Token issuance is not part of this surface.
#[async_trait]
pub trait AuthGuard: Send + Sync {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
