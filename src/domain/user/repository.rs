use crate::domain::errors::DomainResult;
use crate::domain::user::entity::UserProfile;
use crate::domain::user::value_objects::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<UserProfile>>;
    async fn find_many(&self, ids: &[UserId]) -> DomainResult<Vec<UserProfile>>;
}
