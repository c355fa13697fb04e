// tests/support/mocks/users.rs
use std::collections::HashMap;

use async_trait::async_trait;

use storygrid::domain::errors::DomainResult;
use storygrid::domain::user::{UserDirectory, UserId, UserProfile};

pub struct InMemoryUserDirectory {
    profiles: HashMap<i64, UserProfile>,
}

impl InMemoryUserDirectory {
    pub fn with_profiles(profiles: impl IntoIterator<Item = UserProfile>) -> Self {
        Self {
            profiles: profiles
                .into_iter()
                .map(|p| (i64::from(p.id), p))
                .collect(),
        }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<UserProfile>> {
        Ok(self.profiles.get(&i64::from(id)).cloned())
    }

    async fn find_many(&self, ids: &[UserId]) -> DomainResult<Vec<UserProfile>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.profiles.get(&i64::from(*id)).cloned())
            .collect())
    }
}
