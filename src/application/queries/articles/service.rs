use std::sync::Arc;

use crate::domain::{
    article::{ArticleEngagementRepository, ArticleReadRepository},
    user::UserDirectory,
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) engagement_repo: Arc<dyn ArticleEngagementRepository>,
    pub(super) users: Arc<dyn UserDirectory>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        engagement_repo: Arc<dyn ArticleEngagementRepository>,
        users: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            read_repo,
            engagement_repo,
            users,
        }
    }
}
