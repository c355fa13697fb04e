// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        article::{ArticleEngagementRepository, ArticleReadRepository, ArticleWriteRepository},
        user::UserDirectory,
    },
};

pub struct ArticleCommandService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) engagement_repo: Arc<dyn ArticleEngagementRepository>,
    pub(super) users: Arc<dyn UserDirectory>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        write_repo: Arc<dyn ArticleWriteRepository>,
        engagement_repo: Arc<dyn ArticleEngagementRepository>,
        users: Arc<dyn UserDirectory>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            engagement_repo,
            users,
            clock,
        }
    }
}
