// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{security::AuthGuard, time::Clock},
        queries::articles::ArticleQueryService,
    },
    domain::{
        article::{ArticleEngagementRepository, ArticleReadRepository, ArticleWriteRepository},
        user::UserDirectory,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    auth_guard: Arc<dyn AuthGuard>,
}

impl ApplicationServices {
    pub fn new(
        article_read_repo: Arc<dyn ArticleReadRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_engagement_repo: Arc<dyn ArticleEngagementRepository>,
        users: Arc<dyn UserDirectory>,
        auth_guard: Arc<dyn AuthGuard>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&article_write_repo),
            Arc::clone(&article_engagement_repo),
            Arc::clone(&users),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&article_engagement_repo),
            Arc::clone(&users),
        ));

        Self {
            article_commands,
            article_queries,
            auth_guard,
        }
    }

    pub fn auth_guard(&self) -> Arc<dyn AuthGuard> {
        Arc::clone(&self.auth_guard)
    }
}
