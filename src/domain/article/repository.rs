use crate::domain::article::entity::{
    Article, ArticleListing, ArticlePatch, Comment, LikeToggle, NewArticle, NewComment,
};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Listing filter; all supplied criteria are ANDed together.
#[derive(Debug, Clone)]
pub struct ArticleFilter {
    pub tag: Option<String>,
    pub author: Option<UserId>,
    pub published: bool,
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn list(&self, filter: &ArticleFilter, limit: u32) -> DomainResult<Vec<ArticleListing>>;
    async fn list_comments(&self, id: ArticleId) -> DomainResult<Vec<Comment>>;
    async fn list_likes(&self, id: ArticleId) -> DomainResult<Vec<UserId>>;
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, patch: ArticlePatch) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

/// Read-modify-write operations on a single article that the store must
/// apply in one atomic step. Concurrent calls may interleave freely without
/// losing an increment, a membership flip, or an appended comment.
#[async_trait]
pub trait ArticleEngagementRepository: Send + Sync {
    /// Adds 1 to the view counter and returns the new value.
    async fn record_view(&self, id: ArticleId) -> DomainResult<i64>;
    /// Flips the caller's like-set membership: present removes, absent adds.
    async fn toggle_like(&self, id: ArticleId, user: UserId) -> DomainResult<LikeToggle>;
    /// Appends to the end of the comment thread.
    async fn append_comment(&self, comment: NewComment) -> DomainResult<Comment>;
}
