// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleTitle, CommentId, CommentText, TagSet,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub subtitle: Option<String>,
    pub content: ArticleContent,
    pub tags: TagSet,
    pub author_id: UserId,
    pub published: bool,
    pub views: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub subtitle: Option<String>,
    pub content: ArticleContent,
    pub tags: TagSet,
    pub author_id: UserId,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

/// Partial update of an article's editable fields. `author_id`, `views`,
/// likes, comments, and `created_at` are not expressible here at all.
///
/// `subtitle` is doubly optional: the outer level is field presence, the
/// inner level the stored value, so "leave untouched" and "explicitly clear"
/// stay distinct.
#[derive(Debug, Clone)]
pub struct ArticlePatch {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub subtitle: Option<Option<String>>,
    pub content: Option<ArticleContent>,
    pub tags: Option<TagSet>,
    pub published: Option<bool>,
}

impl ArticlePatch {
    pub fn new(id: ArticleId) -> Self {
        Self {
            id,
            title: None,
            subtitle: None,
            content: None,
            tags: None,
            published: None,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_subtitle(mut self, subtitle: Option<String>) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.subtitle.is_none()
            && self.content.is_none()
            && self.tags.is_none()
            && self.published.is_none()
    }
}

/// Listing row: the article plus engagement counts, derived by the store so
/// listings never load whole threads.
#[derive(Debug, Clone)]
pub struct ArticleListing {
    pub article: Article,
    pub like_count: i64,
    pub comment_count: i64,
}

/// Outcome of a like-set membership flip.
#[derive(Debug, Clone, Copy)]
pub struct LikeToggle {
    pub likes: i64,
    pub liked: bool,
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub user_id: UserId,
    pub text: CommentText,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub user_id: UserId,
    pub text: CommentText,
    pub created_at: DateTime<Utc>,
}
