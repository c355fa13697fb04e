use crate::domain::article::{Article, ArticleListing, Comment};
use crate::domain::user::UserProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;
use super::users::{AuthorDto, CommentUserDto};

/// Full aggregate view: the article with its like membership and comment
/// thread, all user references resolved.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub content: String,
    pub tags: Vec<String>,
    pub author: AuthorDto,
    pub published: bool,
    pub views: i64,
    pub likes: Vec<i64>,
    pub comments: Vec<CommentDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl ArticleDto {
    pub fn from_parts(
        article: Article,
        author: UserProfile,
        likes: Vec<crate::domain::user::UserId>,
        comments: Vec<(Comment, UserProfile)>,
    ) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            subtitle: article.subtitle,
            content: article.content.into(),
            tags: article.tags.into(),
            author: author.into(),
            published: article.published,
            views: article.views,
            likes: likes.into_iter().map(Into::into).collect(),
            comments: comments
                .into_iter()
                .map(|(comment, user)| CommentDto::from_parts(comment, user))
                .collect(),
            created_at: article.created_at,
        }
    }
}

/// Listing view: engagement counts instead of the full thread.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub content: String,
    pub tags: Vec<String>,
    pub author: AuthorDto,
    pub published: bool,
    pub views: i64,
    pub like_count: i64,
    pub comment_count: i64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl ArticleSummaryDto {
    pub fn from_parts(listing: ArticleListing, author: UserProfile) -> Self {
        let ArticleListing {
            article,
            like_count,
            comment_count,
        } = listing;
        Self {
            id: article.id.into(),
            title: article.title.into(),
            subtitle: article.subtitle,
            content: article.content.into(),
            tags: article.tags.into(),
            author: author.into(),
            published: article.published,
            views: article.views,
            like_count,
            comment_count,
            created_at: article.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub user: CommentUserDto,
    pub text: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl CommentDto {
    pub fn from_parts(comment: Comment, user: UserProfile) -> Self {
        Self {
            id: comment.id.into(),
            user: user.into(),
            text: comment.text.into(),
            created_at: comment.created_at,
        }
    }
}

/// Result of a like toggle: the new count and the caller's membership.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct LikeStatusDto {
    pub likes: i64,
    pub liked: bool,
}
