pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{
    Article, ArticleListing, ArticlePatch, Comment, LikeToggle, NewArticle, NewComment,
};
pub use repository::{
    ArticleEngagementRepository, ArticleFilter, ArticleReadRepository, ArticleWriteRepository,
};
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle, CommentId, CommentText, TagSet};
