pub mod articles;
pub mod auth;
pub mod serde_time;
pub mod users;

pub use articles::{ArticleDto, ArticleSummaryDto, CommentDto, LikeStatusDto};
pub use auth::AuthenticatedUser;
pub use users::{AuthorDto, CommentUserDto};
