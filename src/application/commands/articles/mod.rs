// src/application/commands/articles/mod.rs
mod authorize;
mod comment;
mod create;
mod delete;
mod like;
mod service;
mod update;

pub use comment::AddCommentCommand;
pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use like::ToggleLikeCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
