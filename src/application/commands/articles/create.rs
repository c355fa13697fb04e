// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
        resolve,
    },
    domain::article::{ArticleContent, ArticleTitle, NewArticle, TagSet},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub subtitle: Option<String>,
    pub content: String,
    pub tags: Vec<String>,
    pub published: bool,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    subtitle: Option<String>,
    content: Option<String>,
    tags: Vec<String>,
    published: bool,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub fn build(self) -> CreateArticleCommand {
        CreateArticleCommand {
            title: self.title.unwrap_or_default(),
            subtitle: self.subtitle,
            content: self.content.unwrap_or_default(),
            tags: self.tags,
            published: self.published,
        }
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut missing = Vec::new();
        if command.title.trim().is_empty() {
            missing.push("title");
        }
        if command.content.trim().is_empty() {
            missing.push("content");
        }
        if !missing.is_empty() {
            return Err(ApplicationError::validation(missing));
        }

        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let tags = TagSet::new(command.tags);
        let now = self.clock.now();

        let new_article = NewArticle {
            title,
            subtitle: command.subtitle,
            content,
            tags,
            author_id: actor.id,
            published: command.published,
            created_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        let author = resolve::author_profile(self.users.as_ref(), created.author_id).await?;
        Ok(ArticleDto::from_parts(created, author, Vec::new(), Vec::new()))
    }
}
