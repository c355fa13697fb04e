use super::{ArticleCommandService, authorize::ensure_author};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
        resolve,
    },
    domain::article::{ArticleContent, ArticleId, ArticlePatch, ArticleTitle, TagSet},
};

/// Partial update. `title`/`content` apply only when supplied non-empty;
/// `subtitle` and `published` apply whenever present, explicit clears
/// included; `tags` replaces wholesale.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub subtitle: Option<Option<String>>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        ensure_author(actor, &article)?;

        let patch = build_patch(id, command)?;
        let updated = if patch.is_empty() {
            article
        } else {
            self.write_repo.update(patch).await?
        };

        resolve::assemble_article(self.read_repo.as_ref(), self.users.as_ref(), updated).await
    }
}

fn build_patch(id: ArticleId, command: UpdateArticleCommand) -> ApplicationResult<ArticlePatch> {
    let UpdateArticleCommand {
        id: _,
        title,
        subtitle,
        content,
        tags,
        published,
    } = command;

    let mut patch = ArticlePatch::new(id);

    if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
        patch = patch.with_title(ArticleTitle::new(title)?);
    }
    if let Some(content) = content.filter(|c| !c.trim().is_empty()) {
        patch = patch.with_content(ArticleContent::new(content)?);
    }
    if let Some(subtitle) = subtitle {
        patch = patch.with_subtitle(subtitle);
    }
    if let Some(tags) = tags {
        patch = patch.with_tags(TagSet::new(tags));
    }
    if let Some(published) = published {
        patch = patch.with_published(published);
    }

    Ok(patch)
}
