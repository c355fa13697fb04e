use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        resolve,
    },
    domain::article::ArticleId,
};

pub struct GetArticleQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Fetches the full aggregate. A successful fetch is NOT repeatable
    /// without side effects: each call adds exactly 1 to the view counter,
    /// whoever the caller is, with no deduplication. The increment is an
    /// explicit atomic store operation, so N concurrent fetches add N.
    pub async fn get_article(&self, query: GetArticleQuery) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        article.views = self.engagement_repo.record_view(id).await?;

        resolve::assemble_article(self.read_repo.as_ref(), self.users.as_ref(), article).await
    }
}
