use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleSummaryDto,
        error::ApplicationResult,
        resolve,
    },
    domain::{article::ArticleFilter, user::UserId},
};

/// Hard cap on listing size; there is no pagination beyond it.
const RESULT_CAP: u32 = 50;

pub struct ListArticlesQuery {
    pub tag: Option<String>,
    pub author: Option<i64>,
    pub published: bool,
}

impl ArticleQueryService {
    /// Read-only listing: up to 50 matches, newest first, authors resolved.
    /// An empty result is a success.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let filter = ArticleFilter {
            tag: query
                .tag
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
            author: query.author.map(UserId::new).transpose()?,
            published: query.published,
        };

        let listings = self.read_repo.list(&filter, RESULT_CAP).await?;

        let author_ids: Vec<UserId> = listings
            .iter()
            .map(|listing| listing.article.author_id)
            .collect();
        let profiles = resolve::profile_map(self.users.as_ref(), &author_ids).await?;

        listings
            .into_iter()
            .map(|listing| {
                let author = resolve::expect_profile(&profiles, listing.article.author_id)?;
                Ok(ArticleSummaryDto::from_parts(listing, author))
            })
            .collect()
    }
}
