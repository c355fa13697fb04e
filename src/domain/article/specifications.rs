use crate::domain::article::entity::Article;
use crate::domain::user::UserId;

/// Ownership policy for mutations: only the article's author may update or
/// delete it. Evaluated uniformly before every author-only operation.
pub struct CanModifyArticleSpec<'a> {
    article: &'a Article,
    user_id: UserId,
}

impl<'a> CanModifyArticleSpec<'a> {
    pub fn new(article: &'a Article, user_id: UserId) -> Self {
        Self { article, user_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.article.author_id == self.user_id
    }
}
