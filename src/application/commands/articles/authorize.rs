// src/application/commands/articles/authorize.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, specifications::CanModifyArticleSpec},
};

pub(super) fn ensure_author(
    actor: &AuthenticatedUser,
    article: &Article,
) -> ApplicationResult<()> {
    let spec = CanModifyArticleSpec::new(article, actor.id);
    if spec.is_satisfied() {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "only the author may modify this article",
        ))
    }
}
