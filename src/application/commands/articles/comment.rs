use super::ArticleCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
        resolve,
    },
    domain::article::{ArticleId, CommentText, NewComment},
};

pub struct AddCommentCommand {
    pub id: i64,
    pub text: String,
}

impl ArticleCommandService {
    /// Appends to the end of the comment thread and returns the single new
    /// comment with its user resolved. The append is atomic in the store;
    /// concurrent appends on the same article never lose a comment.
    pub async fn add_comment(
        &self,
        actor: &AuthenticatedUser,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        if command.text.trim().is_empty() {
            return Err(ApplicationError::validation(["text"]));
        }

        let id = ArticleId::new(command.id)?;
        let new_comment = NewComment {
            article_id: id,
            user_id: actor.id,
            text: CommentText::new(command.text)?,
            created_at: self.clock.now(),
        };

        let comment = self.engagement_repo.append_comment(new_comment).await?;
        let user = resolve::author_profile(self.users.as_ref(), comment.user_id).await?;
        Ok(CommentDto::from_parts(comment, user))
    }
}
