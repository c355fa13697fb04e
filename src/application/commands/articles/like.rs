use super::ArticleCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, LikeStatusDto},
        error::ApplicationResult,
    },
    domain::article::ArticleId,
};

pub struct ToggleLikeCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Flips the caller's membership in the like set: one state transition
    /// per call, so toggling twice restores the original state. The flip is
    /// a single atomic store operation; concurrent toggles by different
    /// users never clobber each other.
    pub async fn toggle_like(
        &self,
        actor: &AuthenticatedUser,
        command: ToggleLikeCommand,
    ) -> ApplicationResult<LikeStatusDto> {
        let id = ArticleId::new(command.id)?;
        let toggle = self.engagement_repo.toggle_like(id, actor.id).await?;
        Ok(LikeStatusDto {
            likes: toggle.likes,
            liked: toggle.liked,
        })
    }
}
