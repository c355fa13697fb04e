// src/application/resolve.rs
//
// Display resolution: replacing bare user-id references with projected
// public attributes, shared by command and query services.
use std::collections::HashMap;

use crate::application::dto::ArticleDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::{Article, ArticleReadRepository};
use crate::domain::user::{UserDirectory, UserId, UserProfile};

pub(crate) async fn author_profile(
    users: &dyn UserDirectory,
    id: UserId,
) -> ApplicationResult<UserProfile> {
    users
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApplicationError::infrastructure(format!("missing profile for user {id}")))
}

pub(crate) async fn profile_map(
    users: &dyn UserDirectory,
    ids: &[UserId],
) -> ApplicationResult<HashMap<i64, UserProfile>> {
    let mut unique: Vec<UserId> = Vec::new();
    for id in ids {
        if !unique.contains(id) {
            unique.push(*id);
        }
    }
    let profiles = users.find_many(&unique).await?;
    Ok(profiles
        .into_iter()
        .map(|profile| (i64::from(profile.id), profile))
        .collect())
}

pub(crate) fn expect_profile(
    profiles: &HashMap<i64, UserProfile>,
    id: UserId,
) -> ApplicationResult<UserProfile> {
    profiles
        .get(&i64::from(id))
        .cloned()
        .ok_or_else(|| ApplicationError::infrastructure(format!("missing profile for user {id}")))
}

/// Loads the like set and comment thread for an article and assembles the
/// fully resolved aggregate view.
pub(crate) async fn assemble_article(
    read_repo: &dyn ArticleReadRepository,
    users: &dyn UserDirectory,
    article: Article,
) -> ApplicationResult<ArticleDto> {
    let likes = read_repo.list_likes(article.id).await?;
    let comments = read_repo.list_comments(article.id).await?;

    let mut ids: Vec<UserId> = vec![article.author_id];
    ids.extend(comments.iter().map(|comment| comment.user_id));
    let profiles = profile_map(users, &ids).await?;

    let author = expect_profile(&profiles, article.author_id)?;
    let comments = comments
        .into_iter()
        .map(|comment| {
            let user = expect_profile(&profiles, comment.user_id)?;
            Ok((comment, user))
        })
        .collect::<ApplicationResult<Vec<_>>>()?;

    Ok(ArticleDto::from_parts(article, author, likes, comments))
}
