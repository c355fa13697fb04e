// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        AddCommentCommand, CreateArticleCommand, DeleteArticleCommand, ToggleLikeCommand,
        UpdateArticleCommand,
    },
    dto::{ArticleDto, ArticleSummaryDto, CommentDto, LikeStatusDto},
    queries::articles::{GetArticleQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Deserializer};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ArticleListParams {
    /// Only articles carrying this tag.
    #[serde(default)]
    pub tag: Option<String>,
    /// Only articles by this author.
    #[serde(default)]
    pub author: Option<i64>,
    /// Publication state to match; defaults to published.
    #[serde(default)]
    pub published: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
}

/// Field absence and an explicit `null` are different states here:
/// `subtitle: null` clears the subtitle, omitting it leaves it untouched.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub subtitle: Option<Option<String>>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCommentRequest {
    pub text: String,
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Up to 50 matching articles, newest first.", body = Vec<ArticleSummaryDto>)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            tag: params.tag,
            author: params.author,
            published: params.published.unwrap_or(true),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The full article; each fetch adds one view.", body = ArticleDto),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article(GetArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Missing title or content.", body = crate::presentation::http::error::ErrorBody)
    ),
    security(("bearer" = [])),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        subtitle: payload.subtitle,
        content: payload.content,
        tags: payload.tags,
        published: payload.published,
    };

    let article = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDto),
        (status = 403, description = "Caller is not the author.", body = crate::presentation::http::error::ErrorBody),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorBody)
    ),
    security(("bearer" = [])),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        subtitle: payload.subtitle,
        content: payload.content,
        tags: payload.tags,
        published: payload.published,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article and its comments removed."),
        (status = 403, description = "Caller is not the author.", body = crate::presentation::http::error::ErrorBody),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorBody)
    ),
    security(("bearer" = [])),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/like",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Membership flipped; new count and caller state.", body = LikeStatusDto),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorBody)
    ),
    security(("bearer" = [])),
    tag = "Articles"
)]
pub async fn toggle_like(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<LikeStatusDto>> {
    state
        .services
        .article_commands
        .toggle_like(&user, ToggleLikeCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article id")),
    request_body = AddCommentRequest,
    responses(
        (status = 201, description = "Comment appended to the thread.", body = CommentDto),
        (status = 400, description = "Empty comment text.", body = crate::presentation::http::error::ErrorBody),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorBody)
    ),
    security(("bearer" = [])),
    tag = "Articles"
)]
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<AddCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let comment = state
        .services
        .article_commands
        .add_comment(
            &user,
            AddCommentCommand {
                id,
                text: payload.text,
            },
        )
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(comment)))
}
