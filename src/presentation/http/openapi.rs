// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::dto::{
    ArticleDto, ArticleSummaryDto, AuthorDto, CommentDto, CommentUserDto, LikeStatusDto,
};
use crate::presentation::http::controllers::articles::{
    AddCommentRequest, CreateArticleRequest, UpdateArticleRequest,
};
use crate::presentation::http::error::ErrorBody;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::toggle_like,
        crate::presentation::http::controllers::articles::add_comment,
        super::routes::health
    ),
    components(schemas(
        StatusResponse,
        ArticleDto,
        ArticleSummaryDto,
        AuthorDto,
        CommentDto,
        CommentUserDto,
        LikeStatusDto,
        CreateArticleRequest,
        UpdateArticleRequest,
        AddCommentRequest,
        ErrorBody
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Articles", description = "Article aggregate operations."),
        (name = "System", description = "Service probes.")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
