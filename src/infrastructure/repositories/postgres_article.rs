// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleEngagementRepository, ArticleFilter, ArticleId,
    ArticleListing, ArticlePatch, ArticleReadRepository, ArticleTitle, ArticleWriteRepository,
    Comment, CommentId, CommentText, LikeToggle, NewArticle, NewComment, TagSet,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str =
    "id, title, subtitle, content, tags, author_id, published, views, created_at";

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleEngagementRepository {
    pool: PgPool,
}

impl PostgresArticleEngagementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    subtitle: Option<String>,
    content: String,
    tags: Vec<String>,
    author_id: i64,
    published: bool,
    views: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            subtitle: row.subtitle,
            content: ArticleContent::new(row.content)?,
            tags: TagSet::new(row.tags),
            author_id: UserId::new(row.author_id)?,
            published: row.published,
            views: row.views,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleListingRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    like_count: i64,
    comment_count: i64,
}

impl TryFrom<ArticleListingRow> for ArticleListing {
    type Error = DomainError;

    fn try_from(row: ArticleListingRow) -> Result<Self, Self::Error> {
        Ok(ArticleListing {
            article: Article::try_from(row.article)?,
            like_count: row.like_count,
            comment_count: row.comment_count,
        })
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    user_id: i64,
    body: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            user_id: UserId::new(row.user_id)?,
            text: CommentText::new(row.body)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1",
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self, filter: &ArticleFilter, limit: u32) -> DomainResult<Vec<ArticleListing>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT a.id, a.title, a.subtitle, a.content, a.tags, a.author_id, a.published, \
             a.views, a.created_at, \
             (SELECT count(*) FROM article_likes l WHERE l.article_id = a.id) AS like_count, \
             (SELECT count(*) FROM article_comments c WHERE c.article_id = a.id) AS comment_count \
             FROM articles a WHERE a.published = ",
        );
        builder.push_bind(filter.published);

        if let Some(tag) = &filter.tag {
            builder.push(" AND ");
            builder.push_bind(tag.clone());
            builder.push(" = ANY(a.tags)");
        }

        if let Some(author) = filter.author {
            builder.push(" AND a.author_id = ");
            builder.push_bind(i64::from(author));
        }

        builder.push(" ORDER BY a.created_at DESC, a.id DESC LIMIT ");
        builder.push_bind(i64::from(limit));

        let rows = builder
            .build_query_as::<ArticleListingRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleListing::try_from).collect()
    }

    async fn list_comments(&self, id: ArticleId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, article_id, user_id, body, created_at
             FROM article_comments WHERE article_id = $1
             ORDER BY created_at, id",
        )
        .bind(i64::from(id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn list_likes(&self, id: ArticleId) -> DomainResult<Vec<UserId>> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT user_id FROM article_likes WHERE article_id = $1
             ORDER BY created_at, user_id",
        )
        .bind(i64::from(id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ids.into_iter().map(UserId::new).collect()
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            subtitle,
            content,
            tags,
            author_id,
            published,
            created_at,
        } = article;
        let tags: Vec<String> = tags.into();

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, subtitle, content, tags, author_id, published, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {ARTICLE_COLUMNS}",
        ))
        .bind(title.as_str())
        .bind(subtitle)
        .bind(content.as_str())
        .bind(tags)
        .bind(i64::from(author_id))
        .bind(published)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, patch: ArticlePatch) -> DomainResult<Article> {
        let ArticlePatch {
            id,
            title,
            subtitle,
            content,
            tags,
            published,
        } = patch;

        // `id = id` anchors the SET clause so any subset of fields appends
        // uniformly; author_id, views, and created_at are never listed.
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE articles SET id = id");

        if let Some(title) = title {
            let title_str: String = title.into();
            builder.push(", title = ");
            builder.push_bind(title_str);
        }

        if let Some(subtitle) = subtitle {
            builder.push(", subtitle = ");
            builder.push_bind(subtitle);
        }

        if let Some(content) = content {
            let content_str: String = content.into();
            builder.push(", content = ");
            builder.push_bind(content_str);
        }

        if let Some(tags) = tags {
            let tags: Vec<String> = tags.into();
            builder.push(", tags = ");
            builder.push_bind(tags);
        }

        if let Some(published) = published {
            builder.push(", published = ");
            builder.push_bind(published);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(&format!(" RETURNING {ARTICLE_COLUMNS}"));

        let maybe_row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[derive(Debug, FromRow)]
struct ToggleRow {
    likes: i64,
    liked: bool,
}

#[async_trait]
impl ArticleEngagementRepository for PostgresArticleEngagementRepository {
    async fn record_view(&self, id: ArticleId) -> DomainResult<i64> {
        let views = sqlx::query_scalar::<_, i64>(
            "UPDATE articles SET views = views + 1 WHERE id = $1 RETURNING views",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        views.ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    async fn toggle_like(&self, id: ArticleId, user: UserId) -> DomainResult<LikeToggle> {
        // Delete and insert branches run in one statement over one snapshot:
        // exactly one of them takes effect, and the reported count is the
        // snapshot count adjusted by the branch that fired.
        let row = sqlx::query_as::<_, ToggleRow>(
            "WITH removed AS (
                 DELETE FROM article_likes
                  WHERE article_id = $1 AND user_id = $2
                  RETURNING user_id
             ), added AS (
                 INSERT INTO article_likes (article_id, user_id)
                 SELECT $1, $2
                  WHERE NOT EXISTS (
                      SELECT 1 FROM article_likes
                       WHERE article_id = $1 AND user_id = $2
                  )
                 ON CONFLICT (article_id, user_id) DO NOTHING
                 RETURNING user_id
             )
             SELECT (SELECT count(*) FROM article_likes WHERE article_id = $1)
                  + (SELECT count(*) FROM added)
                  - (SELECT count(*) FROM removed) AS likes,
                    EXISTS (SELECT 1 FROM added) AS liked",
        )
        .bind(i64::from(id))
        .bind(i64::from(user))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(LikeToggle {
            likes: row.likes,
            liked: row.liked,
        })
    }

    async fn append_comment(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            article_id,
            user_id,
            text,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO article_comments (article_id, user_id, body, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, article_id, user_id, body, created_at",
        )
        .bind(i64::from(article_id))
        .bind(i64::from(user_id))
        .bind(text.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }
}
