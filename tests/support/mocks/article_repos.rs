// tests/support/mocks/article_repos.rs
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use storygrid::domain::article::{
    Article, ArticleEngagementRepository, ArticleFilter, ArticleId, ArticleListing, ArticlePatch,
    ArticleReadRepository, ArticleWriteRepository, Comment, CommentId, LikeToggle, NewArticle,
    NewComment,
};
use storygrid::domain::errors::{DomainError, DomainResult};
use storygrid::domain::user::UserId;

/// In-memory article store. Every operation holds the relevant lock for its
/// whole duration, which makes the view increment, like flip, and comment
/// append naturally atomic, matching the store contract.
#[derive(Default)]
pub struct InMemoryArticleStore {
    articles: Mutex<BTreeMap<i64, Article>>,
    comments: Mutex<Vec<Comment>>,
    likes: Mutex<Vec<(i64, i64)>>,
    next_article_id: AtomicI64,
    next_comment_id: AtomicI64,
}

impl InMemoryArticleStore {
    pub fn article(&self, id: i64) -> Option<Article> {
        self.articles.lock().unwrap().get(&id).cloned()
    }

    pub fn article_count(&self) -> usize {
        self.articles.lock().unwrap().len()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.lock().unwrap().len()
    }

    pub fn like_count(&self) -> usize {
        self.likes.lock().unwrap().len()
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.articles.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn list(&self, filter: &ArticleFilter, limit: u32) -> DomainResult<Vec<ArticleListing>> {
        let articles = self.articles.lock().unwrap();
        let comments = self.comments.lock().unwrap();
        let likes = self.likes.lock().unwrap();

        let mut matches: Vec<Article> = articles
            .values()
            .filter(|article| article.published == filter.published)
            .filter(|article| {
                filter
                    .tag
                    .as_deref()
                    .is_none_or(|tag| article.tags.contains(tag))
            })
            .filter(|article| filter.author.is_none_or(|author| article.author_id == author))
            .cloned()
            .collect();

        matches.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        matches.truncate(limit as usize);

        Ok(matches
            .into_iter()
            .map(|article| {
                let id = i64::from(article.id);
                ArticleListing {
                    like_count: likes.iter().filter(|(a, _)| *a == id).count() as i64,
                    comment_count: comments
                        .iter()
                        .filter(|c| i64::from(c.article_id) == id)
                        .count() as i64,
                    article,
                }
            })
            .collect())
    }

    async fn list_comments(&self, id: ArticleId) -> DomainResult<Vec<Comment>> {
        let mut thread: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.article_id == id)
            .cloned()
            .collect();
        thread.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| i64::from(a.id).cmp(&i64::from(b.id)))
        });
        Ok(thread)
    }

    async fn list_likes(&self, id: ArticleId) -> DomainResult<Vec<UserId>> {
        Ok(self
            .likes
            .lock()
            .unwrap()
            .iter()
            .filter(|(a, _)| *a == i64::from(id))
            .map(|(_, u)| UserId::new(*u).unwrap())
            .collect())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let id = self.next_article_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Article {
            id: ArticleId::new(id).unwrap(),
            title: article.title,
            subtitle: article.subtitle,
            content: article.content,
            tags: article.tags,
            author_id: article.author_id,
            published: article.published,
            views: 0,
            created_at: article.created_at,
        };
        self.articles.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, patch: ArticlePatch) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .get_mut(&i64::from(patch.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if let Some(title) = patch.title {
            article.title = title;
        }
        if let Some(subtitle) = patch.subtitle {
            article.subtitle = subtitle;
        }
        if let Some(content) = patch.content {
            article.content = content;
        }
        if let Some(tags) = patch.tags {
            article.tags = tags;
        }
        if let Some(published) = patch.published {
            article.published = published;
        }

        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let raw = i64::from(id);
        let removed = self.articles.lock().unwrap().remove(&raw);
        if removed.is_none() {
            return Err(DomainError::NotFound("article not found".into()));
        }
        self.comments
            .lock()
            .unwrap()
            .retain(|c| i64::from(c.article_id) != raw);
        self.likes.lock().unwrap().retain(|(a, _)| *a != raw);
        Ok(())
    }
}

#[async_trait]
impl ArticleEngagementRepository for InMemoryArticleStore {
    async fn record_view(&self, id: ArticleId) -> DomainResult<i64> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.views += 1;
        Ok(article.views)
    }

    async fn toggle_like(&self, id: ArticleId, user: UserId) -> DomainResult<LikeToggle> {
        let raw = i64::from(id);
        if !self.articles.lock().unwrap().contains_key(&raw) {
            return Err(DomainError::NotFound("article not found".into()));
        }

        let mut likes = self.likes.lock().unwrap();
        let entry = (raw, i64::from(user));
        let liked = if let Some(pos) = likes.iter().position(|e| *e == entry) {
            likes.remove(pos);
            false
        } else {
            likes.push(entry);
            true
        };

        Ok(LikeToggle {
            likes: likes.iter().filter(|(a, _)| *a == raw).count() as i64,
            liked,
        })
    }

    async fn append_comment(&self, comment: NewComment) -> DomainResult<Comment> {
        if !self
            .articles
            .lock()
            .unwrap()
            .contains_key(&i64::from(comment.article_id))
        {
            return Err(DomainError::NotFound("article not found".into()));
        }

        let id = self.next_comment_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Comment {
            id: CommentId::new(id).unwrap(),
            article_id: comment.article_id,
            user_id: comment.user_id,
            text: comment.text,
            created_at: comment.created_at,
        };
        self.comments.lock().unwrap().push(stored.clone());
        Ok(stored)
    }
}
