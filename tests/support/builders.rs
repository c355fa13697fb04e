// tests/support/builders.rs
use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};

use storygrid::application::commands::articles::{ArticleCommandService, CreateArticleCommand};
use storygrid::application::dto::{ArticleDto, AuthenticatedUser};
use storygrid::application::queries::articles::ArticleQueryService;
use storygrid::domain::user::{UserId, UserProfile};

use super::mocks::{FixedClock, InMemoryArticleStore, InMemoryUserDirectory};

pub struct TestContext {
    pub store: Arc<InMemoryArticleStore>,
    pub clock: Arc<FixedClock>,
    pub commands: ArticleCommandService,
    pub queries: ArticleQueryService,
}

pub fn context(profiles: impl IntoIterator<Item = UserProfile>) -> TestContext {
    let store = Arc::new(InMemoryArticleStore::default());
    let users = Arc::new(InMemoryUserDirectory::with_profiles(profiles));
    let clock = Arc::new(FixedClock::default());

    let commands = ArticleCommandService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        users.clone(),
        clock.clone(),
    );
    let queries = ArticleQueryService::new(store.clone(), store.clone(), users.clone());

    TestContext {
        store,
        clock,
        commands,
        queries,
    }
}

pub fn profile(id: i64, name: &str) -> UserProfile {
    UserProfile {
        id: UserId::new(id).unwrap(),
        name: name.to_string(),
        email: format!("{name}@example.com"),
        avatar: None,
    }
}

pub fn actor(id: i64) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        expires_at: Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap() + Duration::hours(1),
    }
}

pub async fn seed_article(
    ctx: &TestContext,
    author: i64,
    title: &str,
    published: bool,
) -> ArticleDto {
    ctx.commands
        .create_article(
            &actor(author),
            CreateArticleCommand::builder()
                .title(title)
                .content("some content")
                .published(published)
                .build(),
        )
        .await
        .unwrap()
}
