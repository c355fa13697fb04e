mod support;

use storygrid::application::commands::articles::{
    AddCommentCommand, CreateArticleCommand, DeleteArticleCommand, ToggleLikeCommand,
    UpdateArticleCommand,
};
use storygrid::application::error::ApplicationError;
use storygrid::application::queries::articles::GetArticleQuery;

use support::{actor, context, profile, seed_article};

fn empty_patch(id: i64) -> UpdateArticleCommand {
    UpdateArticleCommand {
        id,
        title: None,
        subtitle: None,
        content: None,
        tags: None,
        published: None,
    }
}

#[tokio::test]
async fn create_persists_with_defaults() {
    let ctx = context([profile(1, "ursula")]);

    let article = ctx
        .commands
        .create_article(
            &actor(1),
            CreateArticleCommand::builder()
                .title("  First post  ")
                .content("hello world")
                .tags(["rust", "blog", "rust"])
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(article.title, "First post");
    assert_eq!(article.author.id, 1);
    assert_eq!(article.author.name, "ursula");
    assert!(!article.published);
    assert_eq!(article.views, 0);
    assert_eq!(article.tags, vec!["rust", "blog"]);
    assert!(article.likes.is_empty());
    assert!(article.comments.is_empty());
    assert_eq!(ctx.store.article_count(), 1);
}

#[tokio::test]
async fn create_with_empty_title_fails_naming_title_and_persists_nothing() {
    let ctx = context([profile(1, "ursula")]);

    let err = ctx
        .commands
        .create_article(
            &actor(1),
            CreateArticleCommand::builder()
                .title("   ")
                .content("hello world")
                .build(),
        )
        .await
        .unwrap_err();

    match err {
        ApplicationError::Validation { fields } => assert_eq!(fields, vec!["title"]),
        other => panic!("expected validation failure, got {other:?}"),
    }
    assert_eq!(ctx.store.article_count(), 0);
}

#[tokio::test]
async fn create_missing_title_and_content_names_both_fields() {
    let ctx = context([profile(1, "ursula")]);

    let err = ctx
        .commands
        .create_article(&actor(1), CreateArticleCommand::builder().build())
        .await
        .unwrap_err();

    match err {
        ApplicationError::Validation { fields } => {
            assert_eq!(fields, vec!["title", "content"]);
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[tokio::test]
async fn update_by_non_author_is_forbidden_and_leaves_article_unchanged() {
    let ctx = context([profile(1, "ursula"), profile(2, "kim")]);
    let article = seed_article(&ctx, 1, "Original", true).await;

    let mut patch = empty_patch(article.id);
    patch.title = Some("Hijacked".into());
    let err = ctx
        .commands
        .update_article(&actor(2), patch)
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Forbidden(_)));
    let stored = ctx.store.article(article.id).unwrap();
    assert_eq!(stored.title.as_str(), "Original");
}

#[tokio::test]
async fn update_never_changes_author_views_or_created_at() {
    let ctx = context([profile(1, "ursula")]);
    let article = seed_article(&ctx, 1, "Original", true).await;

    // Bump the view counter so we can see it survive the update.
    ctx.queries
        .get_article(GetArticleQuery { id: article.id })
        .await
        .unwrap();

    let mut patch = empty_patch(article.id);
    patch.title = Some("Renamed".into());
    let updated = ctx.commands.update_article(&actor(1), patch).await.unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.author.id, 1);
    assert_eq!(updated.views, 1);
    assert_eq!(updated.created_at, article.created_at);
}

#[tokio::test]
async fn update_applies_only_supplied_fields() {
    let ctx = context([profile(1, "ursula")]);
    let article = ctx
        .commands
        .create_article(
            &actor(1),
            CreateArticleCommand::builder()
                .title("Original")
                .subtitle("A subtitle")
                .content("original content")
                .tags(["rust"])
                .published(true)
                .build(),
        )
        .await
        .unwrap();

    let mut patch = empty_patch(article.id);
    patch.content = Some("revised content".into());
    patch.tags = Some(vec!["axum".into(), "web".into()]);
    let updated = ctx.commands.update_article(&actor(1), patch).await.unwrap();

    assert_eq!(updated.title, "Original");
    assert_eq!(updated.subtitle.as_deref(), Some("A subtitle"));
    assert_eq!(updated.content, "revised content");
    assert_eq!(updated.tags, vec!["axum", "web"]);
    assert!(updated.published);
}

#[tokio::test]
async fn update_with_explicit_null_clears_subtitle_and_false_unpublishes() {
    let ctx = context([profile(1, "ursula")]);
    let article = ctx
        .commands
        .create_article(
            &actor(1),
            CreateArticleCommand::builder()
                .title("Original")
                .subtitle("A subtitle")
                .content("content")
                .published(true)
                .build(),
        )
        .await
        .unwrap();

    let mut patch = empty_patch(article.id);
    patch.subtitle = Some(None);
    patch.published = Some(false);
    let updated = ctx.commands.update_article(&actor(1), patch).await.unwrap();

    assert_eq!(updated.subtitle, None);
    assert!(!updated.published);
}

#[tokio::test]
async fn update_treats_blank_title_and_content_as_omitted() {
    let ctx = context([profile(1, "ursula")]);
    let article = seed_article(&ctx, 1, "Original", true).await;

    let mut patch = empty_patch(article.id);
    patch.title = Some("   ".into());
    patch.content = Some(String::new());
    let updated = ctx.commands.update_article(&actor(1), patch).await.unwrap();

    assert_eq!(updated.title, "Original");
    assert_eq!(updated.content, "some content");
}

#[tokio::test]
async fn update_with_empty_patch_returns_article_untouched() {
    let ctx = context([profile(1, "ursula")]);
    let article = seed_article(&ctx, 1, "Original", true).await;

    let updated = ctx
        .commands
        .update_article(&actor(1), empty_patch(article.id))
        .await
        .unwrap();

    assert_eq!(updated.title, "Original");
    assert_eq!(updated.created_at, article.created_at);
}

#[tokio::test]
async fn update_missing_article_is_not_found() {
    let ctx = context([profile(1, "ursula")]);

    let err = ctx
        .commands
        .update_article(&actor(1), empty_patch(42))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn delete_by_author_removes_whole_aggregate() {
    let ctx = context([profile(1, "ursula"), profile(2, "kim")]);
    let article = seed_article(&ctx, 1, "Doomed", true).await;

    ctx.commands
        .add_comment(
            &actor(2),
            AddCommentCommand {
                id: article.id,
                text: "goodbye".into(),
            },
        )
        .await
        .unwrap();
    ctx.commands
        .toggle_like(&actor(2), ToggleLikeCommand { id: article.id })
        .await
        .unwrap();

    ctx.commands
        .delete_article(&actor(1), DeleteArticleCommand { id: article.id })
        .await
        .unwrap();

    assert_eq!(ctx.store.article_count(), 0);
    assert_eq!(ctx.store.comment_count(), 0);
    assert_eq!(ctx.store.like_count(), 0);
}

#[tokio::test]
async fn delete_by_non_author_is_forbidden_and_article_survives() {
    let ctx = context([profile(1, "ursula"), profile(2, "kim")]);
    let article = seed_article(&ctx, 1, "Sturdy", true).await;

    let err = ctx
        .commands
        .delete_article(&actor(2), DeleteArticleCommand { id: article.id })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Forbidden(_)));
    let fetched = ctx
        .queries
        .get_article(GetArticleQuery { id: article.id })
        .await
        .unwrap();
    assert_eq!(fetched.title, "Sturdy");
}
