use std::sync::Arc;

use anyhow::Result;
use storygrid::application::{
    ports::{security::AuthGuard, time::Clock},
    services::ApplicationServices,
};
use storygrid::config::AppConfig;
use storygrid::domain::{
    article::{ArticleEngagementRepository, ArticleReadRepository, ArticleWriteRepository},
    user::UserDirectory,
};
use storygrid::infrastructure::{
    database,
    repositories::{
        PostgresArticleEngagementRepository, PostgresArticleReadRepository,
        PostgresArticleWriteRepository, PostgresUserDirectory,
    },
    security::HmacTokenGuard,
    time::SystemClock,
};
use storygrid::presentation::http::{routes::build_router, state::HttpState};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_engagement_repo: Arc<dyn ArticleEngagementRepository> =
        Arc::new(PostgresArticleEngagementRepository::new(pool.clone()));
    let users: Arc<dyn UserDirectory> = Arc::new(PostgresUserDirectory::new(pool.clone()));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let guard = HmacTokenGuard::new(config.token_secret(), Arc::clone(&clock))
        .map_err(|err| anyhow::anyhow!(err.to_string()))?;
    let auth_guard: Arc<dyn AuthGuard> = Arc::new(guard);

    let services = Arc::new(ApplicationServices::new(
        article_read_repo,
        article_write_repo,
        article_engagement_repo,
        users,
        auth_guard,
        clock,
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
