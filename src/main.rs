//! skill-service — HTTP server for skill detection.
//!
//! See [`skill_service::config`] for the environment variables it reads.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skill_service::{build_router, AppState, ServiceConfig, SkillMatcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ServiceConfig::from_env()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting skill service");

    let matcher = SkillMatcher::new()?;
    tracing::info!(
        vocabulary = matcher.vocabulary().len(),
        "Skill matcher ready"
    );

    let app = build_router(AppState::new(matcher));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;
    tracing::info!("skill-service listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
