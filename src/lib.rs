//! newsdesk
//!
//! A personalized news feed API:
//! - signup/login with JWT bearer tokens
//! - per-user news category preferences
//! - a news feed proxied from NewsAPI, cached per (user, preference set)

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use api::state::AppState;
use domain::user::UserRepository;
use infrastructure::auth::{JwtConfig, JwtService, TokenService};
use infrastructure::cache::InMemoryFeedCache;
use infrastructure::news::{NewsApiClient, NewsFeedService};
use infrastructure::user::{
    ensure_schema, Argon2Hasher, InMemoryUserRepository, PostgresUserRepository, UserService,
};

/// Fixed development-only signing secret. Only ever used behind the explicit
/// `auth.insecure_dev_secret` opt-in.
const INSECURE_DEV_SECRET: &str = "insecure-dev-secret-do-not-use-in-production";

/// Create the application state with all services initialized
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let repository = create_user_repository(config).await?;
    let user_service = Arc::new(UserService::new(
        repository.clone(),
        Arc::new(Argon2Hasher::new()),
    ));

    let token_service = create_token_service(config)?;

    if config.news.api_key.is_none() {
        warn!("news.api_key is not set; /news will serve empty feeds");
    }

    let provider = Arc::new(NewsApiClient::new(
        &config.news.base_url,
        config.news.api_key.clone(),
        Duration::from_secs(config.news.timeout_secs),
    )?);
    let cache = Arc::new(InMemoryFeedCache::new(Duration::from_secs(
        config.news.cache_ttl_secs,
    )));
    let news_service = Arc::new(NewsFeedService::new(repository, provider, cache));

    Ok(AppState::new(user_service, token_service, news_service))
}

async fn create_user_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn UserRepository>> {
    match &config.database.url {
        Some(url) => {
            info!("Connecting to PostgreSQL...");
            let pool = sqlx::PgPool::connect(url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
            ensure_schema(&pool).await?;
            info!("PostgreSQL connection established");

            Ok(Arc::new(PostgresUserRepository::new(pool)))
        }
        None => {
            warn!("database.url is not set; using the in-memory user store (no persistence)");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
    }
}

fn create_token_service(config: &AppConfig) -> anyhow::Result<Arc<dyn TokenService>> {
    let secret = match (&config.auth.jwt_secret, config.auth.insecure_dev_secret) {
        (Some(secret), _) => secret.clone(),
        (None, true) => {
            warn!(
                "auth.insecure_dev_secret is enabled; signing tokens with a fixed \
                 development secret. Never run this in production."
            );
            INSECURE_DEV_SECRET.to_string()
        }
        (None, false) => anyhow::bail!(
            "auth.jwt_secret is not configured. Set APP__AUTH__JWT_SECRET, or enable \
             auth.insecure_dev_secret for local development."
        ),
    };

    Ok(Arc::new(JwtService::new(JwtConfig::new(
        secret,
        config.auth.token_expiration_hours,
    ))))
}
