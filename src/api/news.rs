//! News feed endpoint

use axum::{extract::State, routing::get, Router};
use serde::Serialize;

use crate::api::middleware::AuthUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::news::Article;

/// Create the news router
pub fn create_news_router() -> Router<AppState> {
    Router::new().route("/", get(get_news))
}

#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub news: Vec<Article>,
}

/// GET /news
///
/// Serves the preference-filtered feed for the authenticated user. Upstream
/// failures come back as a 200 with an empty list; only an unknown user or
/// a failing store produce error statuses.
pub async fn get_news(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<NewsResponse>, ApiError> {
    let outcome = state.news_service.fetch_feed(&auth.email).await?;

    Ok(Json(NewsResponse {
        news: outcome.into_articles(),
    }))
}
