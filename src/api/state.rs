//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::auth::TokenService;
use crate::infrastructure::news::NewsFeedService;
use crate::infrastructure::user::UserService;

/// Shared services handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub token_service: Arc<dyn TokenService>,
    pub news_service: Arc<NewsFeedService>,
}

impl AppState {
    pub fn new(
        user_service: Arc<UserService>,
        token_service: Arc<dyn TokenService>,
        news_service: Arc<NewsFeedService>,
    ) -> Self {
        Self {
            user_service,
            token_service,
            news_service,
        }
    }
}
