use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware;
use super::news;
use super::state::AppState;
use super::users;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .nest("/users", users::create_users_router())
        .nest("/news", news::create_news_router())
        .layer(axum::middleware::from_fn(middleware::request_logging))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::news::MockNewsProvider;
    use crate::domain::user::UserRepository;
    use crate::infrastructure::auth::{JwtConfig, JwtService, TokenService};
    use crate::infrastructure::cache::InMemoryFeedCache;
    use crate::infrastructure::news::NewsFeedService;
    use crate::infrastructure::user::{Argon2Hasher, InMemoryUserRepository, UserService};

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    const TEST_SECRET: &str = "router-test-secret";

    fn test_state(provider: Arc<MockNewsProvider>) -> AppState {
        let repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let user_service = Arc::new(UserService::new(
            repository.clone(),
            Arc::new(Argon2Hasher::new()),
        ));
        let token_service: Arc<dyn TokenService> =
            Arc::new(JwtService::new(JwtConfig::new(TEST_SECRET, 1)));
        let news_service = Arc::new(NewsFeedService::new(
            repository,
            provider,
            Arc::new(InMemoryFeedCache::new(Duration::from_secs(600))),
        ));

        AppState::new(user_service, token_service, news_service)
    }

    fn test_app(provider: Arc<MockNewsProvider>) -> Router {
        create_router(test_state(provider))
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    async fn signup(app: &Router, email: &str) {
        let (status, _) = send(
            app,
            Method::POST,
            "/users/signup",
            None,
            Some(json!({"name": "A", "email": email, "password": "pw123456"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    async fn login(app: &Router, email: &str) -> String {
        let (status, body) = send(
            app,
            Method::POST,
            "/users/login",
            None,
            Some(json!({"email": email, "password": "pw123456"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        body["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app(Arc::new(MockNewsProvider::new()));

        let (status, body) = send(&app, Method::GET, "/health", None, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_signup_creates_user() {
        let app = test_app(Arc::new(MockNewsProvider::new()));

        let (status, body) = send(
            &app,
            Method::POST,
            "/users/signup",
            None,
            Some(json!({"name": "A", "email": "a@x.com", "password": "pw123456"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "User created successfully");
    }

    #[tokio::test]
    async fn test_signup_duplicate_email() {
        let app = test_app(Arc::new(MockNewsProvider::new()));
        signup(&app, "a@x.com").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/users/signup",
            None,
            Some(json!({"name": "A", "email": "a@x.com", "password": "pw123456"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "User with this email already exists");
    }

    #[tokio::test]
    async fn test_signup_missing_fields() {
        let app = test_app(Arc::new(MockNewsProvider::new()));

        let (status, body) = send(
            &app,
            Method::POST,
            "/users/signup",
            None,
            Some(json!({"email": "a@x.com"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation error");
        assert_eq!(body["message"], "name, email and password are required");
    }

    #[tokio::test]
    async fn test_login_returns_token() {
        let app = test_app(Arc::new(MockNewsProvider::new()));
        signup(&app, "a@x.com").await;

        let token = login(&app, "a@x.com").await;
        assert!(!token.is_empty());
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let app = test_app(Arc::new(MockNewsProvider::new()));
        signup(&app, "a@x.com").await;

        let (wrong_pw_status, wrong_pw_body) = send(
            &app,
            Method::POST,
            "/users/login",
            None,
            Some(json!({"email": "a@x.com", "password": "wrong_password"})),
        )
        .await;

        let (unknown_status, unknown_body) = send(
            &app,
            Method::POST,
            "/users/login",
            None,
            Some(json!({"email": "nobody@x.com", "password": "pw123456"})),
        )
        .await;

        assert_eq!(wrong_pw_status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
        // No user-existence oracle: byte-identical error shape.
        assert_eq!(wrong_pw_body, unknown_body);
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let app = test_app(Arc::new(MockNewsProvider::new()));

        let (status, body) = send(
            &app,
            Method::POST,
            "/users/login",
            None,
            Some(json!({"email": "a@x.com"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "email and password are required");
    }

    #[tokio::test]
    async fn test_preferences_roundtrip() {
        let app = test_app(Arc::new(MockNewsProvider::new()));
        signup(&app, "a@x.com").await;
        let token = login(&app, "a@x.com").await;

        let (status, body) =
            send(&app, Method::GET, "/users/preferences", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["preferences"], json!([]));

        let (status, body) = send(
            &app,
            Method::PUT,
            "/users/preferences",
            Some(&token),
            Some(json!({"preferences": ["tech", "sports"]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["preferences"], json!(["tech", "sports"]));

        let (status, body) =
            send(&app, Method::GET, "/users/preferences", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["preferences"], json!(["tech", "sports"]));
    }

    #[tokio::test]
    async fn test_preferences_require_auth() {
        let app = test_app(Arc::new(MockNewsProvider::new()));

        let (status, body) = send(&app, Method::GET, "/users/preferences", None, None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Authorization header missing or malformed");
    }

    #[tokio::test]
    async fn test_preferences_rejects_non_array() {
        let app = test_app(Arc::new(MockNewsProvider::new()));
        signup(&app, "a@x.com").await;
        let token = login(&app, "a@x.com").await;

        let (status, body) = send(
            &app,
            Method::PUT,
            "/users/preferences",
            Some(&token),
            Some(json!({"preferences": "tech"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "preferences must be an array");
    }

    #[tokio::test]
    async fn test_news_rejects_garbage_token() {
        let app = test_app(Arc::new(MockNewsProvider::new()));

        let (status, body) = send(&app, Method::GET, "/news", Some("garbage"), None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid or expired token");
    }

    #[tokio::test]
    async fn test_news_serves_and_caches() {
        let provider = Arc::new(
            MockNewsProvider::new().with_articles(vec![json!({"title": "Rust 2.0 released"})]),
        );
        let app = test_app(provider.clone());

        signup(&app, "a@x.com").await;
        let token = login(&app, "a@x.com").await;

        let (status, body) = send(&app, Method::GET, "/news", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["news"][0]["title"], "Rust 2.0 released");

        let (status, body) = send(&app, Method::GET, "/news", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["news"][0]["title"], "Rust 2.0 released");

        // Second request was served from cache.
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_news_degrades_to_empty_list() {
        let provider = Arc::new(MockNewsProvider::new().with_error("upstream down"));
        let app = test_app(provider);

        signup(&app, "a@x.com").await;
        let token = login(&app, "a@x.com").await;

        let (status, body) = send(&app, Method::GET, "/news", Some(&token), None).await;

        // Fail-open: upstream trouble never becomes a 5xx.
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["news"], json!([]));
    }

    #[tokio::test]
    async fn test_news_unknown_identity_is_not_found() {
        let app = test_app(Arc::new(MockNewsProvider::new()));

        // Valid signature, but no record behind the identity.
        let token_service = JwtService::new(JwtConfig::new(TEST_SECRET, 1));
        let token = token_service.generate("ghost@x.com").unwrap();

        let (status, body) = send(&app, Method::GET, "/news", Some(&token), None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");
    }
}
