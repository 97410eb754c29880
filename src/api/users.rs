//! User account endpoints
//!
//! Signup and login are open; the preferences routes require a bearer token.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::middleware::AuthUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::infrastructure::user::SignupRequest;

/// Create the users router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/preferences", get(get_preferences).put(update_preferences))
}

#[derive(Debug, Deserialize)]
pub struct SignupBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// Optional; anything that is not an array of strings is treated as empty
    pub preferences: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePreferencesBody {
    pub preferences: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct PreferencesResponse {
    pub message: String,
    pub preferences: Vec<String>,
}

/// POST /users/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupBody>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let name = body.name.filter(|s| !s.is_empty());
    let email = body.email.filter(|s| !s.is_empty());
    let password = body.password.filter(|s| !s.is_empty());

    let (Some(name), Some(email), Some(password)) = (name, email, password) else {
        return Err(ApiError::validation("name, email and password are required"));
    };

    let preferences = body
        .preferences
        .as_ref()
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    state
        .user_service
        .signup(SignupRequest {
            name,
            email,
            password,
            preferences,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully".to_string(),
        }),
    ))
}

/// POST /users/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = body.email.filter(|s| !s.is_empty());
    let password = body.password.filter(|s| !s.is_empty());

    let (Some(email), Some(password)) = (email, password) else {
        return Err(ApiError::validation("email and password are required"));
    };

    let user = state
        .user_service
        .authenticate(&email, &password)
        .await?
        .ok_or_else(ApiError::invalid_credentials)?;

    let token = state.token_service.generate(user.email())?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}

/// GET /users/preferences
pub async fn get_preferences(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<PreferencesResponse>, ApiError> {
    let user = state
        .user_service
        .find_by_email(&auth.email)
        .await?
        .ok_or_else(ApiError::user_not_found)?;

    Ok(Json(PreferencesResponse {
        message: "Preferences retrieved successfully".to_string(),
        preferences: user.preferences().to_vec(),
    }))
}

/// PUT /users/preferences
pub async fn update_preferences(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<UpdatePreferencesBody>,
) -> Result<Json<PreferencesResponse>, ApiError> {
    let Some(Value::Array(items)) = body.preferences else {
        return Err(ApiError::validation("preferences must be an array"));
    };

    let mut preferences = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(s) => preferences.push(s),
            _ => return Err(ApiError::validation("preferences must be an array of strings")),
        }
    }

    let user = state
        .user_service
        .update_preferences(&auth.email, preferences)
        .await?;

    Ok(Json(PreferencesResponse {
        message: "Preferences updated successfully".to_string(),
        preferences: user.preferences().to_vec(),
    }))
}
