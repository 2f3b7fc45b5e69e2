//! User API routes

use super::json_or_default;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use resqlink_shared::{CreateUserRequest, CreateUserResponse};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/user", post(create_user))
}

/// POST /user - Create a user with a default profile and health card
async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<Json<CreateUserResponse>> {
    let req = json_or_default(payload)?;
    let created = UserService::create_user(state.db(), state.atomic_writes(), req).await?;
    Ok(Json(created))
}
