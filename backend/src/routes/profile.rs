//! Profile API routes

use super::json_or_default;
use crate::error::{ApiError, ApiResult};
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use resqlink_shared::{Profile, ProfileWithHealthCard, UpsertProfileRequest};

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", post(upsert_profile))
        .route("/profile/:user_id", get(get_profile))
}

/// GET /profile/:user_id - Get a profile with its health card
async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ProfileWithHealthCard>> {
    let profile = ProfileService::get_profile(state.db(), &user_id).await?;
    Ok(Json(profile))
}

/// POST /profile - Create or update a profile
///
/// Returns the stored row; the health card is not expanded here. A body
/// sent without a JSON content type is read as `{}`.
async fn upsert_profile(
    State(state): State<AppState>,
    payload: Result<Json<UpsertProfileRequest>, JsonRejection>,
) -> Result<Json<Profile>, ApiError> {
    let req = json_or_default(payload)?;
    let profile = ProfileService::upsert_profile(state.db(), state.atomic_writes(), req).await?;
    Ok(Json(profile))
}
