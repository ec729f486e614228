//! Handlers for user activity and review listings.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use revassign_core::team::SetUserActiveRequest;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::query::UserQuery;
use crate::response::{UserResponse, UserReviewsResponse};
use crate::state::AppState;

/// POST /users/setIsActive
pub async fn set_is_active(
    State(state): State<AppState>,
    AppJson(input): AppJson<SetUserActiveRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let user = state
        .reviews
        .set_user_active(&input.user_id, input.is_active)
        .await?;
    Ok(Json(UserResponse { user }))
}

/// GET /users/getReview?user_id=
///
/// Pull requests (open or merged) the user is assigned to review.
pub async fn get_reviews(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<UserQuery>,
) -> AppResult<impl IntoResponse> {
    params.validate()?;

    let pull_requests = state.reviews.get_user_reviews(&params.user_id).await?;
    Ok(Json(UserReviewsResponse {
        user_id: params.user_id,
        pull_requests,
    }))
}
