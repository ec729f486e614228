//! Handlers for the pull request lifecycle: create, merge, reassign.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use revassign_core::pull_request::{CreatePullRequest, MergePullRequest, ReassignReviewer};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::query::PullRequestQuery;
use crate::response::PullRequestResponse;
use crate::state::AppState;

/// POST /pullRequest/create
///
/// Create an OPEN pull request and auto-assign up to two reviewers from the
/// author's active teammates.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePullRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let pr = state.reviews.create_pull_request(&input).await?;

    Ok((StatusCode::CREATED, Json(PullRequestResponse { pr })))
}

/// POST /pullRequest/merge
///
/// Repeat merges return the already merged pull request.
pub async fn merge(
    State(state): State<AppState>,
    AppJson(input): AppJson<MergePullRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let pr = state
        .reviews
        .merge_pull_request(&input.pull_request_id)
        .await?;
    Ok(Json(PullRequestResponse { pr }))
}

/// POST /pullRequest/reassign
///
/// Responds with `{ "pr": ..., "replaced_by": "<new reviewer>" }`.
pub async fn reassign(
    State(state): State<AppState>,
    AppJson(input): AppJson<ReassignReviewer>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let outcome = state
        .reviews
        .reassign_reviewer(&input.pull_request_id, &input.old_user_id)
        .await?;
    Ok(Json(outcome))
}

/// GET /pullRequest/get?pull_request_id=
pub async fn get(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PullRequestQuery>,
) -> AppResult<impl IntoResponse> {
    params.validate()?;

    let pr = state.reviews.get_pull_request(&params.pull_request_id).await?;
    Ok(Json(PullRequestResponse { pr }))
}
