//! Handlers for team creation and lookup.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use revassign_core::team::Team;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::query::TeamQuery;
use crate::response::TeamResponse;
use crate::state::AppState;

/// POST /team/add
///
/// Create a team and upsert its members. Existing users move to this team.
pub async fn add_team(
    State(state): State<AppState>,
    AppJson(input): AppJson<Team>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let team = state.reviews.add_team(&input).await?;

    Ok((StatusCode::CREATED, Json(TeamResponse { team })))
}

/// GET /team/get?team_name=
pub async fn get_team(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<TeamQuery>,
) -> AppResult<impl IntoResponse> {
    params.validate()?;

    let team = state.reviews.get_team(&params.team_name).await?;
    Ok(Json(team))
}
