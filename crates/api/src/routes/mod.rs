pub mod health;
pub mod pull_request;
pub mod team;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /team/add                      create team with members (POST)
/// /team/get                      team with members (GET ?team_name=)
///
/// /users/setIsActive             toggle reviewer eligibility (POST)
/// /users/getReview               PRs assigned to a user (GET ?user_id=)
///
/// /pullRequest/create            create + auto-assign reviewers (POST)
/// /pullRequest/merge             idempotent merge (POST)
/// /pullRequest/reassign          swap one reviewer (POST)
/// /pullRequest/get               single PR (GET ?pull_request_id=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/team", team::router())
        .nest("/users", users::router())
        .nest("/pullRequest", pull_request::router())
}
