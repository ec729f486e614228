use axum::routing::{get, post};
use axum::Router;

use crate::handlers::team;
use crate::state::AppState;

/// Routes mounted at `/team`.
///
/// ```text
/// POST   /add    add_team
/// GET    /get    get_team
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add", post(team::add_team))
        .route("/get", get(team::get_team))
}
