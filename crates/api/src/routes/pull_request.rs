//! Route definitions for the pull request lifecycle.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pull_request;
use crate::state::AppState;

/// Routes mounted at `/pullRequest`.
///
/// ```text
/// POST   /create     create
/// POST   /merge      merge
/// POST   /reassign   reassign
/// GET    /get        get
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(pull_request::create))
        .route("/merge", post(pull_request::merge))
        .route("/reassign", post(pull_request::reassign))
        .route("/get", get(pull_request::get))
}
