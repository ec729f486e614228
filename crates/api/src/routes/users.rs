use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST   /setIsActive   set_is_active
/// GET    /getReview     get_reviews
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/setIsActive", post(users::set_is_active))
        .route("/getReview", get(users::get_reviews))
}
