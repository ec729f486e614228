//! Query string parameter types.

use serde::Deserialize;
use validator::Validate;

/// `?team_name=` for `GET /team/get`.
#[derive(Debug, Deserialize, Validate)]
pub struct TeamQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "team_name is required"))]
    pub team_name: String,
}

/// `?user_id=` for `GET /users/getReview`.
#[derive(Debug, Deserialize, Validate)]
pub struct UserQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id: String,
}

/// `?pull_request_id=` for `GET /pullRequest/get`.
#[derive(Debug, Deserialize, Validate)]
pub struct PullRequestQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "pull_request_id is required"))]
    pub pull_request_id: String,
}
