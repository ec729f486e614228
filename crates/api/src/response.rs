//! Response envelopes.
//!
//! Each endpoint wraps its payload under a fixed key (`team`, `user`, `pr`)
//! so clients can rely on stable field names.

use serde::Serialize;

use revassign_core::pull_request::{PullRequest, PullRequestShort};
use revassign_core::team::{Team, User};

/// `{ "team": ... }`
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub team: Team,
}

/// `{ "user": ... }`
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

/// `{ "pr": ... }`
#[derive(Debug, Serialize)]
pub struct PullRequestResponse {
    pub pr: PullRequest,
}

/// Body of `GET /users/getReview`.
#[derive(Debug, Serialize)]
pub struct UserReviewsResponse {
    pub user_id: String,
    pub pull_requests: Vec<PullRequestShort>,
}
