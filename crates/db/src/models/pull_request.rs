//! Pull request row models.

use revassign_core::pull_request::{PrStatus, PullRequest, PullRequestShort};
use revassign_core::types::Timestamp;
use sqlx::FromRow;

/// Row from the `pull_requests` table. Reviewers live in a separate table.
#[derive(Debug, Clone, FromRow)]
pub struct PullRequestRow {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: String,
    pub created_at: Timestamp,
    pub merged_at: Option<Timestamp>,
}

impl PullRequestRow {
    /// Combine the row with its reviewer ids.
    ///
    /// Fails only if the stored status is outside the CHECK constraint.
    pub fn into_pull_request(self, reviewers: Vec<String>) -> Result<PullRequest, String> {
        Ok(PullRequest {
            status: self.status.parse::<PrStatus>()?,
            pull_request_id: self.pull_request_id,
            pull_request_name: self.pull_request_name,
            author_id: self.author_id,
            assigned_reviewers: reviewers,
            created_at: self.created_at,
            merged_at: self.merged_at,
        })
    }
}

/// Projection used by the per-user review listing.
#[derive(Debug, Clone, FromRow)]
pub struct PullRequestShortRow {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: String,
}

impl PullRequestShortRow {
    pub fn into_short(self) -> Result<PullRequestShort, String> {
        Ok(PullRequestShort {
            status: self.status.parse::<PrStatus>()?,
            pull_request_id: self.pull_request_id,
            pull_request_name: self.pull_request_name,
            author_id: self.author_id,
        })
    }
}
