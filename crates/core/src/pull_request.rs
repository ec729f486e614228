//! Pull request entities, lifecycle status, and request bodies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::Timestamp;

/// Pull request lifecycle. `Open -> Merged` happens at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PrStatus {
    Open,
    Merged,
}

impl PrStatus {
    /// Value stored in `pull_requests.status`.
    pub fn as_str(self) -> &'static str {
        match self {
            PrStatus::Open => "OPEN",
            PrStatus::Merged => "MERGED",
        }
    }
}

impl fmt::Display for PrStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(PrStatus::Open),
            "MERGED" => Ok(PrStatus::Merged),
            other => Err(format!("unknown pull request status '{other}'")),
        }
    }
}

/// Short form used by the user review listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestShort {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PrStatus,
}

/// A pull request with its currently assigned reviewers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PrStatus,
    pub assigned_reviewers: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
    #[serde(rename = "mergedAt")]
    pub merged_at: Option<Timestamp>,
}

impl PullRequest {
    pub fn is_merged(&self) -> bool {
        self.status == PrStatus::Merged
    }

    pub fn short(&self) -> PullRequestShort {
        PullRequestShort {
            pull_request_id: self.pull_request_id.clone(),
            pull_request_name: self.pull_request_name.clone(),
            author_id: self.author_id.clone(),
            status: self.status,
        }
    }
}

/// Body of `POST /pullRequest/create`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePullRequest {
    #[validate(length(min = 1, message = "pull_request_id is required"))]
    pub pull_request_id: String,
    #[validate(length(min = 1, message = "pull_request_name is required"))]
    pub pull_request_name: String,
    #[validate(length(min = 1, message = "author_id is required"))]
    pub author_id: String,
}

/// Body of `POST /pullRequest/merge`.
#[derive(Debug, Deserialize, Validate)]
pub struct MergePullRequest {
    #[validate(length(min = 1, message = "pull_request_id is required"))]
    pub pull_request_id: String,
}

/// Body of `POST /pullRequest/reassign`.
#[derive(Debug, Deserialize, Validate)]
pub struct ReassignReviewer {
    #[validate(length(min = 1, message = "pull_request_id is required"))]
    pub pull_request_id: String,
    #[validate(length(min = 1, message = "old_user_id is required"))]
    pub old_user_id: String,
}

/// Result of a successful reassignment.
#[derive(Debug, Clone, Serialize)]
pub struct Reassignment {
    pub pr: PullRequest,
    pub replaced_by: String,
}
