//! In-memory [`ReviewStore`] used by the repository tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;

use crate::error::StoreError;
use crate::pull_request::{PrStatus, PullRequest, PullRequestShort};
use crate::store::{ReviewStore, StoreResult};
use crate::team::{TeamMember, User};

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub teams: Vec<String>,
    pub users: BTreeMap<String, User>,
    pub pull_requests: BTreeMap<String, PullRequest>,
    /// `(pr_id, user_id)` in assignment order.
    pub assignments: Vec<(String, String)>,
    /// Number of `lock_pull_request` calls, to check locking paths.
    pub locks_taken: usize,
}

impl MemoryStore {
    fn with_reviewers(&self, mut pr: PullRequest) -> PullRequest {
        pr.assigned_reviewers = self.reviewers_of(&pr.pull_request_id);
        pr
    }

    fn reviewers_of(&self, pr_id: &str) -> Vec<String> {
        self.assignments
            .iter()
            .filter(|(p, _)| p == pr_id)
            .map(|(_, u)| u.clone())
            .collect()
    }
}

#[async_trait]
impl ReviewStore for MemoryStore {
    async fn team_exists(&mut self, team_name: &str) -> StoreResult<bool> {
        Ok(self.teams.iter().any(|t| t == team_name))
    }

    async fn insert_team(&mut self, team_name: &str) -> StoreResult<()> {
        if self.teams.iter().any(|t| t == team_name) {
            return Err(StoreError::UniqueViolation {
                constraint: "teams_pkey".into(),
            });
        }
        self.teams.push(team_name.to_string());
        Ok(())
    }

    async fn team_members(&mut self, team_name: &str) -> StoreResult<Vec<TeamMember>> {
        Ok(self
            .users
            .values()
            .filter(|u| u.team_name.as_deref() == Some(team_name))
            .map(User::as_member)
            .collect())
    }

    async fn upsert_member(&mut self, member: &TeamMember, team_name: &str) -> StoreResult<()> {
        self.users.insert(
            member.user_id.clone(),
            User {
                user_id: member.user_id.clone(),
                user_name: member.user_name.clone(),
                team_name: Some(team_name.to_string()),
                is_active: member.is_active,
            },
        );
        Ok(())
    }

    async fn find_user(&mut self, user_id: &str) -> StoreResult<Option<User>> {
        Ok(self.users.get(user_id).cloned())
    }

    async fn set_user_active(
        &mut self,
        user_id: &str,
        is_active: bool,
    ) -> StoreResult<Option<User>> {
        Ok(self.users.get_mut(user_id).map(|u| {
            u.is_active = is_active;
            u.clone()
        }))
    }

    async fn active_teammates_excluding(
        &mut self,
        team_name: &str,
        excluded: &[String],
    ) -> StoreResult<Vec<String>> {
        Ok(self
            .users
            .values()
            .filter(|u| u.is_active && u.team_name.as_deref() == Some(team_name))
            .filter(|u| !excluded.contains(&u.user_id))
            .map(|u| u.user_id.clone())
            .collect())
    }

    async fn pull_request_exists(&mut self, pr_id: &str) -> StoreResult<bool> {
        Ok(self.pull_requests.contains_key(pr_id))
    }

    async fn insert_pull_request(
        &mut self,
        pr_id: &str,
        name: &str,
        author_id: &str,
    ) -> StoreResult<PullRequest> {
        if self.pull_requests.contains_key(pr_id) {
            return Err(StoreError::UniqueViolation {
                constraint: "pull_requests_pkey".into(),
            });
        }
        let pr = PullRequest {
            pull_request_id: pr_id.to_string(),
            pull_request_name: name.to_string(),
            author_id: author_id.to_string(),
            status: PrStatus::Open,
            assigned_reviewers: Vec::new(),
            created_at: Utc::now(),
            merged_at: None,
        };
        self.pull_requests.insert(pr_id.to_string(), pr.clone());
        Ok(pr)
    }

    async fn find_pull_request(&mut self, pr_id: &str) -> StoreResult<Option<PullRequest>> {
        Ok(self
            .pull_requests
            .get(pr_id)
            .cloned()
            .map(|pr| self.with_reviewers(pr)))
    }

    async fn lock_pull_request(&mut self, pr_id: &str) -> StoreResult<Option<PullRequest>> {
        self.locks_taken += 1;
        self.find_pull_request(pr_id).await
    }

    async fn mark_merged(&mut self, pr_id: &str) -> StoreResult<Option<PullRequest>> {
        let Some(pr) = self.pull_requests.get_mut(pr_id) else {
            return Ok(None);
        };
        pr.status = PrStatus::Merged;
        pr.merged_at.get_or_insert_with(Utc::now);
        let pr = pr.clone();
        Ok(Some(self.with_reviewers(pr)))
    }

    async fn reviewers(&mut self, pr_id: &str) -> StoreResult<Vec<String>> {
        Ok(self.reviewers_of(pr_id))
    }

    async fn is_reviewer(&mut self, pr_id: &str, user_id: &str) -> StoreResult<bool> {
        Ok(self
            .assignments
            .iter()
            .any(|(p, u)| p == pr_id && u == user_id))
    }

    async fn add_reviewer(&mut self, pr_id: &str, user_id: &str) -> StoreResult<()> {
        if self.is_reviewer(pr_id, user_id).await? {
            return Err(StoreError::UniqueViolation {
                constraint: "pull_request_reviewers_pkey".into(),
            });
        }
        self.assignments
            .push((pr_id.to_string(), user_id.to_string()));
        Ok(())
    }

    async fn remove_reviewer(&mut self, pr_id: &str, user_id: &str) -> StoreResult<bool> {
        let before = self.assignments.len();
        self.assignments
            .retain(|(p, u)| !(p == pr_id && u == user_id));
        Ok(self.assignments.len() < before)
    }

    async fn reviews_for_user(&mut self, user_id: &str) -> StoreResult<Vec<PullRequestShort>> {
        Ok(self
            .pull_requests
            .values()
            .filter(|pr| {
                self.assignments
                    .iter()
                    .any(|(p, u)| *p == pr.pull_request_id && u == user_id)
            })
            .map(PullRequest::short)
            .collect())
    }
}
