//! Domain operations over a [`ReviewStore`].
//!
//! A [`ReviewRepository`] borrows a store that is already bound to an open
//! transaction. It checks preconditions, runs the assignment policy and
//! composes entities; committing or rolling back is the caller's job.

use crate::assignment::{self, RandomSource, INITIAL_REVIEWER_COUNT};
use crate::error::{CoreError, StoreError};
use crate::pull_request::{CreatePullRequest, PullRequest, PullRequestShort, Reassignment};
use crate::store::ReviewStore;
use crate::team::{Team, User};

/// Domain repository bound to one transaction.
pub struct ReviewRepository<'a, S> {
    store: &'a mut S,
    random: &'a dyn RandomSource,
}

impl<'a, S: ReviewStore> ReviewRepository<'a, S> {
    pub fn new(store: &'a mut S, random: &'a dyn RandomSource) -> Self {
        Self { store, random }
    }

    // -----------------------------------------------------------------------
    // Teams and users
    // -----------------------------------------------------------------------

    /// Create a team and upsert its members.
    pub async fn add_team_with_members(&mut self, team: &Team) -> Result<Team, CoreError> {
        if self.store.team_exists(&team.team_name).await? {
            return Err(CoreError::TeamExists(team.team_name.clone()));
        }

        self.store
            .insert_team(&team.team_name)
            .await
            .map_err(|e| match e {
                StoreError::UniqueViolation { .. } => CoreError::TeamExists(team.team_name.clone()),
                other => other.into(),
            })?;

        for member in &team.members {
            self.store.upsert_member(member, &team.team_name).await?;
        }

        let members = self.store.team_members(&team.team_name).await?;
        tracing::info!(team = %team.team_name, members = members.len(), "Team created");

        Ok(Team {
            team_name: team.team_name.clone(),
            members,
        })
    }

    pub async fn get_team_with_members(&mut self, team_name: &str) -> Result<Team, CoreError> {
        if !self.store.team_exists(team_name).await? {
            return Err(CoreError::not_found("team", team_name));
        }

        let members = self.store.team_members(team_name).await?;
        Ok(Team {
            team_name: team_name.to_string(),
            members,
        })
    }

    pub async fn set_user_active(
        &mut self,
        user_id: &str,
        is_active: bool,
    ) -> Result<User, CoreError> {
        let user = self
            .store
            .set_user_active(user_id, is_active)
            .await?
            .ok_or_else(|| CoreError::not_found("user", user_id))?;

        tracing::info!(user_id, is_active, "User activity updated");
        Ok(user)
    }

    /// Pull requests the user is assigned to review.
    pub async fn get_user_reviews(
        &mut self,
        user_id: &str,
    ) -> Result<Vec<PullRequestShort>, CoreError> {
        if self.store.find_user(user_id).await?.is_none() {
            return Err(CoreError::not_found("user", user_id));
        }
        Ok(self.store.reviews_for_user(user_id).await?)
    }

    // -----------------------------------------------------------------------
    // Pull requests
    // -----------------------------------------------------------------------

    /// Create an OPEN pull request and assign its initial reviewers.
    pub async fn create_pull_request(
        &mut self,
        input: &CreatePullRequest,
    ) -> Result<PullRequest, CoreError> {
        let pr_id = input.pull_request_id.as_str();

        if self.store.pull_request_exists(pr_id).await? {
            return Err(CoreError::PrExists(pr_id.to_string()));
        }

        let author = self
            .store
            .find_user(&input.author_id)
            .await?
            .ok_or_else(|| CoreError::not_found("user", &input.author_id))?;

        let mut pr = self
            .store
            .insert_pull_request(pr_id, &input.pull_request_name, &author.user_id)
            .await
            .map_err(|e| match e {
                StoreError::UniqueViolation { .. } => CoreError::PrExists(pr_id.to_string()),
                other => other.into(),
            })?;

        pr.assigned_reviewers = self.assign_initial_reviewers(pr_id, &author).await?;

        tracing::info!(
            pr_id,
            author_id = %author.user_id,
            reviewers = ?pr.assigned_reviewers,
            "Pull request created"
        );
        Ok(pr)
    }

    /// Pick and persist up to [`INITIAL_REVIEWER_COUNT`] reviewers from the
    /// author's active teammates.
    ///
    /// An author without a team, or a team without other active members,
    /// yields an empty list.
    pub async fn assign_initial_reviewers(
        &mut self,
        pr_id: &str,
        author: &User,
    ) -> Result<Vec<String>, CoreError> {
        let Some(team_name) = author.team_name.as_deref() else {
            tracing::debug!(pr_id, author_id = %author.user_id, "Author has no team");
            return Ok(Vec::new());
        };

        let excluded = [author.user_id.clone()];
        let pool = self
            .store
            .active_teammates_excluding(team_name, &excluded)
            .await?;
        let reviewers =
            assignment::select_reviewers(&pool, &excluded, INITIAL_REVIEWER_COUNT, self.random);

        for reviewer in &reviewers {
            self.store.add_reviewer(pr_id, reviewer).await?;
        }

        if reviewers.is_empty() {
            tracing::debug!(pr_id, team = team_name, "No eligible reviewers");
        }
        Ok(reviewers)
    }

    /// Mark a pull request MERGED.
    ///
    /// Merging an already merged pull request returns it unchanged.
    pub async fn merge_pull_request(&mut self, pr_id: &str) -> Result<PullRequest, CoreError> {
        let pr = self
            .store
            .lock_pull_request(pr_id)
            .await?
            .ok_or_else(|| CoreError::not_found("PR", pr_id))?;

        if pr.is_merged() {
            tracing::debug!(pr_id, "Pull request already merged");
            return Ok(pr);
        }

        let merged = self
            .store
            .mark_merged(pr_id)
            .await?
            .ok_or_else(|| CoreError::not_found("PR", pr_id))?;

        tracing::info!(pr_id, "Pull request merged");
        Ok(merged)
    }

    /// Replace `old_user_id` on an open pull request with a random active
    /// teammate of the old reviewer.
    pub async fn reassign_reviewer(
        &mut self,
        pr_id: &str,
        old_user_id: &str,
    ) -> Result<Reassignment, CoreError> {
        // Lock first so concurrent reassignments and merges on this PR queue
        // behind us. Locking a missing row is a no-op.
        let pr = self.store.lock_pull_request(pr_id).await?;

        if !self.store.is_reviewer(pr_id, old_user_id).await? {
            return Err(CoreError::NotAssigned {
                pr_id: pr_id.to_string(),
                user_id: old_user_id.to_string(),
            });
        }

        let mut pr = pr.ok_or_else(|| CoreError::not_found("PR", pr_id))?;
        if pr.is_merged() {
            return Err(CoreError::PrMerged(pr_id.to_string()));
        }

        let old = self
            .store
            .find_user(old_user_id)
            .await?
            .ok_or_else(|| CoreError::not_found("user", old_user_id))?;
        let Some(team_name) = old.team_name.as_deref() else {
            return Err(CoreError::NoCandidate(pr_id.to_string()));
        };

        let mut excluded = Vec::with_capacity(pr.assigned_reviewers.len() + 1);
        excluded.push(pr.author_id.clone());
        excluded.extend(pr.assigned_reviewers.iter().cloned());

        let pool = self
            .store
            .active_teammates_excluding(team_name, &excluded)
            .await?;
        let new_user_id = assignment::select_replacement(&pool, &excluded, self.random)
            .ok_or_else(|| CoreError::NoCandidate(pr_id.to_string()))?;

        self.store.remove_reviewer(pr_id, old_user_id).await?;
        self.store.add_reviewer(pr_id, &new_user_id).await?;
        pr.assigned_reviewers = self.store.reviewers(pr_id).await?;

        tracing::info!(
            pr_id,
            old_user_id,
            new_user_id = %new_user_id,
            "Reviewer reassigned"
        );

        Ok(Reassignment {
            pr,
            replaced_by: new_user_id,
        })
    }

    pub async fn get_pull_request(&mut self, pr_id: &str) -> Result<PullRequest, CoreError> {
        self.store
            .find_pull_request(pr_id)
            .await?
            .ok_or_else(|| CoreError::not_found("PR", pr_id))
    }

    pub async fn get_reviewers(&mut self, pr_id: &str) -> Result<Vec<String>, CoreError> {
        if !self.store.pull_request_exists(pr_id).await? {
            return Err(CoreError::not_found("PR", pr_id));
        }
        Ok(self.store.reviewers(pr_id).await?)
    }
}
