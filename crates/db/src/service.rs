//! Transaction coordinator.
//!
//! Every public method of [`ReviewService`] opens exactly one transaction,
//! runs one [`ReviewRepository`] operation on it, and commits on success or
//! rolls back on error. A dropped (cancelled) future drops its transaction,
//! which sqlx rolls back.

use std::sync::Arc;

use revassign_core::assignment::RandomSource;
use revassign_core::error::CoreError;
use revassign_core::pull_request::{CreatePullRequest, PullRequest, PullRequestShort, Reassignment};
use revassign_core::repository::ReviewRepository;
use revassign_core::team::{Team, User};
use sqlx::{Postgres, Transaction};

use crate::store::PgReviewStore;
use crate::DbPool;

/// Run `$body` against a fresh repository inside one transaction.
macro_rules! transactional {
    ($self:ident, $op:literal, |$repo:ident| $body:expr) => {{
        let mut tx = $self.begin($op).await?;
        let result = {
            let mut store = PgReviewStore::new(&mut *tx);
            let mut $repo = ReviewRepository::new(&mut store, $self.random.as_ref());
            $body.await
        };
        finish(tx, $op, result).await
    }};
}

/// Entry point for all externally triggered operations.
///
/// Cheap to clone; shares the pool and the randomness source.
#[derive(Clone)]
pub struct ReviewService {
    pool: DbPool,
    random: Arc<dyn RandomSource>,
}

impl ReviewService {
    pub fn new(pool: DbPool, random: Arc<dyn RandomSource>) -> Self {
        Self { pool, random }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    async fn begin(&self, op: &'static str) -> Result<Transaction<'static, Postgres>, CoreError> {
        self.pool.begin().await.map_err(|e| {
            tracing::error!(op, error = %e, "Failed to begin transaction");
            CoreError::Unknown(e.to_string())
        })
    }

    pub async fn add_team(&self, team: &Team) -> Result<Team, CoreError> {
        transactional!(self, "add_team", |repo| repo.add_team_with_members(team))
    }

    pub async fn get_team(&self, team_name: &str) -> Result<Team, CoreError> {
        transactional!(self, "get_team", |repo| repo.get_team_with_members(team_name))
    }

    pub async fn set_user_active(&self, user_id: &str, is_active: bool) -> Result<User, CoreError> {
        transactional!(self, "set_user_active", |repo| repo
            .set_user_active(user_id, is_active))
    }

    pub async fn get_user_reviews(
        &self,
        user_id: &str,
    ) -> Result<Vec<PullRequestShort>, CoreError> {
        transactional!(self, "get_user_reviews", |repo| repo.get_user_reviews(user_id))
    }

    /// Create the pull request and its initial reviewers atomically.
    pub async fn create_pull_request(
        &self,
        input: &CreatePullRequest,
    ) -> Result<PullRequest, CoreError> {
        transactional!(self, "create_pull_request", |repo| repo
            .create_pull_request(input))
    }

    pub async fn merge_pull_request(&self, pr_id: &str) -> Result<PullRequest, CoreError> {
        transactional!(self, "merge_pull_request", |repo| repo.merge_pull_request(pr_id))
    }

    pub async fn reassign_reviewer(
        &self,
        pr_id: &str,
        old_user_id: &str,
    ) -> Result<Reassignment, CoreError> {
        transactional!(self, "reassign_reviewer", |repo| repo
            .reassign_reviewer(pr_id, old_user_id))
    }

    pub async fn get_pull_request(&self, pr_id: &str) -> Result<PullRequest, CoreError> {
        transactional!(self, "get_pull_request", |repo| repo.get_pull_request(pr_id))
    }

    pub async fn get_reviewers(&self, pr_id: &str) -> Result<Vec<String>, CoreError> {
        transactional!(self, "get_reviewers", |repo| repo.get_reviewers(pr_id))
    }
}

/// Commit on `Ok`, roll back on `Err`.
///
/// A rollback failure is logged and the domain error is returned unchanged.
/// A commit failure is reported as [`CoreError::Unknown`]: the change did not
/// persist, so the caller must not see success.
async fn finish<T>(
    tx: Transaction<'static, Postgres>,
    op: &'static str,
    result: Result<T, CoreError>,
) -> Result<T, CoreError> {
    match result {
        Ok(value) => match tx.commit().await {
            Ok(()) => {
                tracing::debug!(op, "Transaction committed");
                Ok(value)
            }
            Err(e) => {
                tracing::error!(op, error = %e, "Commit failed");
                Err(CoreError::Unknown(format!("commit failed: {e}")))
            }
        },
        Err(err) => {
            match tx.rollback().await {
                Ok(()) => tracing::debug!(op, code = err.code(), "Transaction rolled back"),
                Err(e) => tracing::warn!(op, error = %e, "Rollback failed"),
            }
            Err(err)
        }
    }
}
