//! [`ReviewStore`] implementation over a Postgres connection.

use async_trait::async_trait;
use revassign_core::error::StoreError;
use revassign_core::pull_request::{PullRequest, PullRequestShort};
use revassign_core::store::{ReviewStore, StoreResult};
use revassign_core::team::{TeamMember, User};
use sqlx::PgConnection;

use crate::models::pull_request::PullRequestRow;
use crate::repositories::{PullRequestRepo, ReviewerRepo, TeamRepo, UserRepo};

/// PostgreSQL error code for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Classify a sqlx error into the store signal the core understands.
pub fn classify(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return StoreError::UniqueViolation {
                constraint: db_err.constraint().unwrap_or("unknown").to_string(),
            };
        }
    }
    StoreError::Backend(err.to_string())
}

/// Store bound to one connection, normally the coordinator's open transaction.
pub struct PgReviewStore<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgReviewStore<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    async fn with_reviewers(&mut self, row: PullRequestRow) -> StoreResult<PullRequest> {
        let reviewers = ReviewerRepo::list_for_pull_request(self.conn, &row.pull_request_id)
            .await
            .map_err(classify)?;
        row.into_pull_request(reviewers).map_err(StoreError::Backend)
    }

    async fn hydrate(&mut self, row: Option<PullRequestRow>) -> StoreResult<Option<PullRequest>> {
        match row {
            Some(row) => Ok(Some(self.with_reviewers(row).await?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl<'c> ReviewStore for PgReviewStore<'c> {
    async fn team_exists(&mut self, team_name: &str) -> StoreResult<bool> {
        TeamRepo::exists(self.conn, team_name).await.map_err(classify)
    }

    async fn insert_team(&mut self, team_name: &str) -> StoreResult<()> {
        TeamRepo::create(self.conn, team_name).await.map_err(classify)
    }

    async fn team_members(&mut self, team_name: &str) -> StoreResult<Vec<TeamMember>> {
        let rows = UserRepo::list_for_team(self.conn, team_name)
            .await
            .map_err(classify)?;
        Ok(rows.into_iter().map(TeamMember::from).collect())
    }

    async fn upsert_member(&mut self, member: &TeamMember, team_name: &str) -> StoreResult<()> {
        UserRepo::upsert_into_team(self.conn, member, team_name)
            .await
            .map_err(classify)?;
        Ok(())
    }

    async fn find_user(&mut self, user_id: &str) -> StoreResult<Option<User>> {
        let row = UserRepo::find_by_id(self.conn, user_id)
            .await
            .map_err(classify)?;
        Ok(row.map(User::from))
    }

    async fn set_user_active(
        &mut self,
        user_id: &str,
        is_active: bool,
    ) -> StoreResult<Option<User>> {
        let row = UserRepo::set_active(self.conn, user_id, is_active)
            .await
            .map_err(classify)?;
        Ok(row.map(User::from))
    }

    async fn active_teammates_excluding(
        &mut self,
        team_name: &str,
        excluded: &[String],
    ) -> StoreResult<Vec<String>> {
        UserRepo::active_ids_in_team_excluding(self.conn, team_name, excluded)
            .await
            .map_err(classify)
    }

    async fn pull_request_exists(&mut self, pr_id: &str) -> StoreResult<bool> {
        PullRequestRepo::exists(self.conn, pr_id)
            .await
            .map_err(classify)
    }

    async fn insert_pull_request(
        &mut self,
        pr_id: &str,
        name: &str,
        author_id: &str,
    ) -> StoreResult<PullRequest> {
        let row = PullRequestRepo::create(self.conn, pr_id, name, author_id)
            .await
            .map_err(classify)?;
        row.into_pull_request(Vec::new())
            .map_err(StoreError::Backend)
    }

    async fn find_pull_request(&mut self, pr_id: &str) -> StoreResult<Option<PullRequest>> {
        let row = PullRequestRepo::find_by_id(self.conn, pr_id)
            .await
            .map_err(classify)?;
        self.hydrate(row).await
    }

    async fn lock_pull_request(&mut self, pr_id: &str) -> StoreResult<Option<PullRequest>> {
        let row = PullRequestRepo::find_by_id_for_update(self.conn, pr_id)
            .await
            .map_err(classify)?;
        self.hydrate(row).await
    }

    async fn mark_merged(&mut self, pr_id: &str) -> StoreResult<Option<PullRequest>> {
        let row = PullRequestRepo::mark_merged(self.conn, pr_id)
            .await
            .map_err(classify)?;
        self.hydrate(row).await
    }

    async fn reviewers(&mut self, pr_id: &str) -> StoreResult<Vec<String>> {
        ReviewerRepo::list_for_pull_request(self.conn, pr_id)
            .await
            .map_err(classify)
    }

    async fn is_reviewer(&mut self, pr_id: &str, user_id: &str) -> StoreResult<bool> {
        ReviewerRepo::is_assigned(self.conn, pr_id, user_id)
            .await
            .map_err(classify)
    }

    async fn add_reviewer(&mut self, pr_id: &str, user_id: &str) -> StoreResult<()> {
        ReviewerRepo::add(self.conn, pr_id, user_id)
            .await
            .map_err(classify)
    }

    async fn remove_reviewer(&mut self, pr_id: &str, user_id: &str) -> StoreResult<bool> {
        ReviewerRepo::remove(self.conn, pr_id, user_id)
            .await
            .map_err(classify)
    }

    async fn reviews_for_user(&mut self, user_id: &str) -> StoreResult<Vec<PullRequestShort>> {
        let rows = PullRequestRepo::list_reviewed_by(self.conn, user_id)
            .await
            .map_err(classify)?;
        rows.into_iter()
            .map(|row| row.into_short().map_err(StoreError::Backend))
            .collect()
    }
}
