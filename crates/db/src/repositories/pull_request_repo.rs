//! Repository for the `pull_requests` table.

use revassign_core::pull_request::PrStatus;
use sqlx::PgConnection;

use crate::models::pull_request::{PullRequestRow, PullRequestShortRow};

/// Column list for the `pull_requests` table.
const COLUMNS: &str =
    "pull_request_id, pull_request_name, author_id, status, created_at, merged_at";

/// Provides inserts, lookups and the merge transition for pull requests.
pub struct PullRequestRepo;

impl PullRequestRepo {
    /// Insert an OPEN pull request, returning the created row.
    pub async fn create(
        conn: &mut PgConnection,
        pr_id: &str,
        name: &str,
        author_id: &str,
    ) -> Result<PullRequestRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO pull_requests (pull_request_id, pull_request_name, author_id, status) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PullRequestRow>(&query)
            .bind(pr_id)
            .bind(name)
            .bind(author_id)
            .bind(PrStatus::Open.as_str())
            .fetch_one(&mut *conn)
            .await
    }

    pub async fn exists(conn: &mut PgConnection, pr_id: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM pull_requests WHERE pull_request_id = $1)")
            .bind(pr_id)
            .fetch_one(&mut *conn)
            .await
    }

    pub async fn find_by_id(
        conn: &mut PgConnection,
        pr_id: &str,
    ) -> Result<Option<PullRequestRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pull_requests WHERE pull_request_id = $1");
        sqlx::query_as::<_, PullRequestRow>(&query)
            .bind(pr_id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Like [`Self::find_by_id`] but takes a `FOR UPDATE` row lock held until
    /// the transaction ends.
    pub async fn find_by_id_for_update(
        conn: &mut PgConnection,
        pr_id: &str,
    ) -> Result<Option<PullRequestRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pull_requests WHERE pull_request_id = $1 FOR UPDATE"
        );
        sqlx::query_as::<_, PullRequestRow>(&query)
            .bind(pr_id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Set status MERGED. `merged_at` keeps its first value on repeat calls.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn mark_merged(
        conn: &mut PgConnection,
        pr_id: &str,
    ) -> Result<Option<PullRequestRow>, sqlx::Error> {
        let query = format!(
            "UPDATE pull_requests SET \
                status = $2, \
                merged_at = COALESCE(merged_at, NOW()) \
             WHERE pull_request_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PullRequestRow>(&query)
            .bind(pr_id)
            .bind(PrStatus::Merged.as_str())
            .fetch_optional(&mut *conn)
            .await
    }

    /// Pull requests the user is assigned to review, ordered by id.
    pub async fn list_reviewed_by(
        conn: &mut PgConnection,
        user_id: &str,
    ) -> Result<Vec<PullRequestShortRow>, sqlx::Error> {
        sqlx::query_as::<_, PullRequestShortRow>(
            "SELECT pr.pull_request_id, pr.pull_request_name, pr.author_id, pr.status \
             FROM pull_requests pr \
             JOIN pull_request_reviewers r ON r.pull_request_id = pr.pull_request_id \
             WHERE r.user_id = $1 \
             ORDER BY pr.pull_request_id",
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
    }
}
