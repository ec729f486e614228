//! Repository for the `pull_request_reviewers` junction table.

use sqlx::PgConnection;

/// Provides add/remove/list for reviewer assignments.
pub struct ReviewerRepo;

impl ReviewerRepo {
    /// Reviewer ids of a pull request in assignment order.
    pub async fn list_for_pull_request(
        conn: &mut PgConnection,
        pr_id: &str,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT user_id FROM pull_request_reviewers \
             WHERE pull_request_id = $1 \
             ORDER BY assigned_at, user_id",
        )
        .bind(pr_id)
        .fetch_all(&mut *conn)
        .await
    }

    pub async fn is_assigned(
        conn: &mut PgConnection,
        pr_id: &str,
        user_id: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS ( \
                SELECT 1 FROM pull_request_reviewers \
                WHERE pull_request_id = $1 AND user_id = $2 \
             )",
        )
        .bind(pr_id)
        .bind(user_id)
        .fetch_one(&mut *conn)
        .await
    }

    /// Assign a reviewer. A repeat assignment violates the primary key.
    pub async fn add(conn: &mut PgConnection, pr_id: &str, user_id: &str) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO pull_request_reviewers (pull_request_id, user_id) VALUES ($1, $2)")
            .bind(pr_id)
            .bind(user_id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    /// Returns `true` if the assignment was removed.
    pub async fn remove(
        conn: &mut PgConnection,
        pr_id: &str,
        user_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM pull_request_reviewers WHERE pull_request_id = $1 AND user_id = $2",
        )
        .bind(pr_id)
        .bind(user_id)
        .execute(&mut *conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
