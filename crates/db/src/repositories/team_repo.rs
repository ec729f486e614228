//! Repository for the `teams` table.

use sqlx::PgConnection;

/// Provides existence checks and inserts for teams.
pub struct TeamRepo;

impl TeamRepo {
    /// Insert a team. Fails with a unique violation on `teams_pkey` if it exists.
    pub async fn create(conn: &mut PgConnection, team_name: &str) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO teams (team_name) VALUES ($1)")
            .bind(team_name)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    pub async fn exists(conn: &mut PgConnection, team_name: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM teams WHERE team_name = $1)")
            .bind(team_name)
            .fetch_one(&mut *conn)
            .await
    }
}
