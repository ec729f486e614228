//! Repository for the `users` table.

use revassign_core::team::TeamMember;
use sqlx::PgConnection;

use crate::models::user::UserRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "user_id, user_name, team_name, is_active";

/// Provides upserts, lookups and activity updates for users.
pub struct UserRepo;

impl UserRepo {
    /// Create the user or refresh its name and activity, attaching it to
    /// `team_name` either way.
    pub async fn upsert_into_team(
        conn: &mut PgConnection,
        member: &TeamMember,
        team_name: &str,
    ) -> Result<UserRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (user_id, user_name, is_active, team_name) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (user_id) DO UPDATE SET \
                user_name = EXCLUDED.user_name, \
                is_active = EXCLUDED.is_active, \
                team_name = EXCLUDED.team_name \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserRow>(&query)
            .bind(&member.user_id)
            .bind(&member.user_name)
            .bind(member.is_active)
            .bind(team_name)
            .fetch_one(&mut *conn)
            .await
    }

    pub async fn find_by_id(
        conn: &mut PgConnection,
        user_id: &str,
    ) -> Result<Option<UserRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE user_id = $1");
        sqlx::query_as::<_, UserRow>(&query)
            .bind(user_id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Set `is_active`. Returns `None` if no row with the given id exists.
    pub async fn set_active(
        conn: &mut PgConnection,
        user_id: &str,
        is_active: bool,
    ) -> Result<Option<UserRow>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET is_active = $2 WHERE user_id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserRow>(&query)
            .bind(user_id)
            .bind(is_active)
            .fetch_optional(&mut *conn)
            .await
    }

    /// All members of a team ordered by id.
    pub async fn list_for_team(
        conn: &mut PgConnection,
        team_name: &str,
    ) -> Result<Vec<UserRow>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM users WHERE team_name = $1 ORDER BY user_id");
        sqlx::query_as::<_, UserRow>(&query)
            .bind(team_name)
            .fetch_all(&mut *conn)
            .await
    }

    /// Ids of active team members not listed in `excluded`.
    pub async fn active_ids_in_team_excluding(
        conn: &mut PgConnection,
        team_name: &str,
        excluded: &[String],
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT user_id FROM users \
             WHERE team_name = $1 AND is_active AND NOT (user_id = ANY($2)) \
             ORDER BY user_id",
        )
        .bind(team_name)
        .bind(excluded)
        .fetch_all(&mut *conn)
        .await
    }
}
