//! User row model.

use revassign_core::team::{TeamMember, User};
use sqlx::FromRow;

/// Row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub user_id: String,
    pub user_name: String,
    pub team_name: Option<String>,
    pub is_active: bool,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            user_id: row.user_id,
            user_name: row.user_name,
            team_name: row.team_name,
            is_active: row.is_active,
        }
    }
}

impl From<UserRow> for TeamMember {
    fn from(row: UserRow) -> Self {
        TeamMember {
            user_id: row.user_id,
            user_name: row.user_name,
            is_active: row.is_active,
        }
    }
}
