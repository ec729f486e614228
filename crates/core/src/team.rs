//! Team and user entities.
//!
//! A [`Team`] owns its member list. [`User::team_name`] is a lookup field
//! only; it is kept consistent by the repository write paths and is never
//! updated independently.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user as listed inside a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TeamMember {
    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id: String,
    #[serde(rename = "username")]
    #[validate(length(min = 1, message = "username is required"))]
    pub user_name: String,
    pub is_active: bool,
}

/// A team with its current members.
///
/// Also the request body of `POST /team/add`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Team {
    #[validate(length(min = 1, message = "team_name is required"))]
    pub team_name: String,
    #[serde(default)]
    #[validate(nested)]
    pub members: Vec<TeamMember>,
}

/// A user together with the team it belongs to, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    #[serde(rename = "username")]
    pub user_name: String,
    pub team_name: Option<String>,
    pub is_active: bool,
}

impl User {
    /// Project the user onto its team-member view.
    pub fn as_member(&self) -> TeamMember {
        TeamMember {
            user_id: self.user_id.clone(),
            user_name: self.user_name.clone(),
            is_active: self.is_active,
        }
    }
}

/// Body of `POST /users/setIsActive`.
#[derive(Debug, Deserialize, Validate)]
pub struct SetUserActiveRequest {
    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id: String,
    pub is_active: bool,
}
