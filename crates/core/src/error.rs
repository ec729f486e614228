/// Domain error returned by every repository operation.
///
/// The variants map one-to-one onto the wire error codes returned by
/// [`CoreError::code`].
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("team {0} already exists")]
    TeamExists(String),

    #[error("PR {0} already exists")]
    PrExists(String),

    #[error("user {user_id} is not assigned to PR {pr_id}")]
    NotAssigned { pr_id: String, user_id: String },

    #[error("cannot reassign on merged PR {0}")]
    PrMerged(String),

    #[error("no active replacement candidate in team for PR {0}")]
    NoCandidate(String),

    #[error("{0}")]
    Unknown(String),
}

impl CoreError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::NotFound { .. } => "NOT_FOUND",
            CoreError::TeamExists(_) => "TEAM_EXISTS",
            CoreError::PrExists(_) => "PR_EXISTS",
            CoreError::NotAssigned { .. } => "NOT_ASSIGNED",
            CoreError::PrMerged(_) => "PR_MERGED",
            CoreError::NoCandidate(_) => "NO_CANDIDATE",
            CoreError::Unknown(_) => "UNKNOWN",
        }
    }

    pub(crate) fn not_found(entity: &'static str, id: &str) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Failure signalled by a store adapter.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique or primary-key constraint rejected the write.
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    /// Any other backend failure (connection, syntax, decode, ...).
    #[error("store error: {0}")]
    Backend(String),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::Unknown(err.to_string())
    }
}
