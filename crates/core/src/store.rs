//! Store contract consumed by [`crate::repository::ReviewRepository`].
//!
//! Every method runs on a connection owned by the caller's transaction, so
//! an implementation must never commit on its own.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::pull_request::{PullRequest, PullRequestShort};
use crate::team::{TeamMember, User};

pub type StoreResult<T> = Result<T, StoreError>;

/// Row-level operations over teams, users, pull requests and reviewer links.
#[async_trait]
pub trait ReviewStore: Send {
    // -- teams ------------------------------------------------------------

    async fn team_exists(&mut self, team_name: &str) -> StoreResult<bool>;

    /// Insert a team row. Signals [`StoreError::UniqueViolation`] on a duplicate.
    async fn insert_team(&mut self, team_name: &str) -> StoreResult<()>;

    /// Members of a team ordered by `user_id`.
    async fn team_members(&mut self, team_name: &str) -> StoreResult<Vec<TeamMember>>;

    // -- users ------------------------------------------------------------

    /// Create the user if absent, otherwise refresh name and activity,
    /// then attach it to `team_name`.
    async fn upsert_member(&mut self, member: &TeamMember, team_name: &str) -> StoreResult<()>;

    async fn find_user(&mut self, user_id: &str) -> StoreResult<Option<User>>;

    /// Returns `None` if the user does not exist.
    async fn set_user_active(&mut self, user_id: &str, is_active: bool)
        -> StoreResult<Option<User>>;

    /// Active members of `team_name` whose id is not in `excluded`.
    async fn active_teammates_excluding(
        &mut self,
        team_name: &str,
        excluded: &[String],
    ) -> StoreResult<Vec<String>>;

    // -- pull requests ----------------------------------------------------

    async fn pull_request_exists(&mut self, pr_id: &str) -> StoreResult<bool>;

    /// Insert an OPEN pull request with no reviewers. Signals
    /// [`StoreError::UniqueViolation`] on a duplicate id.
    async fn insert_pull_request(
        &mut self,
        pr_id: &str,
        name: &str,
        author_id: &str,
    ) -> StoreResult<PullRequest>;

    /// Pull request with reviewers, without locking.
    async fn find_pull_request(&mut self, pr_id: &str) -> StoreResult<Option<PullRequest>>;

    /// Pull request with reviewers, holding a row lock on the pull request
    /// until the surrounding transaction ends.
    async fn lock_pull_request(&mut self, pr_id: &str) -> StoreResult<Option<PullRequest>>;

    /// Set status MERGED. `merged_at` is only stamped the first time.
    async fn mark_merged(&mut self, pr_id: &str) -> StoreResult<Option<PullRequest>>;

    // -- reviewer assignments ---------------------------------------------

    /// Reviewer ids of a pull request in assignment order.
    async fn reviewers(&mut self, pr_id: &str) -> StoreResult<Vec<String>>;

    async fn is_reviewer(&mut self, pr_id: &str, user_id: &str) -> StoreResult<bool>;

    async fn add_reviewer(&mut self, pr_id: &str, user_id: &str) -> StoreResult<()>;

    /// Returns `true` if a row was removed.
    async fn remove_reviewer(&mut self, pr_id: &str, user_id: &str) -> StoreResult<bool>;

    /// Pull requests (open or merged) the user is assigned to, by id.
    async fn reviews_for_user(&mut self, user_id: &str) -> StoreResult<Vec<PullRequestShort>>;
}
