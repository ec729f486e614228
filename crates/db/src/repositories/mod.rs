//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that take
//! `&mut PgConnection` as the first argument, so callers decide which
//! transaction a statement belongs to.

pub mod pull_request_repo;
pub mod reviewer_repo;
pub mod team_repo;
pub mod user_repo;

pub use pull_request_repo::PullRequestRepo;
pub use reviewer_repo::ReviewerRepo;
pub use team_repo::TeamRepo;
pub use user_repo::UserRepo;
