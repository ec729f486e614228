pub mod pull_request;
pub mod team;
pub mod users;
