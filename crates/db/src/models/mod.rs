//! Row types returned by the repositories and their conversion into core
//! entities.

pub mod pull_request;
pub mod user;
