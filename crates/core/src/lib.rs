//! Domain model and reviewer assignment engine.
//!
//! This crate has no database dependency. The Postgres adapter in
//! `revassign-db` implements [`store::ReviewStore`] and drives
//! [`repository::ReviewRepository`] inside a transaction.

pub mod assignment;
pub mod error;
pub mod pull_request;
pub mod repository;
pub mod store;
pub mod team;
pub mod types;

#[cfg(test)]
mod memory_store;
