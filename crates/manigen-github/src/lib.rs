//! GitHub access for manigen
//!
//! Release and asset types as returned by the REST API, and a blocking client
//! behind the [`RepositoryApi`] trait. The manifest pipeline only talks to the
//! trait, so it can run against an in-memory repository in tests.

pub mod client;
pub mod errors;
pub mod types;

pub use client::{GithubClient, RepositoryApi};
pub use errors::GithubError;
pub use types::{Asset, Release};
