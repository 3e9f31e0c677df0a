//! manigen library - expose modules for testing
//!
//! The binary is a thin wrapper: it reads [`manigen_config::Settings`] from
//! the environment, builds a GitHub client and hands both to
//! [`pipeline::run`].

pub mod common;
pub mod errors;
pub mod pipeline;
pub mod sources;

#[cfg(test)]
pub(crate) mod test_support;

pub use manigen_logger as logger;
