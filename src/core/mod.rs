//! Core building blocks shared by every command
//!
//! - **config**: npm-push.toml parsing
//! - **context**: per-invocation project context
//! - **error**: error types with localized messages and help hints
//! - **process**: blocking subprocess execution
//! - **vcs**: git tag operations

pub mod config;
pub mod context;
pub mod error;
pub mod process;
pub mod vcs;
