//! npm-push: release npm packages with rollback
//!
//! The `npm-push` binary is a thin CLI over this crate. The same release can
//! be driven from code:
//!
//! ```text
//! NpmPush::open(root)
//!   packages() / find_package(query)
//!   publish(&PublishOptions) -> ReleaseOutcome | ReleaseFailure
//! ```
//!
//! The building blocks are public too: `release::workspace` discovers
//! packages, `release::version` validates and bumps versions,
//! `release::changelog` maintains CHANGELOG.md and `release::transaction`
//! runs a release and undoes it on failure.

pub mod api;
pub mod commands;
pub mod core;
pub mod i18n;
pub mod release;
pub mod ui;

pub use crate::api::{NpmPush, PublishOptions, publish};
pub use crate::core::error::{PushError, PushResult};
pub use crate::i18n::Locale;
pub use crate::release::transaction::{ReleaseConfig, ReleaseFailure, ReleaseOutcome, RollbackReport, Stage};
pub use crate::release::version::BumpKind;
pub use crate::release::workspace::{PackageDescriptor, WorkspaceInfo};
