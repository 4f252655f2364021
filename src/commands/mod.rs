//! CLI commands for npm-push
//!
//! - **publish**: bump, changelog, tag and publish one package with rollback
//! - **list**: show the packages npm-push can see
//!
//! All commands accept `&ProjectContext` to avoid redundant loads.

pub mod list;
pub mod publish;

pub use list::run_list;
pub use publish::{PublishArgs, run_publish};
