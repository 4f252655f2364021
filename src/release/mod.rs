//! Release workflow
//!
//! - **version**: version validation, bumps and tag names
//! - **manifest**: `package.json` read/rewrite preserving key order
//! - **workspace**: single-package vs workspace discovery and package lookup
//! - **changelog**: CHANGELOG.md parsing, rendering and merging
//! - **registry**: npm identity check and publish
//! - **scripts**: running a package script before release
//! - **transaction**: the ordered publish steps with rollback

pub mod changelog;
pub mod manifest;
pub mod registry;
pub mod scripts;
pub mod transaction;
pub mod version;
pub mod workspace;
