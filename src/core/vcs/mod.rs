//! Version-control tag operations
//!
//! The release transaction only needs three primitives. They sit behind `TagOps`
//! so the transaction can be driven against a fake in tests.

pub mod system_git;

pub use system_git::SystemGit;

use crate::core::process::CommandOutput;
use std::io;

/// Create, delete and push a single tag
///
/// Each call runs to completion and reports the exit status. An `Err` means the
/// command could not be started at all.
pub trait TagOps {
  fn create_tag(&self, tag: &str) -> io::Result<CommandOutput>;

  fn delete_tag(&self, tag: &str) -> io::Result<CommandOutput>;

  fn push_tag(&self, remote: &str, tag: &str) -> io::Result<CommandOutput>;
}
