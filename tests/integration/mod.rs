//! Integration tests for npm-push
//!
//! These drive the real binary against temporary projects. `npm` is replaced by a
//! shell script (see `helpers::TestProject`) so nothing touches a real registry.

#![cfg(unix)]

mod helpers;
mod test_publish;
mod test_workspace;
