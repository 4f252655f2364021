//! Message tables, one per locale. Every table carries the same keys.

pub(super) mod en;
pub(super) mod ja;
pub(super) mod ko;
pub(super) mod zh;
