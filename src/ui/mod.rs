//! Terminal output

pub mod report;
