//! CLI command implementations.

pub mod check;
pub mod tags;
pub mod target;
