//! CLI command implementations

pub mod check;
pub mod eval;
pub mod json_output;
pub mod list;
