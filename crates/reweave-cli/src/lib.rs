//! Reweave CLI library.
//!
//! This crate provides the functionality behind the `reweave` binary:
//! configuration loading and the `list`, `eval`, and `check` commands.

pub mod commands;
pub mod input;
