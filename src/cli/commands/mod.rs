//! CLI command handlers for `coursemap`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod edges;
pub mod render;
pub mod show;
