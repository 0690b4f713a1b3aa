//! Core module: catalog, edges, layout, selection, view and renderers

pub mod config;
pub mod error;
pub mod layout;
pub mod models;
pub mod render;
pub mod selection;
pub mod view;

/// Returns the current version of the `course-map` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
