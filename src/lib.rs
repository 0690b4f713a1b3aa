//! Course dependency map library
//!
//! Loads a fixed catalog of courses, derives prerequisite and corequisite
//! edges, maps hand-authored grid positions to plane coordinates and keeps a
//! single course selection in sync with a location fragment (`#<id>`). The
//! view and renderers turn that state into HTML/SVG, Mermaid or JSON.

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::error::{CatalogError, ParseIdError, RenderError, SelectionError};
pub use crate::core::get_version;
pub use crate::core::layout::{Layout, Point};
pub use crate::core::models::{
    derive_edges, parse_id, Catalog, Course, CourseCode, Edge, EdgeKind, EdgeSet, Position,
};
pub use crate::core::selection::{Selection, SelectionController, SelectionListener};
