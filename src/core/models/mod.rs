//! Data models for course maps

pub mod catalog;
pub mod course;
pub mod course_code;
pub mod edge;

pub use catalog::Catalog;
pub use course::{display_name, Course, Position};
pub use course_code::{parse_id, CourseCode};
pub use edge::{derive_edges, Edge, EdgeKind, EdgeSet};
