//! Error types for the course map core
//!
//! Three families of failure exist:
//! - [`CatalogError`]: the course table itself is broken. Raised once at load time
//!   and treated as fatal by callers.
//! - [`SelectionError`]: a selection request named a course the catalog does not have.
//! - [`ParseIdError`]: an id is not a `mnemonic + number` course code. Callers handle
//!   this locally (for example by skipping an outbound link).
//!
//! [`RenderError`] covers producing output artifacts from a view.

use std::fmt;
use thiserror::Error;

/// Which relation of a course record holds a reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `prerequisites` list
    Prerequisite,
    /// `corequisites` list
    Corequisite,
    /// `realizations` list
    Realization,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prerequisite => write!(f, "prerequisite"),
            Self::Corequisite => write!(f, "corequisite"),
            Self::Realization => write!(f, "realization"),
        }
    }
}

/// Data-integrity errors detected while constructing a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog table could not be parsed
    #[error("Failed to parse course catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two records share an id
    #[error("Duplicate course id '{0}'")]
    DuplicateId(String),

    /// A record references an id that is not in the catalog
    #[error("Course '{course}': {relation} '{target}' not found")]
    DanglingReference {
        /// Course holding the reference
        course: String,
        /// Relation the reference appears in
        relation: Relation,
        /// The unresolved id
        target: String,
    },
}

/// Rejected selection requests
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The requested id does not name a catalog course
    #[error("Unknown course id '{0}'")]
    UnknownCourse(String),
}

/// An id that does not split into a mnemonic and a number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a course code (expected letters followed by digits)")]
pub struct ParseIdError(pub String);

/// Failures while producing rendered output
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template rendering failed
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Scene serialization failed
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the output file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
