//! Course catalog: the immutable table every other component reads from

use super::Course;
use crate::core::error::{CatalogError, Relation};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

/// Compiled-in course table
const BUILTIN_CATALOG: &str = include_str!("../../../assets/catalog.toml");

/// On-disk shape of a catalog table: a list of `[[course]]` entries
#[derive(Debug, Deserialize)]
struct CatalogTable {
    #[serde(default, rename = "course")]
    courses: Vec<Course>,
}

/// Validated, read-only set of courses
///
/// Construction checks that ids are unique and that every prerequisite,
/// corequisite and realization id resolves to a course in the same catalog.
/// Once built the catalog is never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Courses in authored order
    courses: Vec<Course>,

    /// Course id -> index into `courses`
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from course records
    ///
    /// Relation lists are sets: repeated ids are dropped, keeping the first
    /// occurrence.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateId`] if two records share an id, or
    /// [`CatalogError::DanglingReference`] for the first reference that does not
    /// resolve.
    pub fn new(mut courses: Vec<Course>) -> Result<Self, CatalogError> {
        for course in &mut courses {
            dedup_ids(&mut course.prerequisites);
            dedup_ids(&mut course.corequisites);
            dedup_ids(&mut course.realizations);
        }

        let mut index = HashMap::with_capacity(courses.len());
        for (position, course) in courses.iter().enumerate() {
            if index.insert(course.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(course.id.clone()));
            }
        }

        let catalog = Self { courses, index };
        catalog.validate_references()?;
        Ok(catalog)
    }

    /// Parse and validate a catalog from TOML
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] for malformed TOML, otherwise the errors of [`Catalog::new`]
    pub fn from_toml(toml_str: &str) -> Result<Self, CatalogError> {
        let table: CatalogTable = toml::from_str(toml_str)?;
        Self::new(table.courses)
    }

    /// Load the compiled-in catalog
    ///
    /// # Errors
    /// Returns a [`CatalogError`] if the embedded table is malformed
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    fn validate_references(&self) -> Result<(), CatalogError> {
        for course in &self.courses {
            let relations = [
                (Relation::Prerequisite, &course.prerequisites),
                (Relation::Corequisite, &course.corequisites),
                (Relation::Realization, &course.realizations),
            ];
            for (relation, ids) in relations {
                if let Some(target) = ids.iter().find(|id| !self.contains(id)) {
                    return Err(CatalogError::DanglingReference {
                        course: course.id.clone(),
                        relation,
                        target: target.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Look up a course by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Course> {
        self.index.get(id).map(|&position| &self.courses[position])
    }

    /// All courses, in authored order
    #[must_use]
    pub fn all(&self) -> &[Course] {
        &self.courses
    }

    /// Check if a course exists in the catalog
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Courses that list `id` as a prerequisite
    pub fn dependents<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Course> + 'a {
        self.courses
            .iter()
            .filter(move |course| course.prerequisites.iter().any(|p| p == id))
    }

    /// Requirement placeholders that `id` realizes
    pub fn realized_by<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Course> + 'a {
        self.courses
            .iter()
            .filter(move |course| course.realizations.iter().any(|r| r == id))
    }
}

fn dedup_ids(ids: &mut Vec<String>) {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.retain(|id| seen.insert(id.clone()));
}

impl std::fmt::Display for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Course catalog ({} courses):", self.courses.len())?;
        writeln!(f)?;

        for course in &self.courses {
            if course.prerequisites.is_empty() {
                writeln!(f, "  {} → (no prerequisites)", course.id)?;
            } else {
                writeln!(f, "  {} → {}", course.id, course.prerequisites.join(", "))?;
            }
        }

        Ok(())
    }
}
