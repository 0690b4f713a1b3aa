//! Detail panel shown for the selected course

use crate::core::models::{parse_id, Catalog, Course};
use crate::debug;
use serde::Serialize;

/// Default host for outbound course directory links
pub const DEFAULT_DIRECTORY_HOST: &str = "thecourseforum.com";

/// A course mentioned in the panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedCourse {
    /// Course id
    pub id: String,
    /// Full title
    pub title: String,
}

impl From<&Course> for RelatedCourse {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            title: course.title.clone(),
        }
    }
}

/// Link to a course directory page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseLink {
    /// Link text, e.g. "CS 2150"
    pub label: String,
    /// Absolute URL
    pub url: String,
}

/// Content of the sidebar for one course
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    /// Selected course id
    pub id: String,
    /// Full title
    pub title: String,
    /// Node label
    pub label: String,
    /// Courses required first
    pub prerequisites: Vec<RelatedCourse>,
    /// Courses required first or alongside
    pub corequisites: Vec<RelatedCourse>,
    /// Courses this one is a prerequisite for
    pub unlocks: Vec<RelatedCourse>,
    /// Concrete courses satisfying this requirement
    pub realizations: Vec<RelatedCourse>,
    /// Outbound directory links
    pub links: Vec<CourseLink>,
}

impl Sidebar {
    /// Build the panel for `course`
    ///
    /// Links point at the course itself, or at each realization when the course is a
    /// requirement placeholder. Ids that are not `mnemonic + number` get no link.
    #[must_use]
    pub fn for_course(course: &Course, catalog: &Catalog, directory_host: &str) -> Self {
        let related = |ids: &[String]| -> Vec<RelatedCourse> {
            ids.iter()
                .filter_map(|id| catalog.get(id))
                .map(RelatedCourse::from)
                .collect()
        };

        let link_targets: Vec<&str> = if course.is_requirement() {
            course.realizations.iter().map(String::as_str).collect()
        } else {
            vec![course.id.as_str()]
        };

        let links = link_targets
            .into_iter()
            .filter_map(|id| match parse_id(id) {
                Ok(code) => Some(CourseLink {
                    label: code.to_string(),
                    url: code.directory_url(directory_host),
                }),
                Err(err) => {
                    debug!("No directory link for {id}: {err}");
                    None
                }
            })
            .collect();

        Self {
            id: course.id.clone(),
            title: course.title.clone(),
            label: course.display_name().to_string(),
            prerequisites: related(course.prerequisites.as_slice()),
            corequisites: related(course.corequisites.as_slice()),
            unlocks: catalog.dependents(&course.id).map(RelatedCourse::from).collect(),
            realizations: related(course.realizations.as_slice()),
            links,
        }
    }
}
