//! Course model

use super::course_code::{parse_id, CourseCode};
use crate::core::error::ParseIdError;
use serde::{Deserialize, Serialize};

/// Mnemonic stripped from ids when no explicit display label is set
pub const DEFAULT_MNEMONIC: &str = "cs";

/// Logical grid position of a course node
///
/// Authored as `[level, slot]`. `level` is the prerequisite tier (0 at the top);
/// `slot` is the horizontal offset within the tier and may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, i32)", into = "(u32, i32)")]
pub struct Position {
    /// Prerequisite tier
    pub level: u32,
    /// Offset within the tier
    pub slot: i32,
}

impl Position {
    /// Create a new position
    #[must_use]
    pub const fn new(level: u32, slot: i32) -> Self {
        Self { level, slot }
    }
}

impl From<(u32, i32)> for Position {
    fn from((level, slot): (u32, i32)) -> Self {
        Self { level, slot }
    }
}

impl From<Position> for (u32, i32) {
    fn from(position: Position) -> Self {
        (position.level, position.slot)
    }
}

/// A catalog entry: either a real course or a requirement placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique id, e.g. "cs2150", or a placeholder id such as "calc"
    pub id: String,

    /// Human-readable name (e.g. "Program and Data Representation")
    pub title: String,

    /// Short label override for rendering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Where the node sits on the grid
    pub position: Position,

    /// Ids of courses that must be completed first
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// Ids of courses that must be completed first or concurrently
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub corequisites: Vec<String>,

    /// Concrete course ids that satisfy this requirement node, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub realizations: Vec<String>,

    /// Part of the core curriculum
    #[serde(default)]
    pub core: bool,
}

impl Course {
    /// Create a new course with no relations
    ///
    /// # Arguments
    /// * `id` - Unique course id
    /// * `title` - Full course name
    /// * `position` - Grid position
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            display: None,
            position,
            prerequisites: Vec::new(),
            corequisites: Vec::new(),
            realizations: Vec::new(),
            core: false,
        }
    }

    /// Add a prerequisite by course id
    pub fn add_prerequisite(&mut self, id: impl Into<String>) {
        push_unique(&mut self.prerequisites, id.into());
    }

    /// Add a co-requisite by course id
    pub fn add_corequisite(&mut self, id: impl Into<String>) {
        push_unique(&mut self.corequisites, id.into());
    }

    /// Add a course that realizes this requirement
    pub fn add_realization(&mut self, id: impl Into<String>) {
        push_unique(&mut self.realizations, id.into());
    }

    /// Set the short display label
    pub fn set_display(&mut self, display: impl Into<String>) {
        self.display = Some(display.into());
    }

    /// Mark the course as part of the core curriculum
    pub const fn set_core(&mut self, core: bool) {
        self.core = core;
    }

    /// Whether this node is a requirement placeholder satisfied by other courses
    #[must_use]
    pub fn is_requirement(&self) -> bool {
        !self.realizations.is_empty()
    }

    /// Label used when drawing the node
    #[must_use]
    pub fn display_name(&self) -> &str {
        display_name(self)
    }

    /// Split the id into mnemonic and number
    ///
    /// # Errors
    /// Returns [`ParseIdError`] for placeholder ids such as "calc"
    pub fn code(&self) -> Result<CourseCode, ParseIdError> {
        parse_id(&self.id)
    }
}

/// Resolve the label drawn for a course
///
/// Uses `display` when set. Otherwise strips the "cs" mnemonic from the id
/// ("cs2110" becomes "2110"); any other id is returned unchanged.
#[must_use]
pub fn display_name(course: &Course) -> &str {
    if let Some(display) = course.display.as_deref() {
        return display;
    }
    match course.id.strip_prefix(DEFAULT_MNEMONIC) {
        Some(rest) if !rest.is_empty() => rest,
        _ => &course.id,
    }
}

fn push_unique(list: &mut Vec<String>, id: String) {
    if !list.contains(&id) {
        list.push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new("cs2150", "Program and Data Representation", Position::new(2, 0));

        assert_eq!(course.id, "cs2150");
        assert_eq!(course.title, "Program and Data Representation");
        assert_eq!(course.position, Position::new(2, 0));
        assert!(course.display.is_none());
        assert!(course.prerequisites.is_empty());
        assert!(course.corequisites.is_empty());
        assert!(!course.is_requirement());
        assert!(!course.core);
    }

    #[test]
    fn test_add_prerequisite_deduplicates() {
        let mut course = Course::new("cs2110", "Software Development Methods", Position::new(1, -1));

        course.add_prerequisite("cs11x");
        course.add_prerequisite("cs11x");
        assert_eq!(course.prerequisites, vec!["cs11x".to_string()]);
    }

    #[test]
    fn test_add_corequisite_and_realization() {
        let mut course = Course::new("calc", "Calculus I", Position::new(0, 2));
        course.add_realization("math1310");
        course.add_realization("apma1090");
        course.add_corequisite("cs11x");

        assert!(course.is_requirement());
        assert_eq!(course.realizations, vec!["math1310", "apma1090"]);
        assert_eq!(course.corequisites, vec!["cs11x"]);
    }

    #[test]
    fn test_display_name_strips_mnemonic() {
        let course = Course::new("cs2110", "Software Development Methods", Position::new(1, -1));
        assert_eq!(display_name(&course), "2110");
    }

    #[test]
    fn test_display_name_prefers_override() {
        let mut course = Course::new("cs11x", "Introduction to Programming", Position::new(0, 0));
        course.set_display("Intro");
        assert_eq!(course.display_name(), "Intro");
    }

    #[test]
    fn test_display_name_keeps_other_ids() {
        let calc = Course::new("calc", "Calculus I", Position::new(0, 2));
        assert_eq!(display_name(&calc), "calc");

        let math = Course::new("math1310", "Calculus I", Position::new(0, 4));
        assert_eq!(display_name(&math), "math1310");

        let bare = Course::new("cs", "Odd", Position::new(0, 0));
        assert_eq!(display_name(&bare), "cs");
    }

    #[test]
    fn test_position_deserializes_from_pair() {
        let course: Course = toml::from_str(
            r#"
id = "cs2110"
title = "Software Development Methods"
position = [1, -1]
prerequisites = ["cs11x"]
"#,
        )
        .unwrap();

        assert_eq!(course.position, Position::new(1, -1));
        assert_eq!(course.prerequisites, vec!["cs11x"]);
        assert!(course.corequisites.is_empty());
    }

    #[test]
    fn test_course_code() {
        let course = Course::new("cs2102", "Discrete Mathematics", Position::new(1, 1));
        let code = course.code().unwrap();
        assert_eq!(code.mnemonic, "cs");
        assert_eq!(code.number, "2102");

        let calc = Course::new("calc", "Calculus I", Position::new(0, 2));
        assert!(calc.code().is_err());
    }
}
