//! Course codes: the `mnemonic + number` form of a real course id

use crate::core::error::ParseIdError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static COURSE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)([0-9]+)$").expect("course code pattern is valid")
});

/// A course id split into its department mnemonic and catalog number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseCode {
    /// Department mnemonic (e.g. "cs")
    pub mnemonic: String,
    /// Catalog number (e.g. "2102")
    pub number: String,
}

impl CourseCode {
    /// Link to this course on a course directory
    ///
    /// # Arguments
    /// * `host` - Directory host name, e.g. "thecourseforum.com"
    ///
    /// # Returns
    /// `https://<host>/course/<mnemonic>/<number>`
    #[must_use]
    pub fn directory_url(&self, host: &str) -> String {
        let host = host.trim_end_matches('/');
        format!("https://{host}/course/{}/{}", self.mnemonic, self.number)
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.mnemonic.to_uppercase(), self.number)
    }
}

/// Split a course id into mnemonic and number
///
/// # Errors
/// Returns [`ParseIdError`] when the id is not letters followed by digits,
/// e.g. the placeholder "calc" or the wildcard "cs11x".
pub fn parse_id(id: &str) -> Result<CourseCode, ParseIdError> {
    let captures = COURSE_CODE
        .captures(id)
        .ok_or_else(|| ParseIdError(id.to_string()))?;
    Ok(CourseCode {
        mnemonic: captures[1].to_string(),
        number: captures[2].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_real_course() {
        let code = parse_id("cs2102").unwrap();
        assert_eq!(code.mnemonic, "cs");
        assert_eq!(code.number, "2102");

        let code = parse_id("apma1090").unwrap();
        assert_eq!(code.mnemonic, "apma");
        assert_eq!(code.number, "1090");
    }

    #[test]
    fn test_parse_rejects_placeholders() {
        assert_eq!(parse_id("calc"), Err(ParseIdError("calc".to_string())));
        assert!(parse_id("cs11x").is_err());
        assert!(parse_id("2102").is_err());
        assert!(parse_id("").is_err());
        assert!(parse_id("cs 2102").is_err());
    }

    #[test]
    fn test_directory_url() {
        let code = parse_id("cs2150").unwrap();
        assert_eq!(
            code.directory_url("thecourseforum.com"),
            "https://thecourseforum.com/course/cs/2150"
        );
        assert_eq!(
            code.directory_url("thecourseforum.com/"),
            "https://thecourseforum.com/course/cs/2150"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(parse_id("cs4102").unwrap().to_string(), "CS 4102");
    }
}
