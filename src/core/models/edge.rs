//! Directed edges derived from a catalog's prerequisite and corequisite lists

use super::Catalog;
use serde::Serialize;
use std::fmt;

/// Kind of relation an edge draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Source must be completed before target
    Prerequisite,
    /// Source must be completed before or alongside target
    Corequisite,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prerequisite => write!(f, "prerequisite"),
            Self::Corequisite => write!(f, "corequisite"),
        }
    }
}

impl std::str::FromStr for EdgeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prerequisite" | "prereq" => Ok(Self::Prerequisite),
            "corequisite" | "coreq" => Ok(Self::Corequisite),
            _ => Err(format!("Unknown edge kind: {s}")),
        }
    }
}

/// A directed edge from a requirement to the course that needs it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Course that must be taken first
    pub source: String,
    /// Course that requires `source`
    pub target: String,
    /// Relation drawn by this edge
    pub kind: EdgeKind,
}

impl Edge {
    /// Create a new edge
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: EdgeKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self.kind {
            EdgeKind::Prerequisite => "-->",
            EdgeKind::Corequisite => "-.->",
        };
        write!(f, "{} {arrow} {}", self.source, self.target)
    }
}

/// Flat edge lists ready for rendering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EdgeSet {
    /// Prerequisite edges in catalog order
    pub prerequisites: Vec<Edge>,
    /// Corequisite edges in catalog order
    pub corequisites: Vec<Edge>,
}

impl EdgeSet {
    /// Both lists, prerequisites first
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.prerequisites.iter().chain(self.corequisites.iter())
    }

    /// Edges of one kind
    #[must_use]
    pub fn of_kind(&self, kind: EdgeKind) -> &[Edge] {
        match kind {
            EdgeKind::Prerequisite => &self.prerequisites,
            EdgeKind::Corequisite => &self.corequisites,
        }
    }

    /// Total number of edges
    #[must_use]
    pub fn len(&self) -> usize {
        self.prerequisites.len() + self.corequisites.len()
    }

    /// Whether there are no edges at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Edges touching `id` as source or target
    pub fn touching<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.iter()
            .filter(move |edge| edge.source == id || edge.target == id)
    }
}

/// Expand a catalog into prerequisite and corequisite edge lists
///
/// For each course `C` (in catalog order) and each id `P` in `C.prerequisites`,
/// emits `P -> C`; corequisites likewise. Cycles are emitted as-is.
#[must_use]
pub fn derive_edges(catalog: &Catalog) -> EdgeSet {
    let mut edges = EdgeSet::default();

    for course in catalog.all() {
        edges.prerequisites.extend(
            course
                .prerequisites
                .iter()
                .map(|prereq| Edge::new(prereq.as_str(), course.id.as_str(), EdgeKind::Prerequisite)),
        );
        edges.corequisites.extend(
            course
                .corequisites
                .iter()
                .map(|coreq| Edge::new(coreq.as_str(), course.id.as_str(), EdgeKind::Corequisite)),
        );
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, Position};

    fn catalog() -> Catalog {
        let intro = Course::new("cs11x", "Intro", Position::new(0, 0));
        let mut sdm = Course::new("cs2110", "SDM", Position::new(1, -1));
        sdm.add_prerequisite("cs11x");
        let mut dmt = Course::new("cs2102", "DMT", Position::new(1, 1));
        dmt.add_prerequisite("cs11x");
        let mut pdr = Course::new("cs2150", "PDR", Position::new(2, 0));
        pdr.add_prerequisite("cs2110");
        pdr.add_prerequisite("cs2102");
        let mut seminar = Course::new("cs2190", "Seminar", Position::new(1, -3));
        seminar.add_corequisite("cs2110");

        Catalog::new(vec![intro, sdm, dmt, pdr, seminar]).unwrap()
    }

    #[test]
    fn test_derive_prerequisite_edges() {
        let edges = derive_edges(&catalog());

        assert_eq!(
            edges.prerequisites,
            vec![
                Edge::new("cs11x", "cs2110", EdgeKind::Prerequisite),
                Edge::new("cs11x", "cs2102", EdgeKind::Prerequisite),
                Edge::new("cs2110", "cs2150", EdgeKind::Prerequisite),
                Edge::new("cs2102", "cs2150", EdgeKind::Prerequisite),
            ]
        );
    }

    #[test]
    fn test_derive_corequisite_edges() {
        let edges = derive_edges(&catalog());

        assert_eq!(
            edges.corequisites,
            vec![Edge::new("cs2110", "cs2190", EdgeKind::Corequisite)]
        );
        assert_eq!(edges.len(), 5);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let catalog = catalog();
        assert_eq!(derive_edges(&catalog), derive_edges(&catalog));
    }

    #[test]
    fn test_one_edge_per_pair() {
        let edges = derive_edges(&catalog());
        let mut pairs: Vec<(&str, &str)> = edges
            .prerequisites
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();
        let before = pairs.len();
        pairs.sort_unstable();
        pairs.dedup();
        assert_eq!(pairs.len(), before);
    }

    #[test]
    fn test_repeated_prerequisite_yields_one_edge() {
        let toml_str = r#"
[[course]]
id = "cs11x"
title = "Intro"
position = [0, 0]

[[course]]
id = "cs2110"
title = "Software Development Methods"
position = [1, -1]
prerequisites = ["cs11x", "cs11x"]

[[course]]
id = "cs2190"
title = "Seminar"
position = [1, -3]
corequisites = ["cs2110", "cs2110"]
"#;
        let edges = derive_edges(&Catalog::from_toml(toml_str).unwrap());
        assert_eq!(
            edges.prerequisites,
            vec![Edge::new("cs11x", "cs2110", EdgeKind::Prerequisite)]
        );
        assert_eq!(
            edges.corequisites,
            vec![Edge::new("cs2110", "cs2190", EdgeKind::Corequisite)]
        );
    }

    #[test]
    fn test_cycle_produces_edges() {
        let mut a = Course::new("a1", "A", Position::new(0, 0));
        a.add_prerequisite("b1");
        let mut b = Course::new("b1", "B", Position::new(1, 0));
        b.add_prerequisite("a1");
        let edges = derive_edges(&Catalog::new(vec![a, b]).unwrap());

        assert_eq!(edges.prerequisites.len(), 2);
    }

    #[test]
    fn test_touching_and_of_kind() {
        let edges = derive_edges(&catalog());
        assert_eq!(edges.touching("cs2110").count(), 3);
        assert_eq!(edges.of_kind(EdgeKind::Corequisite).len(), 1);
        assert!(!edges.is_empty());
    }

    #[test]
    fn test_edge_display() {
        let edge = Edge::new("cs2110", "cs2190", EdgeKind::Corequisite);
        assert_eq!(edge.to_string(), "cs2110 -.-> cs2190");
        assert_eq!("coreq".parse::<EdgeKind>(), Ok(EdgeKind::Corequisite));
    }
}
