//! Render surface handed to drawing code: positioned nodes and edges

use crate::core::layout::{Layout, Point};
use crate::core::models::{Catalog, Course, EdgeKind, EdgeSet};
use serde::Serialize;
use std::fmt;

/// Colour class of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleClass {
    /// Core curriculum course or requirement
    Core,
    /// Course that can stand in for a core requirement
    CoreOneOf,
    /// Everything else
    Elective,
}

impl StyleClass {
    /// Classify a course within its catalog
    #[must_use]
    pub fn of(course: &Course, catalog: &Catalog) -> Self {
        if course.core {
            Self::Core
        } else if catalog.realized_by(&course.id).any(|placeholder| placeholder.core) {
            Self::CoreOneOf
        } else {
            Self::Elective
        }
    }

    /// CSS class name
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::CoreOneOf => "core-oneof",
            Self::Elective => "elective",
        }
    }

    /// Fill colour of the node circle
    #[must_use]
    pub const fn fill(self) -> &'static str {
        match self {
            Self::Core => "green",
            Self::CoreOneOf => "yellow",
            Self::Elective => "#000000",
        }
    }
}

impl fmt::Display for StyleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// A course node ready to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    /// Course id
    pub id: String,
    /// Label drawn inside the node
    pub label: String,
    /// Full title, for tooltips
    pub title: String,
    /// Plane x coordinate
    pub x: f64,
    /// Plane y coordinate
    pub y: f64,
    /// Colour class
    pub style: StyleClass,
    /// Whether this node is the current selection
    pub selected: bool,
}

impl NodeView {
    /// Plane position of the node
    #[must_use]
    pub const fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Space-separated CSS classes, e.g. `"course core selected"`
    #[must_use]
    pub fn classes(&self) -> String {
        let mut classes = format!("course {}", self.style.css_class());
        if self.selected {
            classes.push_str(" selected");
        }
        classes
    }
}

/// An edge ready to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeView {
    /// Source course id
    pub source_id: String,
    /// Target course id
    pub target_id: String,
    /// Source node position
    pub source: Point,
    /// Target node position
    pub target: Point,
    /// Relation drawn
    pub kind: EdgeKind,
}

/// Everything the drawing layer needs, in plane coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    /// Nodes in catalog order
    pub nodes: Vec<NodeView>,
    /// Prerequisite edges followed by corequisite edges
    pub edges: Vec<EdgeView>,
    /// Node radius
    pub radius: f64,
}

impl Scene {
    /// Position every course and edge of a catalog
    #[must_use]
    pub fn build(catalog: &Catalog, edges: &EdgeSet, layout: &Layout) -> Self {
        let nodes = catalog
            .all()
            .iter()
            .map(|course| {
                let point = layout.scale(course.position);
                NodeView {
                    id: course.id.clone(),
                    label: course.display_name().to_string(),
                    title: course.title.clone(),
                    x: point.x,
                    y: point.y,
                    style: StyleClass::of(course, catalog),
                    selected: false,
                }
            })
            .collect();

        let position_of = |id: &str| catalog.get(id).map(|c| layout.scale(c.position));
        let edges = edges
            .iter()
            .filter_map(|edge| {
                Some(EdgeView {
                    source_id: edge.source.clone(),
                    target_id: edge.target.clone(),
                    source: position_of(&edge.source)?,
                    target: position_of(&edge.target)?,
                    kind: edge.kind,
                })
            })
            .collect();

        Self {
            nodes,
            edges,
            radius: layout.node_radius,
        }
    }

    /// Move the `selected` flag to `id` (or clear it)
    pub fn set_selected(&mut self, id: Option<&str>) {
        for node in &mut self.nodes {
            node.selected = Some(node.id.as_str()) == id;
        }
    }

    /// Look up a node by course id
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&NodeView> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// The highlighted node, if any
    #[must_use]
    pub fn selected(&self) -> Option<&NodeView> {
        self.nodes.iter().find(|node| node.selected)
    }

    /// Smallest and largest corners of the node centres, padded by the radius
    #[must_use]
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = self.nodes.first()?;
        let (mut min, mut max) = (first.point(), first.point());
        for node in &self.nodes {
            min.x = min.x.min(node.x);
            min.y = min.y.min(node.y);
            max.x = max.x.max(node.x);
            max.y = max.y.max(node.y);
        }
        Some((
            Point::new(min.x - self.radius, min.y - self.radius),
            Point::new(max.x + self.radius, max.y + self.radius),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{derive_edges, Position};

    fn catalog() -> Catalog {
        let mut intro = Course::new("cs11x", "Intro", Position::new(0, 0));
        intro.set_core(true);
        let mut sdm = Course::new("cs2110", "SDM", Position::new(1, -1));
        sdm.add_prerequisite("cs11x");
        sdm.set_core(true);
        let math = Course::new("math1310", "Calculus I", Position::new(0, 3));
        let mut calc = Course::new("calc", "Calculus Requirement", Position::new(0, 2));
        calc.add_realization("math1310");
        calc.set_core(true);
        let mut seminar = Course::new("cs2190", "Seminar", Position::new(1, -3));
        seminar.add_corequisite("cs2110");
        Catalog::new(vec![intro, sdm, math, calc, seminar]).unwrap()
    }

    fn scene() -> Scene {
        let catalog = catalog();
        Scene::build(&catalog, &derive_edges(&catalog), &Layout::default())
    }

    #[test]
    fn test_nodes_are_positioned_and_labelled() {
        let scene = scene();
        assert_eq!(scene.nodes.len(), 5);

        let sdm = scene.node("cs2110").unwrap();
        assert_eq!(sdm.label, "2110");
        assert_eq!(sdm.point(), Point::new(-100.0, 200.0));
        assert!((scene.radius - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_style_classes() {
        let scene = scene();
        assert_eq!(scene.node("cs11x").unwrap().style, StyleClass::Core);
        assert_eq!(scene.node("math1310").unwrap().style, StyleClass::CoreOneOf);
        assert_eq!(scene.node("cs2190").unwrap().style, StyleClass::Elective);
        assert_eq!(StyleClass::CoreOneOf.fill(), "yellow");
    }

    #[test]
    fn test_edges_carry_coordinates() {
        let scene = scene();
        assert_eq!(scene.edges.len(), 2);

        let prereq = &scene.edges[0];
        assert_eq!(prereq.kind, EdgeKind::Prerequisite);
        assert_eq!(prereq.source, Point::new(0.0, 0.0));
        assert_eq!(prereq.target, Point::new(-100.0, 200.0));

        let coreq = &scene.edges[1];
        assert_eq!(coreq.kind, EdgeKind::Corequisite);
        assert_eq!(coreq.source_id, "cs2110");
        assert_eq!(coreq.target_id, "cs2190");
    }

    #[test]
    fn test_selection_flag_moves() {
        let mut scene = scene();
        scene.set_selected(Some("cs2110"));
        assert_eq!(scene.selected().unwrap().id, "cs2110");
        assert_eq!(scene.node("cs2110").unwrap().classes(), "course core selected");

        scene.set_selected(Some("cs11x"));
        assert_eq!(scene.nodes.iter().filter(|n| n.selected).count(), 1);

        scene.set_selected(None);
        assert!(scene.selected().is_none());
    }

    #[test]
    fn test_bounds() {
        let (min, max) = scene().bounds().unwrap();
        assert_eq!(min, Point::new(-330.0, -30.0));
        assert_eq!(max, Point::new(330.0, 230.0));
    }
}
