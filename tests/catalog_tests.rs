//! Integration tests for the catalog, edge derivation, layout and id parsing

use course_map::core::models::display_name;
use course_map::{
    derive_edges, parse_id, Catalog, CatalogError, Course, EdgeKind, Layout, Point, Position,
};
use std::collections::HashSet;

#[test]
fn test_builtin_catalog_validates() {
    let catalog = Catalog::builtin().expect("built-in catalog should validate");
    assert_eq!(catalog.len(), 16);
    assert!(catalog.contains("cs2150"));
    assert!(catalog.contains("calc"));
}

#[test]
fn test_every_reference_resolves() {
    let catalog = Catalog::builtin().unwrap();
    for course in catalog.all() {
        for id in course
            .prerequisites
            .iter()
            .chain(&course.corequisites)
            .chain(&course.realizations)
        {
            assert!(
                catalog.get(id).is_some(),
                "{} references missing course {id}",
                course.id
            );
        }
    }
}

#[test]
fn test_dangling_reference_is_fatal() {
    let toml_str = r#"
[[course]]
id = "cs2150"
title = "Program and Data Representation"
position = [2, 0]
prerequisites = ["cs2110"]
"#;

    match Catalog::from_toml(toml_str) {
        Err(CatalogError::DanglingReference { course, target, .. }) => {
            assert_eq!(course, "cs2150");
            assert_eq!(target, "cs2110");
        }
        other => panic!("expected dangling reference, got {other:?}"),
    }
}

#[test]
fn test_malformed_catalog_is_a_parse_error() {
    let result = Catalog::from_toml("[[course]]\nid = 5\n");
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[test]
fn test_builtin_edges() {
    let catalog = Catalog::builtin().unwrap();
    let edges = derive_edges(&catalog);

    assert_eq!(edges.of_kind(EdgeKind::Prerequisite).len(), 11);
    assert_eq!(edges.of_kind(EdgeKind::Corequisite).len(), 1);

    let coreq = &edges.corequisites[0];
    assert_eq!(coreq.source, "cs2110");
    assert_eq!(coreq.target, "cs2190");
}

#[test]
fn test_one_edge_per_prerequisite_pair() {
    let catalog = Catalog::builtin().unwrap();
    let edges = derive_edges(&catalog);

    let pairs: HashSet<(&str, &str)> = edges
        .prerequisites
        .iter()
        .map(|edge| (edge.source.as_str(), edge.target.as_str()))
        .collect();
    assert_eq!(pairs.len(), edges.prerequisites.len());

    let expected: usize = catalog.all().iter().map(|c| c.prerequisites.len()).sum();
    assert_eq!(edges.prerequisites.len(), expected);
}

#[test]
fn test_edge_derivation_is_deterministic() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(derive_edges(&catalog), derive_edges(&catalog));
}

#[test]
fn test_scale_axes_are_independent() {
    let layout = Layout::default();
    assert_eq!(layout.scale(Position::new(0, 0)), Point::new(0.0, 0.0));

    let a = layout.scale(Position::new(2, -3));
    let b = layout.scale(Position::new(2, 4));
    let c = layout.scale(Position::new(5, -3));
    assert!((a.y - b.y).abs() < f64::EPSILON);
    assert!((a.x - c.x).abs() < f64::EPSILON);
    assert!((a.x - -300.0).abs() < f64::EPSILON);
    assert!((c.y - 1000.0).abs() < f64::EPSILON);
}

#[test]
fn test_display_names() {
    let sdm = Course::new("cs2110", "Software Development Methods", Position::new(1, -1));
    assert_eq!(display_name(&sdm), "2110");

    let mut intro = Course::new("cs11x", "Intro Requirement", Position::new(0, 0));
    intro.set_display("Intro");
    assert_eq!(display_name(&intro), "Intro");

    let calc = Course::new("calc", "Calculus I Requirement", Position::new(0, 2));
    assert_eq!(display_name(&calc), "calc");
}

#[test]
fn test_parse_id() {
    let code = parse_id("cs2102").expect("cs2102 is a course code");
    assert_eq!(code.mnemonic, "cs");
    assert_eq!(code.number, "2102");

    assert!(parse_id("calc").is_err());
    assert!(parse_id("cs11x").is_err());
}
