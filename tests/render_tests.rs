//! Integration tests for diagram renderers

use course_map::core::render::{DiagramRenderer, RenderContext, RenderFormat};
use course_map::core::selection::{Location, MemoryLocation, SelectionController};
use course_map::core::view::{DiagramView, ViewOptions};
use course_map::Catalog;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_every_format_writes_a_file() {
    let catalog = Catalog::builtin().unwrap();
    let view = DiagramView::new(&catalog, ViewOptions::default());
    let mut controller = SelectionController::new(&catalog, MemoryLocation::new("#cs2150"), view);
    controller.restore().unwrap();

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for format in [RenderFormat::Html, RenderFormat::Mermaid, RenderFormat::Json] {
        let path = temp_dir
            .path()
            .join(format!("coursemap.{}", format.extension()));
        let ctx = RenderContext::new(
            controller.listener(),
            controller.location().fragment(),
            "Course Map",
        );
        format
            .renderer()
            .generate(&ctx, &path)
            .unwrap_or_else(|e| panic!("{format} render failed: {e}"));

        let content = fs::read_to_string(&path).expect("output should exist");
        assert!(content.contains("cs2150"), "{format} output misses cs2150");
        assert!(content.contains("cs4414"), "{format} output misses cs4414");
    }
}

#[test]
fn test_generate_into_missing_directory_fails() {
    let catalog = Catalog::builtin().unwrap();
    let view = DiagramView::new(&catalog, ViewOptions::default());
    let ctx = RenderContext::new(&view, "", "Course Map");

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("missing").join("coursemap.json");
    assert!(RenderFormat::Json.renderer().generate(&ctx, &path).is_err());
}

#[test]
fn test_mermaid_marks_selected_node() {
    let catalog = Catalog::builtin().unwrap();
    let view = DiagramView::new(&catalog, ViewOptions::default());
    let mut controller = SelectionController::new(&catalog, MemoryLocation::default(), view);
    controller.select("cs3102").unwrap();

    let ctx = RenderContext::new(controller.listener(), "#cs3102", "Course Map");
    let diagram = RenderFormat::Mermaid.renderer().render(&ctx).unwrap();
    assert!(diagram.contains("class cs3102 selected"));
    assert!(diagram.contains("cs2110 -.-> cs2190"));
}
