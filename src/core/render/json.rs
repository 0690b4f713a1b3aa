//! JSON export of the render surface

use super::{DiagramRenderer, RenderContext};
use crate::core::error::RenderError;
use crate::core::layout::Point;
use crate::core::view::{Scene, Sidebar, Transform};
use serde::Serialize;

/// Shape of the exported document
#[derive(Debug, Serialize)]
struct SceneDocument<'a> {
    title: &'a str,
    fragment: &'a str,
    transform: Transform,
    bounds: Option<Bounds>,
    scene: &'a Scene,
    sidebar: Option<&'a Sidebar>,
}

/// Extent of the drawn nodes on the plane
#[derive(Debug, Serialize)]
struct Bounds {
    min: Point,
    max: Point,
}

/// Serializes nodes, edges, viewport and sidebar as pretty-printed JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    /// Create a new JSON renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiagramRenderer for JsonRenderer {
    fn render(&self, ctx: &RenderContext) -> Result<String, RenderError> {
        let document = SceneDocument {
            title: ctx.title,
            fragment: ctx.fragment,
            transform: ctx.view.viewport().transform(),
            bounds: ctx
                .view
                .scene()
                .bounds()
                .map(|(min, max)| Bounds { min, max }),
            scene: ctx.view.scene(),
            sidebar: ctx.view.sidebar(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Catalog;
    use crate::core::selection::{MemoryLocation, SelectionController};
    use crate::core::view::{DiagramView, ViewOptions};

    #[test]
    fn test_json_contains_scene_and_sidebar() {
        let catalog = Catalog::builtin().unwrap();
        let view = DiagramView::new(&catalog, ViewOptions::default());
        let mut controller = SelectionController::new(&catalog, MemoryLocation::default(), view);
        controller.select("cs2102").unwrap();

        let view = controller.listener();
        let ctx = RenderContext::new(view, "#cs2102", "Course Map");
        let json = JsonRenderer::new().render(&ctx).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["fragment"], "#cs2102");
        assert_eq!(value["sidebar"]["id"], "cs2102");
        assert_eq!(
            value["scene"]["nodes"].as_array().unwrap().len(),
            catalog.len()
        );
        let selected: Vec<&serde_json::Value> = value["scene"]["nodes"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|node| node["selected"] == true)
            .collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0]["style"], "core");
        assert_eq!(value["scene"]["edges"][0]["kind"], "prerequisite");
        // cs1110 sits at slot -4, level 0; cs4414 at level 4
        assert_eq!(value["bounds"]["min"]["x"], -430.0);
        assert_eq!(value["bounds"]["min"]["y"], -30.0);
        assert_eq!(value["bounds"]["max"]["y"], 830.0);
    }
}
