//! HTML diagram renderer
//!
//! Produces a self-contained page: an inline SVG of the course map under the
//! current pan/zoom transform, plus the sidebar for the selected course. Nodes
//! are anchors to `#<id>`, so clicking one updates the location fragment.

use super::{DiagramRenderer, RenderContext};
use crate::core::error::RenderError;
use crate::core::models::EdgeKind;
use crate::core::view::{Sidebar, StyleClass};
use askama::Template;

/// Legend entries shown under the diagram
const LEGEND: [(StyleClass, &str); 3] = [
    (StyleClass::Core, "Core course"),
    (StyleClass::CoreOneOf, "Satisfies a core requirement"),
    (StyleClass::Elective, "Other course"),
];

/// Template row for one node
struct PageNode {
    id: String,
    label: String,
    title: String,
    classes: String,
    fill: &'static str,
    x: String,
    y: String,
}

/// Template row for one legend entry
struct LegendEntry {
    fill: &'static str,
    text: &'static str,
}

/// Template row for one edge
struct PageEdge {
    class: &'static str,
    x1: String,
    y1: String,
    x2: String,
    y2: String,
}

#[derive(Template)]
#[template(path = "diagram.html")]
struct DiagramPage<'a> {
    title: &'a str,
    fragment: &'a str,
    width: String,
    height: String,
    transform: String,
    radius: String,
    nodes: Vec<PageNode>,
    edges: Vec<PageEdge>,
    sidebar: Option<&'a Sidebar>,
    legend: Vec<LegendEntry>,
}

/// HTML renderer backed by an askama template
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Create a new HTML renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn page<'a>(ctx: &RenderContext<'a>) -> DiagramPage<'a> {
        let view = ctx.view;
        let scene = view.scene();
        let viewport = view.viewport();
        let t = viewport.transform();

        let nodes = scene
            .nodes
            .iter()
            .map(|node| PageNode {
                id: node.id.clone(),
                label: node.label.clone(),
                title: node.title.clone(),
                classes: node.classes(),
                fill: node.style.fill(),
                x: format_coord(node.x),
                y: format_coord(node.y),
            })
            .collect();

        let edges = scene
            .edges
            .iter()
            .map(|edge| PageEdge {
                class: match edge.kind {
                    EdgeKind::Prerequisite => "edge prerequisite",
                    EdgeKind::Corequisite => "edge corequisite",
                },
                x1: format_coord(edge.source.x),
                y1: format_coord(edge.source.y),
                x2: format_coord(edge.target.x),
                y2: format_coord(edge.target.y),
            })
            .collect();

        DiagramPage {
            title: ctx.title,
            fragment: ctx.fragment,
            width: format_coord(viewport.width),
            height: format_coord(viewport.height),
            transform: format!(
                "translate({} {}) scale({})",
                format_coord(t.x),
                format_coord(t.y),
                format_coord(t.k)
            ),
            radius: format_coord(scene.radius),
            nodes,
            edges,
            sidebar: view.sidebar(),
            legend: LEGEND
                .iter()
                .map(|&(style, text)| LegendEntry {
                    fill: style.fill(),
                    text,
                })
                .collect(),
        }
    }
}

/// Trim trailing zeros so whole numbers print without a fraction
fn format_coord(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

impl DiagramRenderer for HtmlRenderer {
    fn render(&self, ctx: &RenderContext) -> Result<String, RenderError> {
        Ok(Self::page(ctx).render()?)
    }
}
