//! Mermaid diagram generator for course maps
//!
//! Generates Mermaid flowchart syntax that can be embedded in Markdown files
//! and rendered by GitHub, GitLab, and other Markdown viewers. Prerequisites are
//! solid arrows, corequisites dashed.

use super::{DiagramRenderer, RenderContext};
use crate::core::error::RenderError;
use crate::core::models::EdgeKind;
use crate::core::view::{Scene, StyleClass};
use std::fmt::Write;

/// Generator for Mermaid diagram syntax
#[derive(Debug, Clone, Copy, Default)]
pub struct MermaidRenderer;

impl MermaidRenderer {
    /// Create a new Mermaid renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generate a top-down flowchart from a scene
    #[must_use]
    pub fn generate_scene(scene: &Scene) -> String {
        let mut output = String::from("```mermaid\nflowchart TB\n");

        for node in &scene.nodes {
            let safe_id = Self::sanitize_id(&node.id);
            let label = Self::escape_label(&node.label);
            let title = Self::escape_label(&node.title);
            let _ = writeln!(output, "    {safe_id}((\"{label}<br/>{title}\"))");
        }

        output.push('\n');

        for edge in &scene.edges {
            let arrow = match edge.kind {
                EdgeKind::Prerequisite => "-->",
                EdgeKind::Corequisite => "-.->",
            };
            let _ = writeln!(
                output,
                "    {} {arrow} {}",
                Self::sanitize_id(&edge.source_id),
                Self::sanitize_id(&edge.target_id)
            );
        }

        output.push('\n');
        for style in [StyleClass::Core, StyleClass::CoreOneOf, StyleClass::Elective] {
            let text = if style == StyleClass::CoreOneOf {
                "#000"
            } else {
                "#fff"
            };
            let _ = writeln!(
                output,
                "    classDef {} fill:{},color:{text}",
                Self::class_name(style),
                style.fill()
            );
        }
        let _ = writeln!(output, "    classDef selected stroke:#e67e22,stroke-width:4px");

        for style in [StyleClass::Core, StyleClass::CoreOneOf, StyleClass::Elective] {
            let members: Vec<String> = scene
                .nodes
                .iter()
                .filter(|node| node.style == style)
                .map(|node| Self::sanitize_id(&node.id))
                .collect();
            if !members.is_empty() {
                let _ = writeln!(output, "    class {} {}", members.join(","), Self::class_name(style));
            }
        }

        if let Some(selected) = scene.selected() {
            let _ = writeln!(output, "    class {} selected", Self::sanitize_id(&selected.id));
        }

        output.push_str("```\n");
        output
    }

    /// Mermaid class names cannot contain dashes
    const fn class_name(style: StyleClass) -> &'static str {
        match style {
            StyleClass::Core => "core",
            StyleClass::CoreOneOf => "coreOneOf",
            StyleClass::Elective => "elective",
        }
    }

    /// Sanitize a course id for use as a Mermaid node ID
    ///
    /// ASCII letters and digits pass through; any other character becomes
    /// `_<hex code point>_`, so distinct ids never share a node.
    fn sanitize_id(id: &str) -> String {
        let mut safe = String::with_capacity(id.len());
        for c in id.chars() {
            if c.is_ascii_alphanumeric() {
                safe.push(c);
            } else {
                let _ = write!(safe, "_{:x}_", u32::from(c));
            }
        }
        safe
    }

    fn escape_label(label: &str) -> String {
        label.replace('"', "#quot;")
    }
}

impl DiagramRenderer for MermaidRenderer {
    fn render(&self, ctx: &RenderContext) -> Result<String, RenderError> {
        Ok(Self::generate_scene(ctx.view.scene()))
    }
}
