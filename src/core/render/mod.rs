//! Output generation for course diagrams
//!
//! Renders a [`DiagramView`] as a self-contained HTML/SVG page, a Mermaid
//! flowchart, or JSON scene data for an external drawing layer.

pub mod html;
pub mod json;
pub mod mermaid;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use mermaid::MermaidRenderer;

use crate::core::error::RenderError;
use crate::core::view::DiagramView;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    /// HTML page with an inline SVG diagram and sidebar
    Html,
    /// Mermaid flowchart wrapped in a Markdown code fence
    Mermaid,
    /// JSON scene data
    Json,
}

impl RenderFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Mermaid => "md",
            Self::Json => "json",
        }
    }

    /// Renderer for this format
    #[must_use]
    pub fn renderer(&self) -> Box<dyn DiagramRenderer> {
        match self {
            Self::Html => Box::new(HtmlRenderer::new()),
            Self::Mermaid => Box::new(MermaidRenderer::new()),
            Self::Json => Box::new(JsonRenderer::new()),
        }
    }
}

impl FromStr for RenderFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" | "htm" | "svg" => Ok(Self::Html),
            "mermaid" | "md" | "markdown" => Ok(Self::Mermaid),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown render format: {s}")),
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Mermaid => write!(f, "mermaid"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Data handed to a renderer
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// The view to draw
    pub view: &'a DiagramView<'a>,
    /// Current location fragment (`#<id>` or empty)
    pub fragment: &'a str,
    /// Page title
    pub title: &'a str,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context
    #[must_use]
    pub const fn new(view: &'a DiagramView<'a>, fragment: &'a str, title: &'a str) -> Self {
        Self {
            view,
            fragment,
            title,
        }
    }
}

/// Trait for diagram renderers
pub trait DiagramRenderer {
    /// Render the diagram to a string
    ///
    /// # Errors
    /// Returns an error if templating or serialization fails
    fn render(&self, ctx: &RenderContext) -> Result<String, RenderError>;

    /// Render the diagram and write it to a file
    ///
    /// # Errors
    /// Returns an error if rendering or writing the file fails
    fn generate(&self, ctx: &RenderContext, output_path: &Path) -> Result<(), RenderError> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }
}
