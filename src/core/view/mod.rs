//! The view: consumes catalog, edges and layout, reacts to selection changes
//!
//! [`DiagramView`] is the one listener a
//! [`SelectionController`](crate::core::selection::SelectionController) notifies.
//! On each change it moves the highlight, rebuilds the sidebar and starts a
//! centering animation on the selected node.

pub mod scene;
pub mod sidebar;
pub mod viewport;

pub use scene::{EdgeView, NodeView, Scene, StyleClass};
pub use sidebar::{CourseLink, RelatedCourse, Sidebar, DEFAULT_DIRECTORY_HOST};
pub use viewport::{Transform, Transition, Viewport};

use crate::core::layout::Layout;
use crate::core::models::{derive_edges, Catalog, Course};
use crate::core::selection::SelectionListener;

/// Settings for building a view
#[derive(Debug, Clone, PartialEq)]
pub struct ViewOptions {
    /// Grid spacing and node radius
    pub layout: Layout,
    /// Host used for outbound course links
    pub directory_host: String,
    /// Window width
    pub width: f64,
    /// Window height
    pub height: f64,
    /// Length of the centering animation on selection
    pub transition_ms: u32,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            directory_host: DEFAULT_DIRECTORY_HOST.to_string(),
            width: 1280.0,
            height: 800.0,
            transition_ms: 750,
        }
    }
}

/// Drawable state of the whole diagram
#[derive(Debug, Clone)]
pub struct DiagramView<'a> {
    catalog: &'a Catalog,
    options: ViewOptions,
    scene: Scene,
    viewport: Viewport,
    sidebar: Option<Sidebar>,
}

impl<'a> DiagramView<'a> {
    /// Build the scene for a catalog with nothing selected
    #[must_use]
    pub fn new(catalog: &'a Catalog, options: ViewOptions) -> Self {
        let edges = derive_edges(catalog);
        let scene = Scene::build(catalog, &edges, &options.layout);
        let viewport = Viewport::new(options.width, options.height);
        Self {
            catalog,
            options,
            scene,
            viewport,
            sidebar: None,
        }
    }

    /// Positioned nodes and edges
    #[must_use]
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Pan/zoom state
    #[must_use]
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable pan/zoom state, for gesture handling
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Sidebar content for the selected course
    #[must_use]
    pub const fn sidebar(&self) -> Option<&Sidebar> {
        self.sidebar.as_ref()
    }

    /// Settings the view was built with
    #[must_use]
    pub const fn options(&self) -> &ViewOptions {
        &self.options
    }

    /// Catalog being drawn
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }
}

impl SelectionListener for DiagramView<'_> {
    fn selection_changed(&mut self, course: Option<&Course>) {
        self.scene.set_selected(course.map(|c| c.id.as_str()));
        self.sidebar =
            course.map(|c| Sidebar::for_course(c, self.catalog, &self.options.directory_host));

        if let Some(node) = course.and_then(|c| self.scene.node(&c.id)) {
            let target = node.point();
            self.viewport.center_on(target, self.options.transition_ms);
        }
    }
}
