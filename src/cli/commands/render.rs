//! Render command handler
//!
//! Builds the diagram view from configuration, optionally restores a selection
//! from a location fragment, and writes the page in the requested format.

use course_map::config::Config;
use course_map::core::render::{RenderContext, RenderFormat};
use course_map::core::selection::{Location, MemoryLocation, SelectionController};
use course_map::core::view::DiagramView;
use course_map::{error, info, verbose, Catalog};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Page title used by every format
const TITLE: &str = "Course Map";

/// Base name of the output file when `-o` is omitted
const DEFAULT_FILE_STEM: &str = "coursemap";

/// Run the render command.
pub fn run(
    catalog: &Catalog,
    config: &Config,
    format_str: &str,
    fragment: Option<&str>,
    output_file: Option<&Path>,
) {
    match render(catalog, config, format_str, fragment, output_file) {
        Ok((path, fragment)) => {
            println!("✓ Diagram written: {}", path.display());
            if !fragment.is_empty() {
                println!("  Location: {fragment}");
            }
            info!("Diagram exported to: {}", path.display());
        }
        Err(err) => {
            error!("Render failed: {err}");
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn render(
    catalog: &Catalog,
    config: &Config,
    format_str: &str,
    fragment: Option<&str>,
    output_file: Option<&Path>,
) -> Result<(PathBuf, String), String> {
    let format = RenderFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: html, mermaid, or json"))?;
    let options = config
        .view_options()
        .map_err(|e| format!("✗ Invalid layout configuration: {e}"))?;

    let view = DiagramView::new(catalog, options);
    let location = MemoryLocation::new(fragment.unwrap_or_default());
    let mut controller = SelectionController::new(catalog, location, view);
    if let Some(course) = controller.restore() {
        verbose!("Restored selection: {} ({})", course.id, course.title);
    }
    // A static page shows where the centering animation ends
    controller.listener_mut().viewport_mut().finish();

    let output_path = match output_file {
        Some(path) => path.to_path_buf(),
        None => {
            let out_dir = PathBuf::from(&config.paths.out_dir);
            std::fs::create_dir_all(&out_dir).map_err(|e| {
                format!(
                    "✗ Failed to create output directory {}: {e}",
                    out_dir.display()
                )
            })?;
            out_dir.join(format!("{DEFAULT_FILE_STEM}.{}", format.extension()))
        }
    };

    let ctx = RenderContext::new(
        controller.listener(),
        controller.location().fragment(),
        TITLE,
    );
    format
        .renderer()
        .generate(&ctx, &output_path)
        .map_err(|e| format!("✗ Failed to render {format} diagram: {e}"))?;

    Ok((output_path, controller.location().fragment().to_string()))
}
