//! Show command handler
//!
//! Prints the sidebar content for one course: title, related courses, the
//! edges it takes part in, and outbound directory links.

use course_map::config::Config;
use course_map::core::view::{RelatedCourse, Sidebar, DEFAULT_DIRECTORY_HOST};
use course_map::{derive_edges, error, Catalog, SelectionError};

/// Print details for the course `id`
pub fn run(catalog: &Catalog, config: &Config, id: &str) {
    let Some(course) = catalog.get(id) else {
        let err = SelectionError::UnknownCourse(id.to_string());
        error!("{err}");
        eprintln!("✗ {err}");
        std::process::exit(1);
    };

    let host = if config.links.directory_host.is_empty() {
        DEFAULT_DIRECTORY_HOST
    } else {
        config.links.directory_host.as_str()
    };
    let sidebar = Sidebar::for_course(course, catalog, host);

    println!("\n=== {} ===", sidebar.label);
    println!("{}", sidebar.title);
    print_related("Prerequisites", &sidebar.prerequisites);
    print_related("Corequisites", &sidebar.corequisites);
    print_related("Satisfied by", &sidebar.realizations);
    print_related("Required for", &sidebar.unlocks);

    let edges = derive_edges(catalog);
    let touching: Vec<_> = edges.touching(&course.id).collect();
    if !touching.is_empty() {
        println!("\nEdges:");
        for edge in touching {
            println!("  {edge}");
        }
    }

    if !sidebar.links.is_empty() {
        println!("\nCourse pages:");
        for link in &sidebar.links {
            println!("  {}: {}", link.label, link.url);
        }
    }
}

fn print_related(heading: &str, courses: &[RelatedCourse]) {
    if courses.is_empty() {
        return;
    }
    println!("\n{heading}:");
    for course in courses {
        println!("  {} - {}", course.id, course.title);
    }
}
