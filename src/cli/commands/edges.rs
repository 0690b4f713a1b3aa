//! Edges command handler

use course_map::{derive_edges, error, Catalog, EdgeKind};
use std::str::FromStr;

/// Print derived edges, optionally restricted to one kind
pub fn run(catalog: &Catalog, kind: Option<&str>) {
    let kind = match kind.map(EdgeKind::from_str).transpose() {
        Ok(kind) => kind,
        Err(e) => {
            error!("{e}");
            eprintln!("✗ {e}. Use: prerequisite or corequisite");
            std::process::exit(1);
        }
    };

    let edges = derive_edges(catalog);
    let selected: Vec<_> = match kind {
        Some(kind) => edges.of_kind(kind).iter().collect(),
        None => edges.iter().collect(),
    };

    for edge in &selected {
        println!("{edge}");
    }
    println!("\n{} edges", selected.len());
}
