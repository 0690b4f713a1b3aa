//! Command-line interface entry point for `coursemap`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use course_map::config::Config;
use course_map::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use course_map::{error, info, Catalog};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Into::into)
        .or_else(|| config.logging.level.parse::<Level>().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Render {
            format,
            fragment,
            output,
        } => {
            let catalog = load_catalog();
            commands::render::run(
                &catalog,
                &config,
                &format,
                fragment.as_deref(),
                output.as_deref(),
            );
        }
        Command::Edges { kind } => commands::edges::run(&load_catalog(), kind.as_deref()),
        Command::Show { id } => commands::show::run(&load_catalog(), &config, &id),
    }
}

/// Load the built-in catalog, exiting on validation failure
fn load_catalog() -> Catalog {
    match Catalog::builtin() {
        Ok(catalog) => {
            info!("Loaded {} courses", catalog.len());
            catalog
        }
        Err(e) => {
            error!("Failed to load course catalog: {e}");
            eprintln!("✗ Failed to load course catalog: {e}");
            std::process::exit(1);
        }
    }
}
