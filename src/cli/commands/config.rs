//! Config command handler
//!
//! `get` prints, `set`/`unset` edit and persist, `reset` deletes the user file
//! after a prompt. Failures print a `✗` line and exit non-zero.

use crate::args::ConfigSubcommand;
use course_map::config::Config;
use course_map::{error, info};
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let outcome = match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => {
            print_all(config);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => config
            .get(&key)
            .map(|value| println!("{value}"))
            .ok_or_else(|| format!("Unknown config key: '{key}'")),
        Some(ConfigSubcommand::Set { key, value }) => config
            .set(&key, &value)
            .and_then(|()| persist(config))
            .map(|()| {
                info!("Config {key} set to {value}");
                println!("✓ Set {key} = {value}");
            }),
        Some(ConfigSubcommand::Unset { key }) => config
            .unset(&key, defaults)
            .and_then(|()| persist(config))
            .map(|()| println!("✓ Reset {key} to default")),
        Some(ConfigSubcommand::Reset) => reset(),
    };

    if let Err(message) = outcome {
        eprintln!("✗ {message}");
        std::process::exit(1);
    }
}

fn print_all(config: &Config) {
    println!("\n=== Configuration ===\n");
    print!("{config}");
    println!("\nFile: {}", Config::get_config_file_path().display());
}

fn persist(config: &Config) -> Result<(), String> {
    config.save().map_err(|e| {
        error!("Failed to save config: {e}");
        format!("Failed to save config: {e}")
    })
}

fn reset() -> Result<(), String> {
    let path = Config::get_config_file_path();
    if !path.exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    let question = format!("Delete {} and return to defaults?", path.display());
    if !confirm(&question, &mut io::stdin().lock()) {
        println!("✗ Reset cancelled");
        return Ok(());
    }

    Config::reset().map_err(|e| {
        error!("Failed to remove config file: {e}");
        format!("Failed to remove config file: {e}")
    })?;
    println!("✓ Config reset to defaults");
    Ok(())
}

/// Ask a yes/no question; anything but `y`/`yes` is a no
fn confirm(question: &str, input: &mut impl BufRead) -> bool {
    print!("{question} (y/n): ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if input.read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
