//! Configuration module for `coursemap`

use crate::core::layout::{Layout, INTER_LEVEL_SPACING, INTRA_LEVEL_SPACING, NODE_RADIUS};
use crate::core::view::{ViewOptions, DEFAULT_DIRECTORY_HOST};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory
const DIR_VARIABLE: &str = "$COURSE_MAP";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

const fn default_intra_level_spacing() -> f64 {
    INTRA_LEVEL_SPACING
}

const fn default_inter_level_spacing() -> f64 {
    INTER_LEVEL_SPACING
}

const fn default_node_radius() -> f64 {
    NODE_RADIUS
}

/// Diagram spacing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Horizontal distance between sibling courses
    #[serde(default = "default_intra_level_spacing")]
    pub intra_level_spacing: f64,
    /// Vertical distance between levels
    #[serde(default = "default_inter_level_spacing")]
    pub inter_level_spacing: f64,
    /// Node circle radius
    #[serde(default = "default_node_radius")]
    pub node_radius: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            intra_level_spacing: INTRA_LEVEL_SPACING,
            inter_level_spacing: INTER_LEVEL_SPACING,
            node_radius: NODE_RADIUS,
        }
    }
}

/// Outbound link configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Host of the course directory site
    #[serde(default)]
    pub directory_host: String,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for rendered diagrams
    #[serde(default)]
    pub out_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Layout settings
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Link settings
    #[serde(default)]
    pub links: LinksConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override course directory host
    pub directory_host: Option<String>,
    /// Override output directory
    pub out_dir: Option<String>,
}

impl Config {
    /// Get the `$COURSE_MAP` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/coursemap`
    /// - macOS: `~/Library/Application Support/coursemap`
    /// - Windows: `%APPDATA%\coursemap`
    #[must_use]
    pub fn get_coursemap_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("coursemap")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// updated. Layout values are filled by serde defaults while parsing.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.links.directory_host.is_empty() && !defaults.links.directory_host.is_empty() {
            self.links
                .directory_host
                .clone_from(&defaults.links.directory_host);
            changed = true;
        }

        if self.paths.out_dir.is_empty() && !defaults.paths.out_dir.is_empty() {
            self.paths.out_dir.clone_from(&defaults.paths.out_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values; nothing is persisted.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(host) = &overrides.directory_host {
            self.links.directory_host.clone_from(host);
        }

        if let Some(out_dir) = &overrides.out_dir {
            self.paths.out_dir = Self::expand_variables(out_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_coursemap_dir`](Self::get_coursemap_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_coursemap_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$COURSE_MAP` to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_coursemap_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults. `$COURSE_MAP` is expanded in
    /// path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.out_dir = Self::expand_variables(&config.paths.out_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the compiled-in default configuration is invalid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// An existing file has missing fields merged in from the defaults and is
    /// re-saved. On first run the directory and file are created. Any read or
    /// parse failure falls back to the defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if serialization fails, or the config directory or file
    /// cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `intra_level_spacing`,
    /// `inter_level_spacing`, `node_radius`, `directory_host`, `out_dir`.
    /// Dashed spellings are accepted too.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "intra_level_spacing" | "intra-level-spacing" => {
                Some(self.layout.intra_level_spacing.to_string())
            }
            "inter_level_spacing" | "inter-level-spacing" => {
                Some(self.layout.inter_level_spacing.to_string())
            }
            "node_radius" | "node-radius" => Some(self.layout.node_radius.to_string()),
            "directory_host" | "directory-host" => Some(self.links.directory_host.clone()),
            "out_dir" | "out-dir" => Some(self.paths.out_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config. Call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized, or the value cannot be
    /// parsed (a non-boolean `verbose`, a non-positive spacing).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "intra_level_spacing" | "intra-level-spacing" => {
                self.layout.intra_level_spacing = Self::parse_positive(key, value)?;
            }
            "inter_level_spacing" | "inter-level-spacing" => {
                self.layout.inter_level_spacing = Self::parse_positive(key, value)?;
            }
            "node_radius" | "node-radius" => {
                self.layout.node_radius = Self::parse_positive(key, value)?;
            }
            "directory_host" | "directory-host" => {
                self.links.directory_host = value.to_string();
            }
            "out_dir" | "out-dir" => self.paths.out_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    fn parse_positive(key: &str, value: &str) -> Result<f64, String> {
        match value.parse::<f64>() {
            Ok(number) if number.is_finite() && number > 0.0 => Ok(number),
            _ => Err(format!("Invalid positive number for '{key}': '{value}'")),
        }
    }

    /// Unset a configuration value by key (reset to its value in `defaults`)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "intra_level_spacing" | "intra-level-spacing" => {
                self.layout.intra_level_spacing = defaults.layout.intra_level_spacing;
            }
            "inter_level_spacing" | "inter-level-spacing" => {
                self.layout.inter_level_spacing = defaults.layout.inter_level_spacing;
            }
            "node_radius" | "node-radius" => {
                self.layout.node_radius = defaults.layout.node_radius;
            }
            "directory_host" | "directory-host" => self
                .links
                .directory_host
                .clone_from(&defaults.links.directory_host),
            "out_dir" | "out-dir" => self.paths.out_dir.clone_from(&defaults.paths.out_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Layout built from the `[layout]` section
    ///
    /// # Errors
    /// Returns an error if a spacing value is not a finite positive number
    pub fn layout(&self) -> Result<Layout, String> {
        Layout::new(
            self.layout.intra_level_spacing,
            self.layout.inter_level_spacing,
            self.layout.node_radius,
        )
    }

    /// View settings built from this config
    ///
    /// An empty `directory_host` falls back to the built-in host.
    ///
    /// # Errors
    /// Returns an error if the layout section is invalid
    pub fn view_options(&self) -> Result<ViewOptions, String> {
        let directory_host = if self.links.directory_host.is_empty() {
            DEFAULT_DIRECTORY_HOST.to_string()
        } else {
            self.links.directory_host.clone()
        };
        Ok(ViewOptions {
            layout: self.layout()?,
            directory_host,
            ..ViewOptions::default()
        })
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[layout]")?;
        writeln!(
            f,
            "  intra_level_spacing = {}",
            self.layout.intra_level_spacing
        )?;
        writeln!(
            f,
            "  inter_level_spacing = {}",
            self.layout.inter_level_spacing
        )?;
        writeln!(f, "  node_radius = {}", self.layout.node_radius)?;

        writeln!(f, "\n[links]")?;
        writeln!(f, "  directory_host = \"{}\"", self.links.directory_host)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  out_dir = \"{}\"", self.paths.out_dir)?;

        Ok(())
    }
}
