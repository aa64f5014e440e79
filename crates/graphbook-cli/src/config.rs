//! Configuration file loading for the CLI
//!
//! This module finds the TOML configuration file, loads it, and rejects
//! `[diagrams]` names that could never be typed back on the command line.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use graphbook::{GraphbookError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Invalid diagram name {0:?} in [diagrams]: names must be non-empty without surrounding whitespace")]
    InvalidDiagramName(String),
}

impl From<ConfigError> for GraphbookError {
    fn from(err: ConfigError) -> Self {
        GraphbookError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (graphbook/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path to config file
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, GraphbookError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("graphbook/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("com", "graphbook", "graphbook") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
/// - A `[diagrams]` name is blank or padded with whitespace
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, GraphbookError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    check_diagram_names(&config)?;

    debug!(custom_diagrams = config.diagrams().len(); "Configuration loaded");
    Ok(config)
}

/// Rejects diagram names that resolution could never match from user input.
fn check_diagram_names(config: &AppConfig) -> Result<(), ConfigError> {
    match config
        .diagrams()
        .keys()
        .find(|name| name.trim().is_empty() || name.trim() != name.as_str())
    {
        Some(name) => Err(ConfigError::InvalidDiagramName(name.clone())),
        None => Ok(()),
    }
}
