//! Loading and validating `cinnabar.toml` files.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::Path;

/// Loads `cinnabar.toml` from the given project directory.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let path = project_dir.join("cinnabar.toml");
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses a configuration from TOML text.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project.name.is_empty() {
        return Err(ConfigError::Validation(
            "project.name must not be empty".to_string(),
        ));
    }
    if config.layout.gate_spacing < 1 {
        return Err(ConfigError::Validation(
            "layout.gate_spacing must be at least 1".to_string(),
        ));
    }
    if config.layout.max_wire_run < 1 {
        return Err(ConfigError::Validation(
            "layout.max_wire_run must be at least 1".to_string(),
        ));
    }
    if config.layout.lane_spacing < 1 {
        return Err(ConfigError::Validation(
            "layout.lane_spacing must be at least 1".to_string(),
        ));
    }
    Ok(())
}
