//! TOML application config.
//!
//! ```toml
//! policy = "sparse-stop"
//!
//! [building]
//! max_floor    = 12
//! max_requests = 5
//! max_capacity = 4
//! ```
//!
//! Every key is optional; missing keys keep the built-in defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use lift_core::BuildingConfig;
use lift_schedule::TraversalPolicy;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub building: BuildingConfig,
    pub policy:   Option<TraversalPolicy>,
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("in config file {}", path.display()))
    }

    /// Parse and validate.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content).context("TOML parsing error")?;
        config.building.validate()?;
        Ok(config)
    }
}
