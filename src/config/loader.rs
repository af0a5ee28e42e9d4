// file: src/config/loader.rs
// version: 1.0.0
// guid: 8a53d2b9-0e67-4f14-92cd-6b1a84e7f520

//! Configuration file loading

use super::AgentConfig;
use crate::Result;
use std::fs;
use std::path::Path;

/// Loader for agent configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self
    }

    /// Load agent configuration from a YAML file
    pub fn load_agent_config<P: AsRef<Path>>(&self, path: P) -> Result<AgentConfig> {
        let content = fs::read_to_string(&path).map_err(|e| {
            crate::error::AgentError::config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: AgentConfig = serde_yaml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from an optional path, falling back to defaults
    pub fn load_or_default(&self, path: Option<&str>) -> Result<AgentConfig> {
        match path {
            Some(p) => self.load_agent_config(p),
            None => Ok(AgentConfig::default()),
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
