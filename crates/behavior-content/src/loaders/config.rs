//! Simplifier configuration loader.

use std::path::Path;

use crate::OptimizerConfig;
use crate::loaders::{LoadResult, read_file};

/// Loader for simplifier configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing OptimizerConfig
    ///
    /// # Returns
    ///
    /// Returns an OptimizerConfig. Missing keys take their defaults.
    pub fn load(path: &Path) -> LoadResult<OptimizerConfig> {
        let content = read_file(path)?;
        let config: OptimizerConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
