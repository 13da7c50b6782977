//! Simplifier configuration.
use std::env;

use behavior_tree::{Optimizations, Simplifier};

use crate::ContentError;

/// Environment variable overriding the configured passes.
pub const OPTIMIZATIONS_ENV: &str = "BT_OPTIMIZATIONS";

/// Which simplifier passes to apply to loaded trees.
///
/// # TOML Format
///
/// ```toml
/// passes = ["quick", "flatten_series"]
/// ```
///
/// Entries are pass names (`unwrap_inverters`, `minimize_series_inversion`,
/// `flatten_series`, `unwrap_series`, `remove_unreachable`) or presets
/// (`none`, `quick`, `all`). Defaults to `["quick"]`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub passes: Vec<String>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            passes: vec!["quick".to_owned()],
        }
    }
}

impl OptimizerConfig {
    pub fn new(passes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            passes: passes.into_iter().map(Into::into).collect(),
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BT_OPTIMIZATIONS` - Comma-separated pass/preset names (default: quick)
    pub fn from_env() -> Self {
        Self::from_env_value(env::var(OPTIMIZATIONS_ENV).ok().as_deref())
    }

    /// Builds configuration from an already-read `BT_OPTIMIZATIONS` value.
    pub(crate) fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(list) => Self::new(
                list.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty()),
            ),
            None => Self::default(),
        }
    }

    /// Resolves the configured names into a pass set.
    pub fn optimizations(&self) -> Result<Optimizations, ContentError> {
        Ok(Optimizations::from_names(&self.passes)?)
    }

    pub fn simplifier(&self) -> Result<Simplifier, ContentError> {
        self.optimizations().map(Simplifier::new)
    }
}
