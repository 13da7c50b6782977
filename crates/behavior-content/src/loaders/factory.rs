//! Content factory for building trees from data files.

use std::path::{Path, PathBuf};

use behavior_tree::{Node, Simplifier};

use crate::loaders::{ConfigLoader, LoadResult, TreeLoader};
use crate::{LeafRegistry, OPTIMIZATIONS_ENV, OptimizerConfig, TreeDef};

/// Content factory that loads trees and simplifier settings from a data
/// directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── optimizer.toml   (optional)
/// └── trees/
///     ├── goblin.ron
///     └── guard.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load simplifier configuration.
    ///
    /// Resolution order: `BT_OPTIMIZATIONS` if set, then `optimizer.toml`
    /// if present, then the default.
    pub fn load_optimizer_config(&self) -> LoadResult<OptimizerConfig> {
        let env_value = std::env::var(OPTIMIZATIONS_ENV).ok();
        self.resolve_optimizer_config(env_value.as_deref())
    }

    /// Same resolution as [`load_optimizer_config`](Self::load_optimizer_config),
    /// with the `BT_OPTIMIZATIONS` value supplied by the caller.
    pub fn resolve_optimizer_config(
        &self,
        env_value: Option<&str>,
    ) -> LoadResult<OptimizerConfig> {
        if env_value.is_some() {
            return Ok(OptimizerConfig::from_env_value(env_value));
        }
        let path = self.data_dir.join("optimizer.toml");
        if path.exists() {
            ConfigLoader::load(&path)
        } else {
            Ok(OptimizerConfig::default())
        }
    }

    /// Load a tree definition from `trees/{tree_name}.ron`.
    ///
    /// # Arguments
    ///
    /// * `tree_name` - Name of the tree file (without `.ron` extension)
    pub fn load_tree(&self, tree_name: &str) -> LoadResult<TreeDef> {
        let path = self.data_dir.join("trees").join(format!("{}.ron", tree_name));
        TreeLoader::load(&path)
    }

    /// Load, build and simplify a tree in one step.
    ///
    /// The simplifier passes come from [`load_optimizer_config`](Self::load_optimizer_config).
    pub fn build_tree<C: 'static>(
        &self,
        tree_name: &str,
        registry: &LeafRegistry<C>,
    ) -> LoadResult<Node<C>> {
        let simplifier = self.load_optimizer_config()?.simplifier()?;
        self.build_tree_with(tree_name, registry, simplifier)
    }

    /// Load and build a tree, then simplify it with `simplifier`.
    pub fn build_tree_with<C: 'static>(
        &self,
        tree_name: &str,
        registry: &LeafRegistry<C>,
        simplifier: Simplifier,
    ) -> LoadResult<Node<C>> {
        let tree = self.load_tree(tree_name)?.build(registry)?;
        Ok(simplifier.simplify(tree))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
