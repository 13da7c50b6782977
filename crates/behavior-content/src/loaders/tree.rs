//! Tree definition loader.

use std::path::Path;

use crate::TreeDef;
use crate::loaders::{LoadResult, read_file};

/// Loader for tree definitions from RON files.
pub struct TreeLoader;

impl TreeLoader {
    /// Load a single tree definition from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing one [`TreeDef`]
    pub fn load(path: &Path) -> LoadResult<TreeDef> {
        let content = read_file(path)?;
        let def = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;
        tracing::debug!(path = %path.display(), leaves = def.leaf_names().len(), "loaded tree");
        Ok(def)
    }

    /// Parse a single tree definition from RON text.
    pub fn parse(content: &str) -> LoadResult<TreeDef> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse tree RON: {}", e))
    }

    /// Load a catalog of named trees from a RON file.
    ///
    /// RON format: `Vec<(String, TreeDef)>`
    ///
    /// # Returns
    ///
    /// Returns a Vec of (tree_name, TreeDef) in file order.
    pub fn load_catalog(path: &Path) -> LoadResult<Vec<(String, TreeDef)>> {
        let content = read_file(path)?;
        let catalog: Vec<(String, TreeDef)> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tree catalog RON: {}", e))?;
        tracing::debug!(path = %path.display(), trees = catalog.len(), "loaded tree catalog");
        Ok(catalog)
    }
}
