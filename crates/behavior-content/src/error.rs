use behavior_tree::ParseOptimizationsError;

/// Errors raised while turning content into trees.
///
/// No partially built tree is ever returned alongside an error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// A definition names a leaf that has no registered factory.
    #[error("unknown leaf `{0}`: no factory registered under this name")]
    UnknownLeaf(String),

    /// A factory was registered twice under the same name.
    #[error("leaf `{0}` is already registered")]
    DuplicateLeaf(String),

    /// The simplifier configuration names an unknown pass.
    #[error("invalid optimizer configuration: {0}")]
    InvalidOptimizations(#[from] ParseOptimizationsError),
}
