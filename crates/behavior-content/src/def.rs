//! Serializable tree definitions.

use behavior_tree::builder::{constant, inverter, selector, sequence, until_fail};
use behavior_tree::{Node, Status};

use crate::{ContentError, LeafRegistry};

/// A behavior tree as data.
///
/// Leaves are referenced by name and resolved against a [`LeafRegistry`] at
/// build time.
///
/// # RON Format
///
/// ```text
/// Sequence([
///     UntilFail(Leaf("find_player")),
///     Selector([
///         Sequence([Leaf("player_in_range"), Inverter(Leaf("attack"))]),
///         Leaf("walk_toward_player"),
///     ]),
///     Constant(Success),
/// ])
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TreeDef {
    Sequence(Vec<TreeDef>),
    Selector(Vec<TreeDef>),
    Inverter(Box<TreeDef>),
    UntilFail(Box<TreeDef>),
    Constant(Status),
    Leaf(String),
}

impl TreeDef {
    /// Builds a tree, instantiating every leaf from `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::UnknownLeaf`] for the first leaf name (in
    /// evaluation order) that has no factory.
    pub fn build<C: 'static>(&self, registry: &LeafRegistry<C>) -> Result<Node<C>, ContentError> {
        let node = match self {
            TreeDef::Sequence(children) => sequence(build_all(children, registry)?),
            TreeDef::Selector(children) => selector(build_all(children, registry)?),
            TreeDef::Inverter(child) => inverter(child.build(registry)?),
            TreeDef::UntilFail(child) => until_fail(child.build(registry)?),
            TreeDef::Constant(status) => constant(*status),
            TreeDef::Leaf(name) => registry.instantiate(name)?,
        };
        Ok(node)
    }

    /// Leaf names referenced by this definition, in evaluation order.
    pub fn leaf_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_leaf_names(&mut names);
        names
    }

    fn collect_leaf_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            TreeDef::Sequence(children) | TreeDef::Selector(children) => {
                for child in children {
                    child.collect_leaf_names(names);
                }
            }
            TreeDef::Inverter(child) | TreeDef::UntilFail(child) => {
                child.collect_leaf_names(names);
            }
            TreeDef::Constant(_) => {}
            TreeDef::Leaf(name) => names.push(name),
        }
    }
}

fn build_all<C: 'static>(
    children: &[TreeDef],
    registry: &LeafRegistry<C>,
) -> Result<Vec<Node<C>>, ContentError> {
    children.iter().map(|child| child.build(registry)).collect()
}
