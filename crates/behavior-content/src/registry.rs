//! Named leaf factories.
//!
//! Tree definitions refer to leaves by name. A [`LeafRegistry`] maps each
//! name to a factory, and every build asks the factory for a fresh behavior,
//! so two trees built from the same definition never share leaf state.

use std::collections::HashMap;

use behavior_tree::{Behavior, Leaf, Node};

use crate::ContentError;

type LeafFactory<C> = Box<dyn Fn() -> Box<dyn Behavior<C>> + Send + Sync>;

/// Registry of leaf factories keyed by name.
pub struct LeafRegistry<C> {
    factories: HashMap<String, LeafFactory<C>>,
}

impl<C: 'static> LeafRegistry<C> {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers `factory` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::DuplicateLeaf`] if `name` is already taken.
    pub fn register<F, B>(&mut self, name: impl Into<String>, factory: F) -> Result<(), ContentError>
    where
        F: Fn() -> B + Send + Sync + 'static,
        B: Behavior<C> + 'static,
    {
        let name = name.into();
        if self.contains(&name) {
            return Err(ContentError::DuplicateLeaf(name));
        }
        tracing::trace!(leaf = %name, "registered leaf factory");
        self.factories.insert(
            name,
            Box::new(move || -> Box<dyn Behavior<C>> { Box::new(factory()) }),
        );
        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with<F, B>(mut self, name: impl Into<String>, factory: F) -> Result<Self, ContentError>
    where
        F: Fn() -> B + Send + Sync + 'static,
        B: Behavior<C> + 'static,
    {
        self.register(name, factory)?;
        Ok(self)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Builds a fresh leaf labeled with its registry name.
    pub fn instantiate(&self, name: &str) -> Result<Node<C>, ContentError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| ContentError::UnknownLeaf(name.to_owned()))?;
        Ok(Node::Leaf(
            Leaf::from_boxed(factory()).with_label(name.to_owned()),
        ))
    }
}

impl<C: 'static> Default for LeafRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}
