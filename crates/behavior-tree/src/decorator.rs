//! Decorator behavior nodes.
//!
//! Decorators wrap a single child node and modify its result.
//! This module provides [`Inverter`] (NOT logic) and [`UntilFail`] (retry
//! until the child fails).

use crate::{Node, Status};

/// Inverts the result of its child.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` is passed through unchanged
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<C> {
    child: Box<Node<C>>,
}

impl<C> Inverter<C> {
    /// Creates a new inverter that wraps the given child.
    pub fn new(child: Node<C>) -> Self {
        Self {
            child: Box::new(child),
        }
    }

    pub fn child(&self) -> &Node<C> {
        &self.child
    }

    pub fn into_child(self) -> Node<C> {
        *self.child
    }

    #[inline]
    pub fn tick(&mut self, ctx: &mut C) -> Status {
        self.child.tick(ctx).flip()
    }
}

/// Keeps running until its child fails.
///
/// # Semantics
///
/// - If the child returns `Failure`, returns `Success`
/// - If the child returns `Success` or `Running`, **returns `Running`**
///
/// A child success is never reported upwards; the decorator is considered in
/// progress for as long as the child has not failed. This is useful for loops
/// such as "keep searching while a target is visible".
pub struct UntilFail<C> {
    child: Box<Node<C>>,
}

impl<C> UntilFail<C> {
    /// Creates a new until-fail loop around the given child.
    pub fn new(child: Node<C>) -> Self {
        Self {
            child: Box::new(child),
        }
    }

    pub fn child(&self) -> &Node<C> {
        &self.child
    }

    pub fn into_child(self) -> Node<C> {
        *self.child
    }

    pub fn tick(&mut self, ctx: &mut C) -> Status {
        match self.child.tick(ctx) {
            Status::Failure => Status::Success,
            Status::Success | Status::Running => Status::Running,
        }
    }
}
