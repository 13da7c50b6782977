//! Tree node data model.
//!
//! A tree is a closed set of variants ([`Node`]) rather than a collection of
//! type-erased callables, so the evaluator, the simplifier and the printer
//! can all dispatch with an exhaustive `match`. Every node owns its children
//! exclusively; trees are acyclic by construction.

use std::borrow::Cow;

use crate::{Behavior, Composite, Inverter, Status, UntilFail};

/// An opaque leaf: a boxed [`Behavior`] plus an optional label for printing.
pub struct Leaf<C> {
    label: Option<Cow<'static, str>>,
    behavior: Box<dyn Behavior<C>>,
}

impl<C> Leaf<C> {
    /// Creates an unlabeled leaf from any behavior.
    pub fn new<B>(behavior: B) -> Self
    where
        B: Behavior<C> + 'static,
    {
        Self::from_boxed(Box::new(behavior))
    }

    /// Creates an unlabeled leaf from an already boxed behavior.
    pub fn from_boxed(behavior: Box<dyn Behavior<C>>) -> Self {
        Self {
            label: None,
            behavior,
        }
    }

    /// Attaches a label, shown by the printer instead of `LEAF`.
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Invokes the wrapped behavior and returns its status unchanged.
    #[inline]
    pub fn tick(&mut self, ctx: &mut C) -> Status {
        self.behavior.tick(ctx)
    }
}

/// A behavior tree node.
///
/// All nodes of one tree share the context type `C`.
pub enum Node<C> {
    /// Externally supplied behavior, opaque to the simplifier.
    Leaf(Leaf<C>),
    /// Ignores the context and always returns the same status.
    Constant(Status),
    /// Sequence or selector over an ordered list of children.
    Composite(Composite<C>),
    /// Swaps `Success` and `Failure` of its child.
    Inverter(Inverter<C>),
    /// Reports `Running` until its child fails.
    UntilFail(UntilFail<C>),
}

/// Variant identity of a [`Node`], with composites split by mode.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum NodeKind {
    Leaf,
    Constant,
    Sequence,
    Selector,
    Inverter,
    UntilFail,
}

impl<C> Node<C> {
    /// Evaluates this node once against the context.
    ///
    /// Never fails: every [`Status`] is an expected outcome. Composites keep
    /// their resumption cursor across calls, so a tree must be ticked by one
    /// caller at a time, which `&mut self` enforces.
    pub fn tick(&mut self, ctx: &mut C) -> Status {
        match self {
            Node::Leaf(leaf) => leaf.tick(ctx),
            Node::Constant(status) => *status,
            Node::Composite(series) => series.tick(ctx),
            Node::Inverter(inverter) => inverter.tick(ctx),
            Node::UntilFail(until_fail) => until_fail.tick(ctx),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Leaf(_) => NodeKind::Leaf,
            Node::Constant(_) => NodeKind::Constant,
            Node::Composite(series) if series.is_sequence() => NodeKind::Sequence,
            Node::Composite(_) => NodeKind::Selector,
            Node::Inverter(_) => NodeKind::Inverter,
            Node::UntilFail(_) => NodeKind::UntilFail,
        }
    }

    /// Returns `true` if this node is `Constant(status)`.
    #[inline]
    pub fn is_constant(&self, status: Status) -> bool {
        matches!(self, Node::Constant(value) if *value == status)
    }

    pub fn as_composite(&self) -> Option<&Composite<C>> {
        match self {
            Node::Composite(series) => Some(series),
            _ => None,
        }
    }

    pub fn as_inverter(&self) -> Option<&Inverter<C>> {
        match self {
            Node::Inverter(inverter) => Some(inverter),
            _ => None,
        }
    }

    pub fn as_until_fail(&self) -> Option<&UntilFail<C>> {
        match self {
            Node::UntilFail(until_fail) => Some(until_fail),
            _ => None,
        }
    }

    /// Direct children in evaluation order (empty for leaves and constants).
    pub fn children(&self) -> &[Node<C>] {
        match self {
            Node::Leaf(_) | Node::Constant(_) => &[],
            Node::Composite(series) => series.children(),
            Node::Inverter(inverter) => core::slice::from_ref(inverter.child()),
            Node::UntilFail(until_fail) => core::slice::from_ref(until_fail.child()),
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }

    /// Number of levels in this subtree; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Node::depth)
            .max()
            .unwrap_or(0)
    }
}

impl<C> From<Composite<C>> for Node<C> {
    fn from(series: Composite<C>) -> Self {
        Node::Composite(series)
    }
}

impl<C> From<Inverter<C>> for Node<C> {
    fn from(inverter: Inverter<C>) -> Self {
        Node::Inverter(inverter)
    }
}

impl<C> From<UntilFail<C>> for Node<C> {
    fn from(until_fail: UntilFail<C>) -> Self {
        Node::UntilFail(until_fail)
    }
}

impl<C> From<Leaf<C>> for Node<C> {
    fn from(leaf: Leaf<C>) -> Self {
        Node::Leaf(leaf)
    }
}
