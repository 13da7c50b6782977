//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose
//! `Node::Composite(Composite::sequence(vec![...]))`, you can use shorter
//! functions like `sequence(vec![...])`.

use core::fmt;
use std::borrow::Cow;

use crate::{Behavior, Composite, Fallible, Inverter, Leaf, Node, Status, UntilFail};

/// Creates an unlabeled leaf node.
#[inline]
pub fn leaf<C, B>(behavior: B) -> Node<C>
where
    B: Behavior<C> + 'static,
{
    Node::Leaf(Leaf::new(behavior))
}

/// Creates a leaf node that prints as `label`.
#[inline]
pub fn named_leaf<C, B>(label: impl Into<Cow<'static, str>>, behavior: B) -> Node<C>
where
    B: Behavior<C> + 'static,
{
    Node::Leaf(Leaf::new(behavior).with_label(label))
}

/// Creates a leaf from a fallible closure; errors tick as `Failure`.
///
/// Shorthand for `leaf(Fallible::new(f))`.
#[inline]
pub fn fallible_leaf<C, F, E>(f: F) -> Node<C>
where
    F: FnMut(&mut C) -> Result<Status, E> + Send + 'static,
    E: fmt::Display + 'static,
{
    Node::Leaf(Leaf::new(Fallible::new(f)))
}

/// Creates a node that always returns `status`.
#[inline]
pub fn constant<C>(status: Status) -> Node<C> {
    Node::Constant(status)
}

/// Shorthand for `constant(Status::Success)`.
#[inline]
pub fn succeed<C>() -> Node<C> {
    Node::Constant(Status::Success)
}

/// Shorthand for `constant(Status::Failure)`.
#[inline]
pub fn fail<C>() -> Node<C> {
    Node::Constant(Status::Failure)
}

/// Creates a sequence node.
///
/// Shorthand for `Node::Composite(Composite::sequence(children))`.
#[inline]
pub fn sequence<C>(children: Vec<Node<C>>) -> Node<C> {
    Node::Composite(Composite::sequence(children))
}

/// Creates a selector node.
///
/// Shorthand for `Node::Composite(Composite::selector(children))`.
#[inline]
pub fn selector<C>(children: Vec<Node<C>>) -> Node<C> {
    Node::Composite(Composite::selector(children))
}

/// Creates an inverter node.
///
/// Shorthand for `Node::Inverter(Inverter::new(child))`.
#[inline]
pub fn inverter<C>(child: Node<C>) -> Node<C> {
    Node::Inverter(Inverter::new(child))
}

/// Creates an until-fail node.
///
/// Shorthand for `Node::UntilFail(UntilFail::new(child))`.
#[inline]
pub fn until_fail<C>(child: Node<C>) -> Node<C> {
    Node::UntilFail(UntilFail::new(child))
}
