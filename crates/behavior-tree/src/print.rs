//! Text rendering of trees.
//!
//! `Display` renders a tree as nested, indented text, one node per line:
//!
//! ```text
//! sequence(
//!     find_player,
//!     inverter(
//!         LEAF,
//!     ),
//! ),
//! ```
//!
//! `Debug` renders the same structure on one line.

use core::fmt;

use crate::{Composite, Inverter, Leaf, Node, UntilFail};

const INDENT: usize = 4;

impl<C> fmt::Display for Node<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}

fn write_node<C>(f: &mut fmt::Formatter<'_>, node: &Node<C>, depth: usize) -> fmt::Result {
    let pad = depth * INDENT;
    match node {
        Node::Leaf(leaf) => writeln!(f, "{:pad$}{},", "", leaf.label().unwrap_or("LEAF")),
        Node::Constant(status) => writeln!(f, "{:pad$}{status},", ""),
        Node::Composite(_) | Node::Inverter(_) | Node::UntilFail(_) => {
            writeln!(f, "{:pad$}{}(", "", node.kind())?;
            for child in node.children() {
                write_node(f, child, depth + 1)?;
            }
            writeln!(f, "{:pad$}),", "")
        }
    }
}

impl<C> fmt::Debug for Node<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(leaf) => fmt::Debug::fmt(leaf, f),
            Node::Constant(status) => f.debug_tuple("Constant").field(status).finish(),
            Node::Composite(series) => fmt::Debug::fmt(series, f),
            Node::Inverter(inverter) => fmt::Debug::fmt(inverter, f),
            Node::UntilFail(until_fail) => fmt::Debug::fmt(until_fail, f),
        }
    }
}

impl<C> fmt::Debug for Leaf<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.debug_tuple("Leaf").field(&label).finish(),
            None => f.write_str("Leaf"),
        }
    }
}

impl<C> fmt::Debug for Composite<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.is_sequence() {
            "Sequence"
        } else {
            "Selector"
        };
        f.debug_tuple(name).field(&self.children()).finish()
    }
}

impl<C> fmt::Debug for Inverter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Inverter").field(self.child()).finish()
    }
}

impl<C> fmt::Debug for UntilFail<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UntilFail").field(self.child()).finish()
    }
}
