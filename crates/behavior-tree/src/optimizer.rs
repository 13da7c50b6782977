//! Tree simplifier.
//!
//! [`Simplifier`] rewrites a tree into a smaller tree that produces the same
//! status stream, tick for tick, and the same sequence of leaf invocations.
//! Each rewrite is a local pass at one node, enabled through
//! [`Optimizations`]:
//!
//! | Pass | Applies to | Rewrite |
//! |------|------------|---------|
//! | `FLATTEN_SERIES` | composite | `seq(seq(a, b), c)` → `seq(a, b, c)` |
//! | `REMOVE_UNREACHABLE` | composite | drop children after a short-circuiting constant, drop pass-through constants |
//! | `UNWRAP_SERIES` | composite | `seq()` → `success`, `seq(a)` → `a` |
//! | `MINIMIZE_SERIES_INVERSION` | composite | `seq(!a, !b, !c)` → `!sel(a, b, c)` |
//! | `UNWRAP_INVERTERS` | inverter | `!!a` → `a` |
//!
//! Composite passes run in the order of the table. The traversal is bottom-up,
//! so every pass sees already simplified children.

use core::str::FromStr;

use bitflags::bitflags;

use crate::{Composite, Inverter, Node, Status, UntilFail};

bitflags! {
    /// A set of enabled simplifier passes.
    ///
    /// Passes are independent; any subset may be enabled.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Optimizations: u8 {
        /// Collapse `inverter(inverter(x))` into `x`.
        const UNWRAP_INVERTERS          = 1 << 0;
        /// Factor a shared negation out of a majority-inverted composite.
        const MINIMIZE_SERIES_INVERSION = 1 << 1;
        /// Splice same-mode child composites into their parent.
        const FLATTEN_SERIES            = 1 << 2;
        /// Replace empty and single-child composites.
        const UNWRAP_SERIES             = 1 << 3;
        /// Drop children that can never run or never matter.
        const REMOVE_UNREACHABLE        = 1 << 4;

        /// Cheap structural cleanup.
        const QUICK = Self::UNWRAP_INVERTERS.bits() | Self::UNWRAP_SERIES.bits();
    }
}

impl Optimizations {
    /// No pass enabled; simplification only rebuilds the tree.
    pub const NONE: Self = Self::empty();
    /// Every pass enabled.
    pub const ALL: Self = Self::all();

    /// Parses a single pass or preset name (`none`, `quick`, `all`).
    pub fn from_pass_name(name: &str) -> Result<Self, ParseOptimizationsError> {
        let name = name.trim();
        match name.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::NONE),
            "quick" => Ok(Self::QUICK),
            "all" => Ok(Self::ALL),
            _ => name
                .parse::<Pass>()
                .map(Self::from)
                .map_err(|_| ParseOptimizationsError::UnknownPass(name.to_owned())),
        }
    }

    /// Parses and unions a list of pass or preset names.
    pub fn from_names<I, S>(names: I) -> Result<Self, ParseOptimizationsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .try_fold(Self::NONE, |acc, name| Ok(acc | Self::from_pass_name(name.as_ref())?))
    }
}

/// Parses a comma-separated list, e.g. `"quick, flatten_series"`.
///
/// An empty or all-blank string yields [`Optimizations::NONE`].
impl FromStr for Optimizations {
    type Err = ParseOptimizationsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_names(s.split(',').filter(|name| !name.trim().is_empty()))
    }
}

/// A single simplifier pass, by name.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Pass {
    UnwrapInverters,
    MinimizeSeriesInversion,
    FlattenSeries,
    UnwrapSeries,
    RemoveUnreachable,
}

impl From<Pass> for Optimizations {
    fn from(pass: Pass) -> Self {
        match pass {
            Pass::UnwrapInverters => Self::UNWRAP_INVERTERS,
            Pass::MinimizeSeriesInversion => Self::MINIMIZE_SERIES_INVERSION,
            Pass::FlattenSeries => Self::FLATTEN_SERIES,
            Pass::UnwrapSeries => Self::UNWRAP_SERIES,
            Pass::RemoveUnreachable => Self::REMOVE_UNREACHABLE,
        }
    }
}

/// Error returned when a pass name is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseOptimizationsError {
    #[error("unknown optimizer pass `{0}`")]
    UnknownPass(String),
}

/// Bottom-up tree rewriter parameterized by a pass set.
///
/// # Example
///
/// ```
/// use behavior_tree::{Node, Optimizations, Simplifier, Status, builder::*};
///
/// let tree: Node<()> = inverter(inverter(sequence(vec![succeed()])));
/// let simplified = Simplifier::new(Optimizations::ALL).simplify(tree);
/// assert!(simplified.is_constant(Status::Success));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Simplifier {
    passes: Optimizations,
}

impl Simplifier {
    pub const fn new(passes: Optimizations) -> Self {
        Self { passes }
    }

    pub const fn passes(&self) -> Optimizations {
        self.passes
    }

    /// Consumes `tree` and returns its simplified equivalent.
    ///
    /// Composites in the result start from their first child; progress of a
    /// tree that was mid-`Running` is not carried over.
    pub fn simplify<C>(&self, tree: Node<C>) -> Node<C> {
        if !tracing::enabled!(tracing::Level::DEBUG) {
            return self.rewrite(tree);
        }
        let (nodes_before, depth_before) = (tree.node_count(), tree.depth());
        let simplified = self.rewrite(tree);
        tracing::debug!(
            passes = ?self.passes,
            nodes_before,
            nodes_after = simplified.node_count(),
            depth_before,
            depth_after = simplified.depth(),
            "simplified behavior tree"
        );
        simplified
    }

    fn enabled(&self, pass: Optimizations) -> bool {
        self.passes.contains(pass)
    }

    fn rewrite<C>(&self, node: Node<C>) -> Node<C> {
        match node {
            fixed @ (Node::Leaf(_) | Node::Constant(_)) => fixed,
            Node::Composite(series) => self.rewrite_series(series),
            Node::Inverter(inverter) => self.rewrite_inverter(inverter),
            Node::UntilFail(until_fail) => {
                Node::UntilFail(UntilFail::new(self.rewrite(until_fail.into_child())))
            }
        }
    }

    fn rewrite_inverter<C>(&self, inverter: Inverter<C>) -> Node<C> {
        match self.rewrite(inverter.into_child()) {
            Node::Inverter(inner) if self.enabled(Optimizations::UNWRAP_INVERTERS) => {
                tracing::trace!("unwrapped double inverter");
                inner.into_child()
            }
            child => Node::Inverter(Inverter::new(child)),
        }
    }

    fn rewrite_series<C>(&self, series: Composite<C>) -> Node<C> {
        let (mode, children) = series.into_parts();
        let mut children: Vec<Node<C>> = children
            .into_iter()
            .map(|child| self.rewrite(child))
            .collect();

        if self.enabled(Optimizations::FLATTEN_SERIES) {
            children = flatten_series(mode, children);
        }

        if self.enabled(Optimizations::REMOVE_UNREACHABLE) {
            remove_unreachable(mode, &mut children);
        }

        if self.enabled(Optimizations::UNWRAP_SERIES) && children.len() <= 1 {
            tracing::trace!(len = children.len(), "unwrapped series");
            return children.pop().unwrap_or(Node::Constant(mode));
        }

        if self.enabled(Optimizations::MINIMIZE_SERIES_INVERSION) {
            let inverted = children
                .iter()
                .filter(|child| matches!(child, Node::Inverter(_)))
                .count();
            if inverted > children.len() - inverted + 1 {
                tracing::trace!(inverted, len = children.len(), "factored out series inversion");
                return factor_inversion(mode, children);
            }
        }

        Node::Composite(Composite::with_mode(mode, children))
    }
}

/// Convenience for `Simplifier::new(passes).simplify(tree)`.
pub fn simplify<C>(tree: Node<C>, passes: Optimizations) -> Node<C> {
    Simplifier::new(passes).simplify(tree)
}

/// Splices the children of same-mode child composites in place.
///
/// One level is enough: children were simplified first, so their own
/// same-mode descendants are already spliced into them.
fn flatten_series<C>(mode: Status, children: Vec<Node<C>>) -> Vec<Node<C>> {
    let mut flat = Vec::with_capacity(children.len());
    for child in children {
        match child {
            Node::Composite(inner) if inner.mode() == mode => {
                let (_, grandchildren) = inner.into_parts();
                flat.extend(grandchildren);
            }
            other => flat.push(other),
        }
    }
    flat
}

/// Drops everything after the first constant that short-circuits the series,
/// then drops constants that always pass through.
///
/// The short-circuiting constant itself is kept: it decides the result.
fn remove_unreachable<C>(mode: Status, children: &mut Vec<Node<C>>) {
    if let Some(stop) = children
        .iter()
        .position(|child| child.is_constant(mode.flip()))
    {
        children.truncate(stop + 1);
    }
    children.retain(|child| !child.is_constant(mode));
}

/// De Morgan: `seq(!a, !b, c)` becomes `!sel(a, b, !c)`.
fn factor_inversion<C>(mode: Status, children: Vec<Node<C>>) -> Node<C> {
    let children = children
        .into_iter()
        .map(|child| match child {
            Node::Inverter(inverter) => inverter.into_child(),
            other => Node::Inverter(Inverter::new(other)),
        })
        .collect();
    Node::Inverter(Inverter::new(Node::Composite(Composite::with_mode(
        mode.flip(),
        children,
    ))))
}
