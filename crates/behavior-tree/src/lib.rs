//! Behavior tree engine with resumable composites and a tree simplifier.
//!
//! This library provides a small interpreter for hierarchical decision logic
//! that is re-evaluated every control tick and may take several ticks to
//! complete an action.
//!
//! - **Running state**: Leaves may report that they need more ticks
//! - **Resumable composites**: Sequences and selectors continue from the child
//!   that was running, not from the first child
//! - **Closed node set**: Dispatch is an exhaustive `match`, no type probing
//! - **Simplifier**: Optional rewrite passes shrink a tree without changing
//!   what it does
//!
//! # Architecture
//!
//! - [`Behavior`]: Trait for leaf actions and conditions (closures included)
//! - [`Status`]: Success, Failure or Running
//! - [`Node`]: Leaf, Constant, [`Composite`], [`Inverter`], [`UntilFail`]
//! - [`Simplifier`]: Bottom-up rewriting under a set of [`Optimizations`]
//! - [`builder`]: Short constructors (`sequence`, `selector`, ...)
//!
//! # Example
//!
//! ```
//! use behavior_tree::{Optimizations, Status, builder::*, simplify};
//!
//! struct Agent {
//!     steps_left: u32,
//! }
//!
//! let walk = leaf(|agent: &mut Agent| {
//!     agent.steps_left -= 1;
//!     if agent.steps_left == 0 { Status::Success } else { Status::Running }
//! });
//! let mut tree = simplify(sequence(vec![sequence(vec![walk]), succeed()]), Optimizations::ALL);
//!
//! let mut agent = Agent { steps_left: 2 };
//! assert_eq!(tree.tick(&mut agent), Status::Running);
//! assert_eq!(tree.tick(&mut agent), Status::Success);
//! ```

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod node;
pub mod optimizer;
mod print;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::{Behavior, Fallible};
pub use composite::Composite;
pub use decorator::{Inverter, UntilFail};
pub use node::{Leaf, Node, NodeKind};
pub use optimizer::{Optimizations, ParseOptimizationsError, Pass, Simplifier, simplify};
pub use status::Status;
