//! Core leaf trait.
//!
//! This module defines the [`Behavior`] trait, the capability every leaf of a
//! tree provides. The trait is generic over a context type `C`, so every node
//! of one tree evaluates against the same context; mixing contexts is a type
//! error at construction time.
//!
//! Closures of the shape `FnMut(&mut C) -> Status` implement [`Behavior`]
//! directly. Leaves whose work can fail are wrapped in [`Fallible`], which
//! translates errors into [`Status::Failure`] so that nothing but a status
//! ever flows through the engine.

use core::fmt;
use core::marker::PhantomData;

use crate::Status;

/// A leaf action or condition that can be evaluated against a context.
pub trait Behavior<C>: Send {
    /// Evaluate this behavior against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard. Leaves can read
    ///   the agent's world and modify it.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    /// - `Status::Running` if it needs further ticks to complete
    fn tick(&mut self, ctx: &mut C) -> Status;
}

impl<C, F> Behavior<C> for F
where
    F: FnMut(&mut C) -> Status + Send,
{
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        self(ctx)
    }
}

/// Adapts a fallible leaf into a [`Behavior`].
///
/// `Ok(status)` is passed through. `Err(e)` is logged and reported as
/// `Status::Failure`.
pub struct Fallible<F, E> {
    f: F,
    _error: PhantomData<fn() -> E>,
}

impl<F, E> Fallible<F, E> {
    /// Wraps a closure returning `Result<Status, E>`.
    pub fn new<C>(f: F) -> Self
    where
        F: FnMut(&mut C) -> Result<Status, E>,
    {
        Self {
            f,
            _error: PhantomData,
        }
    }
}

impl<C, F, E> Behavior<C> for Fallible<F, E>
where
    F: FnMut(&mut C) -> Result<Status, E> + Send,
    E: fmt::Display,
{
    fn tick(&mut self, ctx: &mut C) -> Status {
        match (self.f)(ctx) {
            Ok(status) => status,
            Err(error) => {
                tracing::warn!(%error, "leaf failed; reporting failure");
                Status::Failure
            }
        }
    }
}
