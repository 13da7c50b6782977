//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple children. Sequence
//! (AND logic) and selector (OR logic) are one type, [`Composite`], that
//! differs only in its *mode*: the status that lets evaluation continue to the
//! next child.

use crate::{Node, Status};

/// Executes children in order, resuming at the last `Running` child.
///
/// # Semantics
///
/// Starting at the cursor, each child is ticked in turn:
/// - If a child returns `Running`, the composite returns `Running` and keeps
///   the cursor, so the next tick re-enters the same child
/// - If a child returns the mode, the composite **continues** to the next child
/// - If a child returns the flipped mode, the composite **stops immediately**,
///   resets the cursor and returns that status
/// - If every child passed through, the cursor is reset and the mode returned
///
/// With mode `Success` this is a short-circuited logical AND (a sequence);
/// with mode `Failure` it is a short-circuited logical OR (a selector). An
/// empty composite returns its mode.
pub struct Composite<C> {
    mode: Status,
    children: Vec<Node<C>>,
    cursor: usize,
}

impl<C> Composite<C> {
    /// Creates a sequence (mode `Success`).
    pub fn sequence(children: Vec<Node<C>>) -> Self {
        Self::with_mode(Status::Success, children)
    }

    /// Creates a selector (mode `Failure`).
    pub fn selector(children: Vec<Node<C>>) -> Self {
        Self::with_mode(Status::Failure, children)
    }

    pub(crate) fn with_mode(mode: Status, children: Vec<Node<C>>) -> Self {
        debug_assert!(mode.is_terminal(), "composite mode must be terminal");
        Self {
            mode,
            children,
            cursor: 0,
        }
    }

    /// The status that lets evaluation continue past a child.
    #[inline]
    pub fn mode(&self) -> Status {
        self.mode
    }

    #[inline]
    pub fn is_sequence(&self) -> bool {
        self.mode.is_success()
    }

    #[inline]
    pub fn is_selector(&self) -> bool {
        self.mode.is_failure()
    }

    pub fn children(&self) -> &[Node<C>] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Discards the cursor and hands back mode and children.
    pub(crate) fn into_parts(self) -> (Status, Vec<Node<C>>) {
        (self.mode, self.children)
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn tick(&mut self, ctx: &mut C) -> Status {
        while let Some(child) = self.children.get_mut(self.cursor) {
            match child.tick(ctx) {
                Status::Running => return Status::Running,
                status if status == self.mode => self.cursor += 1,
                status => {
                    // Short-circuit
                    self.cursor = 0;
                    return status;
                }
            }
        }
        self.cursor = 0;
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::leaf;

    struct TestContext {
        value: i32,
    }

    fn increment() -> Node<TestContext> {
        leaf(|ctx: &mut TestContext| {
            ctx.value += 1;
            Status::Success
        })
    }

    fn decrement() -> Node<TestContext> {
        leaf(|ctx: &mut TestContext| {
            ctx.value -= 1;
            Status::Success
        })
    }

    fn fail_always() -> Node<TestContext> {
        leaf(|_: &mut TestContext| Status::Failure)
    }

    /// Returns `Running` until it has been ticked `n` times, then `Success`.
    fn busy_for(n: usize) -> Node<TestContext> {
        let mut calls = 0;
        leaf(move |ctx: &mut TestContext| {
            calls += 1;
            ctx.value += 10;
            if calls > n {
                calls = 0;
                Status::Success
            } else {
                Status::Running
            }
        })
    }

    #[test]
    fn sequence_all_success() {
        let mut seq = Composite::sequence(vec![increment(), increment()]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let mut seq = Composite::sequence(vec![
            increment(),
            fail_always(),
            increment(), // Should not execute
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.value, 1); // Only first increment executed
        assert_eq!(seq.cursor(), 0);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let mut sel = Composite::selector(vec![
            fail_always(),
            increment(),
            decrement(), // Should not execute
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 1); // Only increment executed
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let mut sel = Composite::selector(vec![fail_always(), fail_always()]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn empty_composites_return_their_mode() {
        let mut seq = Composite::<TestContext>::sequence(vec![]);
        let mut sel = Composite::<TestContext>::selector(vec![]);

        let mut ctx = TestContext { value: 0 };
        for _ in 0..3 {
            assert_eq!(seq.tick(&mut ctx), Status::Success);
            assert_eq!(sel.tick(&mut ctx), Status::Failure);
        }
    }

    #[test]
    fn running_child_keeps_cursor() {
        let mut seq = Composite::sequence(vec![increment(), busy_for(2), increment()]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(seq.cursor(), 1);
        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(seq.cursor(), 1);
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(seq.cursor(), 0);

        // First increment ran once, busy ran three times, last increment once
        assert_eq!(ctx.value, 1 + 30 + 1);
    }

    #[test]
    fn selector_resumes_at_running_child() {
        let mut sel = Composite::selector(vec![fail_always(), busy_for(1), decrement()]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Running);
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 20);
        assert!(sel.is_selector());
        assert_eq!(sel.len(), 3);
    }
}
