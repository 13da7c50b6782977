//! The simplifier must not change what a tree does: for any pass set, the
//! simplified tree yields the same status stream and ticks the same leaves in
//! the same order as the unsimplified tree.

use behavior_tree::builder::*;
use behavior_tree::{Node, NodeKind, Optimizations, Status, simplify};
use proptest::prelude::*;

/// Ids of the leaves ticked so far, in order.
type Trace = Vec<usize>;

/// Tree shape from which identical trees can be built repeatedly.
#[derive(Clone, Debug)]
enum Shape {
    Leaf(Vec<Status>),
    Constant(Status),
    Sequence(Vec<Shape>),
    Selector(Vec<Shape>),
    Inverter(Box<Shape>),
    UntilFail(Box<Shape>),
}

impl Shape {
    fn build(&self) -> Node<Trace> {
        self.build_with(&mut 0)
    }

    fn build_with(&self, next_id: &mut usize) -> Node<Trace> {
        match self {
            Shape::Leaf(script) => {
                let id = *next_id;
                *next_id += 1;
                let script = script.clone();
                let mut calls = 0;
                leaf(move |trace: &mut Trace| {
                    trace.push(id);
                    let status = script[calls % script.len()];
                    calls += 1;
                    status
                })
            }
            Shape::Constant(status) => constant(*status),
            Shape::Sequence(children) => sequence(build_all(children, next_id)),
            Shape::Selector(children) => selector(build_all(children, next_id)),
            Shape::Inverter(child) => inverter(child.build_with(next_id)),
            Shape::UntilFail(child) => until_fail(child.build_with(next_id)),
        }
    }
}

fn build_all(children: &[Shape], next_id: &mut usize) -> Vec<Node<Trace>> {
    children
        .iter()
        .map(|child| child.build_with(next_id))
        .collect()
}

fn run(mut tree: Node<Trace>, ticks: usize) -> (Vec<Status>, Trace) {
    let mut trace = Trace::new();
    let stream = (0..ticks).map(|_| tree.tick(&mut trace)).collect();
    (stream, trace)
}

fn assert_equivalent(shape: &Shape, passes: Optimizations, ticks: usize) {
    let unsimplified = run(shape.build(), ticks);
    let simplified = run(simplify(shape.build(), passes), ticks);
    assert_eq!(unsimplified, simplified, "passes {passes:?} changed {shape:?}");
}

fn leaf_shape(script: &[Status]) -> Shape {
    Shape::Leaf(script.to_vec())
}

fn not(shape: Shape) -> Shape {
    Shape::Inverter(Box::new(shape))
}

fn status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Success),
        Just(Status::Failure),
        Just(Status::Running),
    ]
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = prop_oneof![
        3 => prop::collection::vec(status(), 1..4).prop_map(Shape::Leaf),
        1 => status().prop_map(Shape::Constant),
    ];
    leaf.prop_recursive(5, 64, 5, |inner| {
        let mostly_inverted = prop::collection::vec((any::<bool>(), inner.clone()), 3..6)
            .prop_map(|children| {
                children
                    .into_iter()
                    .map(|(plain, child)| if plain { child } else { not(child) })
                    .collect::<Vec<_>>()
            });
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Shape::Sequence),
            prop::collection::vec(inner.clone(), 0..5).prop_map(Shape::Selector),
            mostly_inverted.clone().prop_map(Shape::Sequence),
            mostly_inverted.prop_map(Shape::Selector),
            inner.clone().prop_map(not),
            inner.prop_map(|child| Shape::UntilFail(Box::new(child))),
        ]
    })
}

fn passes() -> impl Strategy<Value = Optimizations> {
    (0u8..32).prop_map(Optimizations::from_bits_truncate)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Every pass subset preserves tick streams and leaf order.
    #[test]
    fn every_pass_set_preserves_behavior(shape in shape(), passes in passes()) {
        let unsimplified = run(shape.build(), 16);
        let simplified = run(simplify(shape.build(), passes), 16);
        prop_assert_eq!(unsimplified, simplified);
    }

    /// No pass ever adds nodes.
    #[test]
    fn simplification_never_grows_the_tree(shape in shape(), passes in passes()) {
        let simplified = simplify(shape.build(), passes);
        prop_assert!(simplified.node_count() <= shape.build().node_count());
    }
}

#[test]
fn double_negation_matches_child() {
    let scripts: [&[Status]; 4] = [
        &[Status::Success],
        &[Status::Failure, Status::Success],
        &[Status::Running, Status::Running, Status::Failure],
        &[Status::Success, Status::Running, Status::Failure, Status::Running],
    ];
    for script in scripts {
        let x = leaf_shape(script);
        let wrapped = not(not(x.clone()));

        let simplified = simplify(wrapped.build(), Optimizations::UNWRAP_INVERTERS);
        assert_eq!(simplified.kind(), NodeKind::Leaf);
        assert_eq!(run(simplified, 12), run(x.build(), 12));
    }
}

#[test]
fn flatten_matches_nested_sequence() {
    let a = leaf_shape(&[Status::Success, Status::Running]);
    let b = leaf_shape(&[Status::Running, Status::Success, Status::Failure]);
    let c = leaf_shape(&[Status::Success, Status::Failure, Status::Running]);
    let nested = Shape::Sequence(vec![Shape::Sequence(vec![a, b]), c]);

    let flat = simplify(nested.build(), Optimizations::FLATTEN_SERIES);
    assert_eq!(flat.children().len(), 3);
    assert_eq!(run(flat, 24), run(nested.build(), 24));
}

#[test]
fn minimize_inversion_matches_every_interleaving() {
    let statuses = [Status::Success, Status::Failure, Status::Running];
    // Every pair of statuses as a two-tick script, per child
    let scripts: Vec<Vec<Status>> = statuses
        .iter()
        .flat_map(|first| statuses.iter().map(move |second| vec![*first, *second]))
        .collect();

    for x in &scripts {
        for y in &scripts {
            for z in &scripts {
                for mode in [Shape::Sequence as fn(Vec<Shape>) -> Shape, Shape::Selector] {
                    let all_inverted = mode(vec![
                        not(leaf_shape(x)),
                        not(leaf_shape(y)),
                        not(leaf_shape(z)),
                    ]);
                    let simplified = simplify(
                        all_inverted.build(),
                        Optimizations::MINIMIZE_SERIES_INVERSION,
                    );
                    assert_eq!(simplified.kind(), NodeKind::Inverter);
                    assert_eq!(run(simplified, 8), run(all_inverted.build(), 8));

                    let three_of_four = mode(vec![
                        not(leaf_shape(x)),
                        leaf_shape(y),
                        not(leaf_shape(z)),
                        not(leaf_shape(x)),
                    ]);
                    assert_equivalent(&three_of_four, Optimizations::MINIMIZE_SERIES_INVERSION, 8);
                }
            }
        }
    }
}

#[test]
fn empty_selector_collapses_to_failure() {
    let empty = Shape::Selector(vec![]);
    let simplified = simplify(empty.build(), Optimizations::UNWRAP_SERIES);
    assert!(simplified.is_constant(Status::Failure));
    assert_equivalent(&empty, Optimizations::ALL, 3);
}

#[test]
fn pass_through_constants_do_not_hide_later_children() {
    let tree = Shape::Sequence(vec![
        Shape::Constant(Status::Success),
        leaf_shape(&[Status::Failure]),
    ]);
    let simplified = simplify(tree.build(), Optimizations::REMOVE_UNREACHABLE);
    assert_eq!(run(simplified, 2), (vec![Status::Failure; 2], vec![0, 0]));
}

#[test]
fn simplify_is_total_on_deep_and_empty_trees() {
    let mut deep = Shape::Sequence(vec![]);
    for depth in 0..200 {
        deep = match depth % 4 {
            0 => Shape::Selector(vec![deep, Shape::Selector(vec![])]),
            1 => not(deep),
            2 => Shape::Sequence(vec![deep]),
            _ => Shape::UntilFail(Box::new(deep)),
        };
    }

    for passes in [
        Optimizations::NONE,
        Optimizations::QUICK,
        Optimizations::ALL,
        Optimizations::FLATTEN_SERIES | Optimizations::REMOVE_UNREACHABLE,
    ] {
        let simplified = simplify(deep.build(), passes);
        assert!(simplified.node_count() <= deep.build().node_count());
        assert_equivalent(&deep, passes, 4);
    }
}
