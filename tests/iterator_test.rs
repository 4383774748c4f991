//! Tests for CompositeIterator

use std::collections::HashMap;

use proptest::prelude::*;
use rayon::prelude::*;

use dpatterns::tree_stack::total_node_count;
use dpatterns::util::testing;
use dpatterns::{
    ArrayComposite, BinaryComposite, Component, CompositeError, IntoComponent, IteratorState, Leaf,
    LinkedListComposite, Traverse, TreeBuilder,
};

/// root(A, inner(B, C), D) with the inner node linked-backed
fn scenario() -> ArrayComposite {
    ArrayComposite::new(
        "root",
        vec![
            Leaf::new("A").boxed(),
            LinkedListComposite::new("inner", vec![Leaf::new("B").boxed(), Leaf::new("C").boxed()])
                .boxed(),
            Leaf::new("D").boxed(),
        ],
    )
}

/// Storage-independent description of a tree, so failing cases shrink.
#[derive(Debug, Clone)]
enum Shape {
    Leaf(String),
    Array(String, Vec<Shape>),
    Linked(String, Vec<Shape>),
    Binary(String, Vec<Shape>),
}

impl Shape {
    fn build(&self) -> Box<dyn Component> {
        let kids = |children: &[Shape]| -> Vec<Box<dyn Component>> {
            children.iter().map(Shape::build).collect()
        };
        match self {
            Shape::Leaf(name) => Leaf::new(name.as_str()).boxed(),
            Shape::Array(name, children) => ArrayComposite::new(name.as_str(), kids(children)).boxed(),
            Shape::Linked(name, children) => {
                LinkedListComposite::new(name.as_str(), kids(children)).boxed()
            }
            Shape::Binary(name, children) => BinaryComposite::new(name.as_str(), kids(children))
                .unwrap()
                .boxed(),
        }
    }
}

/// Mixed array/linked/binary trees, up to 6 levels deep.
fn any_shape() -> impl Strategy<Value = Shape> {
    let leaf = "[A-Z][a-z]{0,2}".prop_map(Shape::Leaf);
    leaf.prop_recursive(6, 96, 4, |inner| {
        prop_oneof![
            ("[a-z]{1,3}", prop::collection::vec(inner.clone(), 0..5))
                .prop_map(|(name, children)| Shape::Array(name, children)),
            ("[a-z]{1,3}", prop::collection::vec(inner.clone(), 0..5))
                .prop_map(|(name, children)| Shape::Linked(name, children)),
            ("[a-z]{1,3}", prop::collection::vec(inner, 0..=2))
                .prop_map(|(name, children)| Shape::Binary(name, children)),
        ]
    })
}

fn address(node: &dyn Component) -> usize {
    std::ptr::from_ref(node).cast::<()>() as usize
}

fn visit_all(root: &dyn Component) -> Vec<&dyn Component> {
    let mut iter = root.make_iterator();
    let mut visited = Vec::new();
    iter.reset();
    while iter.has_next() {
        iter.advance().unwrap();
        visited.push(iter.current().unwrap());
    }
    visited
}

// ============================================================
// Visitation order
// ============================================================

#[test]
fn given_scenario_tree_when_iterating_then_pre_order_labels() {
    testing::init_test_setup();
    let tree = scenario();

    let labels: Vec<_> = visit_all(&tree).into_iter().map(|node| node.name()).collect();

    assert_eq!(labels, ["root", "A", "inner", "B", "C", "D"]);
}

proptest! {
    #[test]
    fn given_any_tree_when_iterating_then_each_node_once(shape in any_shape()) {
        let tree = shape.build();

        let visited = visit_all(tree.as_ref());

        prop_assert_eq!(visited.len(), total_node_count(tree.as_ref()));
        let mut seen: Vec<_> = visited.iter().map(|node| address(*node)).collect();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), visited.len(), "a node was visited twice");
    }

    #[test]
    fn given_any_tree_when_iterating_then_subtrees_are_contiguous(shape in any_shape()) {
        let tree = shape.build();

        let visited = visit_all(tree.as_ref());
        let position: HashMap<usize, usize> = visited
            .iter()
            .enumerate()
            .map(|(k, node)| (address(*node), k))
            .collect();

        for (k, node) in visited.iter().enumerate() {
            let mut expected = k + 1;
            for index in 0..node.child_count() {
                let child = node.child_at(index).unwrap();
                prop_assert_eq!(position[&address(child)], expected, "child {} of {}", index, node.name());
                expected += total_node_count(child);
            }
        }
    }
}

// ============================================================
// Protocol state machine
// ============================================================

#[test]
fn given_reset_iterator_when_reading_current_then_invalid_cursor() {
    let tree = scenario();
    let mut iter = tree.make_iterator();
    iter.advance().unwrap();
    iter.advance().unwrap();

    iter.reset();

    assert_eq!(iter.state(), IteratorState::Unstarted);
    assert_eq!(iter.current().unwrap_err(), CompositeError::InvalidCursor);
}

#[test]
fn given_exhausted_iterator_when_advancing_then_iterator_exhausted() {
    let tree = scenario();
    let mut iter = tree.make_iterator();
    while iter.has_next() {
        iter.advance().unwrap();
    }
    assert_eq!(iter.state(), IteratorState::Positioned);
    assert_eq!(iter.current().unwrap().name(), "D");

    assert_eq!(iter.advance().unwrap_err(), CompositeError::IteratorExhausted);
    assert_eq!(iter.state(), IteratorState::Exhausted);
    assert_eq!(iter.current().unwrap_err(), CompositeError::InvalidCursor);
    assert_eq!(iter.advance().unwrap_err(), CompositeError::IteratorExhausted);

    iter.reset();
    assert_eq!(iter.count(), 6);
}

#[test]
fn given_two_iterators_when_interleaved_then_independent() {
    let tree = scenario();
    let mut first = tree.make_iterator();
    let mut second = tree.make_iterator();

    first.advance().unwrap();
    first.advance().unwrap();
    second.advance().unwrap();

    assert_eq!(first.current().unwrap().name(), "A");
    assert_eq!(second.current().unwrap().name(), "root");
}

#[test]
fn given_built_tree_when_iterating_through_dyn_then_same_order() {
    let tree = TreeBuilder::new()
        .build("binary:top(linked:l(a, b), array:r(c))")
        .unwrap();

    let labels: Vec<_> = tree.make_iterator().map(|node| node.name()).collect();

    assert_eq!(labels, ["top", "l", "a", "b", "r", "c"]);
}

// ============================================================
// Concurrent read-only traversal
// ============================================================

#[test]
fn given_shared_tree_when_traversed_in_parallel_then_all_agree() {
    let branches = (0..50)
        .map(|b| {
            let leaves = (0..20).map(|l| Leaf::new(format!("{b}.{l}")).boxed()).collect();
            LinkedListComposite::new(format!("branch{b}"), leaves).boxed()
        })
        .collect();
    let tree = ArrayComposite::new("root", branches);
    let expected: Vec<String> = tree.make_iterator().map(|node| node.name().to_string()).collect();

    let results: Vec<Vec<String>> = (0..16)
        .into_par_iter()
        .map(|_| tree.make_iterator().map(|node| node.name().to_string()).collect())
        .collect();

    assert!(results.iter().all(|labels| *labels == expected));
}
