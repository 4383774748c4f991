//! Tests for TreeBuilder

use dpatterns::builder::DEMO_TREE;
use dpatterns::tree_stack::{depth, leaf_labels, leaf_paths, total_node_count};
use dpatterns::{Component, CompositeError, Traverse, TreeBuilder};

#[test]
fn given_demo_tree_when_building_then_mixes_all_variants() {
    // Act
    let tree = TreeBuilder::new().build(DEMO_TREE).unwrap();

    // Assert
    assert_eq!(
        tree.render(),
        "ArrayComposite(C, LinkedListComposite(A, B), D, THIS, BinaryComposite(A))"
    );
    let order: Vec<_> = tree.make_iterator().map(|node| node.name()).collect();
    assert_eq!(
        order,
        ["ArrayComposite", "C", "LinkedListComposite", "A", "B", "D", "THIS", "BinaryComposite", "A"]
    );
}

#[test]
fn given_scenario_expression_when_analysing_then_counts_match() {
    // Arrange
    let tree = TreeBuilder::new()
        .build("root(A, linked:inner(B, C), D)")
        .unwrap();

    // Assert
    assert_eq!(total_node_count(tree.as_ref()), 6);
    assert_eq!(depth(tree.as_ref()), 3);
    assert_eq!(leaf_labels(tree.as_ref()), ["A", "B", "C", "D"]);
    assert_eq!(
        leaf_paths(tree.as_ref()),
        ["A <- root", "B <- inner <- root", "C <- inner <- root", "D <- root"]
    );
}

#[test]
fn given_nesting_over_limit_when_building_then_rejected() {
    // Arrange
    let deep = format!("{}x{}", "n(".repeat(5), ")".repeat(5));

    // Act / Assert
    assert!(TreeBuilder::new().with_max_nesting(5).build(&deep).is_ok());
    assert!(matches!(
        TreeBuilder::new().with_max_nesting(4).build(&deep),
        Err(CompositeError::Parse { .. })
    ));
}
