/*
Stack based tree algorithms over `&dyn Component`.

Every function keeps its own explicit stack of borrowed nodes instead of
recursing, so the call depth stays flat no matter how deep the tree is.
Children are reached through `children()`; nothing here knows which
storage variant a composite uses.
 */
use tracing::instrument;

use crate::component::Component;

/// Number of nodes in the tree, root included.
#[instrument(level = "debug", skip_all, fields(root = root.name()))]
pub fn total_node_count(root: &dyn Component) -> usize {
    let mut count = 0;
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.children());
    }

    count
}

/// Length of the longest root-to-leaf path, counted in nodes.
#[instrument(level = "debug", skip_all, fields(root = root.name()))]
pub fn depth(root: &dyn Component) -> usize {
    let mut max_depth = 0;
    let mut stack = vec![(root, 1)]; // (node, depth)

    while let Some((node, depth)) = stack.pop() {
        max_depth = max_depth.max(depth);
        for child in node.children() {
            stack.push((child, depth + 1));
        }
    }

    max_depth
}

/// Labels of all childless nodes, in pre-order.
#[instrument(level = "debug", skip_all, fields(root = root.name()))]
pub fn leaf_labels(root: &dyn Component) -> Vec<String> {
    let mut leaves = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if node.is_leaf() {
            leaves.push(node.name().to_string());
        } else {
            let children: Vec<_> = node.children().collect();
            stack.extend(children.into_iter().rev());
        }
    }

    leaves
}

/// Every root-to-leaf path, rendered leaf first as `leaf <- parent <- root`.
#[instrument(level = "debug", skip_all, fields(root = root.name()))]
pub fn leaf_paths(root: &dyn Component) -> Vec<String> {
    let mut paths = Vec::new();
    let mut stack = vec![(root, vec![root.name()])];

    while let Some((node, path)) = stack.pop() {
        if node.is_leaf() {
            let mut names = path;
            names.reverse();
            paths.push(names.join(" <- "));
        } else {
            let children: Vec<_> = node.children().collect();
            for child in children.into_iter().rev() {
                let mut child_path = path.clone();
                child_path.push(child.name());
                stack.push((child, child_path));
            }
        }
    }

    paths
}
