/*
Conversion of composite trees into `termtree` display trees.

Defined as a trait so it can be implemented for `dyn Component`, which lets
the same drawing code serve every node variant.
 */
use termtree::Tree;
use tracing::instrument;

use crate::component::Component;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for dyn Component + '_ {
    #[instrument(level = "debug", skip(self), fields(node = self.name()))]
    fn to_tree_string(&self) -> Tree<String> {
        // Recursively construct the children
        let leaves: Vec<_> = self.children().map(|c| c.to_tree_string()).collect();

        Tree::new(self.name().to_string()).with_leaves(leaves)
    }
}
