//! Composite node variants.
//!
//! All three variants share one external contract and differ only in how
//! they store their children:
//! - [`ArrayComposite`]: contiguous vector, O(1) indexed access
//! - [`LinkedListComposite`]: singly linked chain, O(n) indexed access
//! - [`BinaryComposite`]: at most a left and a right child

use itertools::Itertools;

use crate::component::Component;

pub mod array;
pub mod binary;
pub mod linked;

pub use array::ArrayComposite;
pub use binary::BinaryComposite;
pub use linked::LinkedListComposite;

/// Reborrows an owned child as the trait object the `Component` API hands out.
#[allow(clippy::borrowed_box)]
pub(crate) fn as_dyn(child: &Box<dyn Component>) -> &dyn Component {
    &**child
}

/// Renders `name(child, child, ...)`. An empty composite renders as `name()`
/// so it stays distinguishable from a leaf.
pub(crate) fn render_composite(node: &dyn Component) -> String {
    format!(
        "{}({})",
        node.name(),
        node.children().map(|child| child.render()).join(", ")
    )
}
