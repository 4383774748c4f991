//! The capability set shared by every tree node.
//!
//! Leaves and all composite variants implement [`Component`]. Callers, the
//! iterator and the analysis helpers only ever see `&dyn Component`; none of
//! them branch on the concrete storage variant.

use std::fmt;

use crate::errors::CompositeResult;
use crate::iterator::CompositeIterator;

/// A node in a composite tree.
///
/// Nodes are `Send + Sync` and structurally immutable after construction, so a
/// built tree can be traversed by several iterators at once.
pub trait Component: fmt::Debug + Send + Sync {
    /// Descriptive label of this node. Not unique, never used as identity.
    fn name(&self) -> &str;

    /// Structural description of this node and its subtree.
    fn render(&self) -> String;

    fn child_count(&self) -> usize;

    /// The child at logical position `index`, independent of how the node
    /// stores its children.
    ///
    /// # Errors
    /// `CompositeError::OutOfRange` when `index >= child_count()`.
    fn child_at(&self, index: usize) -> CompositeResult<&dyn Component>;

    /// Visits the children in logical order, using the variant's native
    /// storage walk.
    fn children(&self) -> Box<dyn Iterator<Item = &dyn Component> + '_>;

    /// Deep copy of this node and its whole subtree.
    fn clone_node(&self) -> Box<dyn Component>;

    /// True for nodes without children, which includes empty composites.
    fn is_leaf(&self) -> bool {
        self.child_count() == 0
    }
}

impl Clone for Box<dyn Component> {
    fn clone(&self) -> Self {
        self.clone_node()
    }
}

impl fmt::Display for dyn Component + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Moves a concrete node into the owned form composites store.
pub trait IntoComponent {
    fn boxed(self) -> Box<dyn Component>;
}

impl<T: Component + 'static> IntoComponent for T {
    fn boxed(self) -> Box<dyn Component> {
        Box::new(self)
    }
}

/// Entry point for pre-order traversal, available on concrete nodes and on
/// `dyn Component` alike.
pub trait Traverse {
    fn make_iterator(&self) -> CompositeIterator<'_>;
}

impl<T: Component> Traverse for T {
    fn make_iterator(&self) -> CompositeIterator<'_> {
        CompositeIterator::new(self)
    }
}

impl Traverse for dyn Component + '_ {
    fn make_iterator(&self) -> CompositeIterator<'_> {
        CompositeIterator::new(self)
    }
}
