//! External pre-order iterator over heterogeneous composite trees.
//!
//! The caller drives traversal explicitly:
//!
//! ```
//! use dpatterns::{ArrayComposite, Component, IntoComponent, Leaf, Traverse};
//!
//! let tree = ArrayComposite::new("root", vec![Leaf::new("A").boxed()]);
//! let mut iter = tree.make_iterator();
//! let mut names = Vec::new();
//! iter.reset();
//! while iter.has_next() {
//!     iter.advance()?;
//!     names.push(iter.current()?.name().to_string());
//! }
//! assert_eq!(names, ["root", "A"]);
//! # Ok::<(), dpatterns::CompositeError>(())
//! ```

use tracing::{instrument, trace};

use crate::component::Component;
use crate::errors::{CompositeError, CompositeResult};

/// Position of a [`CompositeIterator`] in its traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IteratorState {
    /// Freshly reset, before the first node.
    Unstarted,
    /// On a node, `current()` is valid.
    Positioned,
    /// An advance found nothing left to visit.
    Exhausted,
}

#[derive(Debug, Clone, Copy)]
enum Cursor<'a> {
    Unstarted,
    Positioned(&'a dyn Component),
    Exhausted,
}

/// Lazy depth-first pre-order walk bound to one root.
///
/// Pending subtrees live on an explicit stack; children are pushed in reverse
/// so they pop in logical order. Only `child_count`/`child_at` are used, so
/// every storage variant is handled the same way.
#[derive(Debug, Clone)]
pub struct CompositeIterator<'a> {
    root: &'a dyn Component,
    pending: Vec<&'a dyn Component>,
    cursor: Cursor<'a>,
}

impl<'a> CompositeIterator<'a> {
    #[instrument(level = "trace", skip_all, fields(root = root.name()))]
    pub fn new(root: &'a dyn Component) -> Self {
        let mut iter = Self {
            root,
            pending: Vec::new(),
            cursor: Cursor::Unstarted,
        };
        iter.reset();
        iter
    }

    /// Drops any in-progress traversal and starts over from the root.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.pending.push(self.root);
        self.cursor = Cursor::Unstarted;
    }

    pub fn has_next(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Moves the cursor to the next node in pre-order.
    ///
    /// # Errors
    /// `CompositeError::IteratorExhausted` when nothing is pending; the
    /// iterator is then `Exhausted` until the next `reset()`.
    pub fn advance(&mut self) -> CompositeResult<()> {
        let Some(node) = self.pending.pop() else {
            self.cursor = Cursor::Exhausted;
            return Err(CompositeError::IteratorExhausted);
        };

        let mark = self.pending.len();
        let count = node.child_count();
        self.pending.reserve(count);
        for index in (0..count).rev() {
            match node.child_at(index) {
                Ok(child) => self.pending.push(child),
                Err(e) => {
                    // leave the stack as it was before this call
                    self.pending.truncate(mark);
                    self.pending.push(node);
                    return Err(e);
                }
            }
        }

        trace!(node = node.name(), pending = self.pending.len(), "advanced");
        self.cursor = Cursor::Positioned(node);
        Ok(())
    }

    /// The node under the cursor.
    ///
    /// # Errors
    /// `CompositeError::InvalidCursor` before the first `advance()` after a
    /// reset, and after exhaustion.
    pub fn current(&self) -> CompositeResult<&'a dyn Component> {
        match self.cursor {
            Cursor::Positioned(node) => Ok(node),
            Cursor::Unstarted | Cursor::Exhausted => Err(CompositeError::InvalidCursor),
        }
    }

    pub fn state(&self) -> IteratorState {
        match self.cursor {
            Cursor::Unstarted => IteratorState::Unstarted,
            Cursor::Positioned(_) => IteratorState::Positioned,
            Cursor::Exhausted => IteratorState::Exhausted,
        }
    }

    pub fn root(&self) -> &'a dyn Component {
        self.root
    }
}

impl<'a> Iterator for CompositeIterator<'a> {
    type Item = &'a dyn Component;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            self.cursor = Cursor::Exhausted;
            return None;
        }
        self.advance().ok()?;
        self.current().ok()
    }
}
