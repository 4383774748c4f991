use std::fmt;

use tracing::debug;

use crate::component::Component;
use crate::composite::{as_dyn, render_composite};
use crate::errors::{CompositeError, CompositeResult};

/// Composite holding at most two children, addressed as left and right.
///
/// # Invariants
/// - a right child only exists next to a left child
/// - logical order is left, then right
#[derive(Debug, Clone)]
pub struct BinaryComposite {
    name: String,
    left: Option<Box<dyn Component>>,
    right: Option<Box<dyn Component>>,
}

impl BinaryComposite {
    /// Builds a binary node from up to two children, left first.
    ///
    /// # Errors
    /// `CompositeError::ArityViolation` when more than two children are given.
    pub fn new(name: impl Into<String>, children: Vec<Box<dyn Component>>) -> CompositeResult<Self> {
        let name = name.into();
        if children.len() > 2 {
            debug!(name = %name, given = children.len(), "rejecting binary composite");
            return Err(CompositeError::ArityViolation {
                name,
                given: children.len(),
            });
        }
        let mut children = children.into_iter();
        Ok(Self {
            name,
            left: children.next(),
            right: children.next(),
        })
    }

    /// Builds a full binary node.
    pub fn pair(
        name: impl Into<String>,
        left: Box<dyn Component>,
        right: Box<dyn Component>,
    ) -> Self {
        Self {
            name: name.into(),
            left: Some(left),
            right: Some(right),
        }
    }

    pub fn left(&self) -> Option<&dyn Component> {
        self.left.as_ref().map(as_dyn)
    }

    pub fn right(&self) -> Option<&dyn Component> {
        self.right.as_ref().map(as_dyn)
    }
}

impl Component for BinaryComposite {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self) -> String {
        render_composite(self)
    }

    fn child_count(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    fn child_at(&self, index: usize) -> CompositeResult<&dyn Component> {
        let child = match index {
            0 => self.left(),
            1 => self.right(),
            _ => None,
        };
        child.ok_or(CompositeError::OutOfRange {
            index,
            len: self.child_count(),
        })
    }

    fn children(&self) -> Box<dyn Iterator<Item = &dyn Component> + '_> {
        Box::new(self.left.iter().chain(self.right.iter()).map(as_dyn))
    }

    fn clone_node(&self) -> Box<dyn Component> {
        Box::new(self.clone())
    }
}

impl fmt::Display for BinaryComposite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
