use std::fmt;

use crate::component::Component;
use crate::composite::{as_dyn, render_composite};
use crate::errors::{CompositeError, CompositeResult};

/// Composite backed by a contiguous vector.
#[derive(Debug, Clone)]
pub struct ArrayComposite {
    name: String,
    children: Vec<Box<dyn Component>>,
}

impl ArrayComposite {
    pub fn new(name: impl Into<String>, children: Vec<Box<dyn Component>>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }
}

impl Component for ArrayComposite {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self) -> String {
        render_composite(self)
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child_at(&self, index: usize) -> CompositeResult<&dyn Component> {
        self.children
            .get(index)
            .map(as_dyn)
            .ok_or(CompositeError::OutOfRange {
                index,
                len: self.children.len(),
            })
    }

    fn children(&self) -> Box<dyn Iterator<Item = &dyn Component> + '_> {
        Box::new(self.children.iter().map(as_dyn))
    }

    fn clone_node(&self) -> Box<dyn Component> {
        Box::new(self.clone())
    }
}

impl fmt::Display for ArrayComposite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
