use std::fmt;

use crate::component::Component;
use crate::errors::{CompositeError, CompositeResult};

/// Terminal tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    name: String,
}

impl Leaf {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Component for Leaf {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self) -> String {
        self.name.clone()
    }

    fn child_count(&self) -> usize {
        0
    }

    fn child_at(&self, index: usize) -> CompositeResult<&dyn Component> {
        Err(CompositeError::OutOfRange { index, len: 0 })
    }

    fn children(&self) -> Box<dyn Iterator<Item = &dyn Component> + '_> {
        Box::new(std::iter::empty())
    }

    fn clone_node(&self) -> Box<dyn Component> {
        Box::new(self.clone())
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
