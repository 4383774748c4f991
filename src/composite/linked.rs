use std::fmt;

use crate::component::Component;
use crate::composite::render_composite;
use crate::errors::{CompositeError, CompositeResult};

struct Link {
    child: Box<dyn Component>,
    next: Option<Box<Link>>,
}

/// Singly linked chain of owned children.
#[derive(Default)]
struct Chain {
    head: Option<Box<Link>>,
    len: usize,
}

impl Chain {
    fn from_vec(children: Vec<Box<dyn Component>>) -> Self {
        let len = children.len();
        let mut head = None;
        // Prepending in reverse keeps construction O(1) per child without a tail pointer.
        for child in children.into_iter().rev() {
            head = Some(Box::new(Link { child, next: head }));
        }
        Self { head, len }
    }

    fn iter(&self) -> ChainIter<'_> {
        ChainIter {
            next: self.head.as_deref(),
        }
    }
}

// Listed flat; the derived impl would nest once per link.
impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Clone for Chain {
    fn clone(&self) -> Self {
        Self::from_vec(self.iter().map(|child| child.clone_node()).collect())
    }
}

impl Drop for Chain {
    // Unlink iteratively; the derived drop would recurse once per link.
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

struct ChainIter<'a> {
    next: Option<&'a Link>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a dyn Component;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.next?;
        self.next = link.next.as_deref();
        Some(&*link.child)
    }
}

/// Composite backed by a singly linked list.
#[derive(Debug, Clone)]
pub struct LinkedListComposite {
    name: String,
    children: Chain,
}

impl LinkedListComposite {
    pub fn new(name: impl Into<String>, children: Vec<Box<dyn Component>>) -> Self {
        Self {
            name: name.into(),
            children: Chain::from_vec(children),
        }
    }
}

impl Component for LinkedListComposite {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self) -> String {
        render_composite(self)
    }

    fn child_count(&self) -> usize {
        self.children.len
    }

    fn child_at(&self, index: usize) -> CompositeResult<&dyn Component> {
        self.children
            .iter()
            .nth(index)
            .ok_or(CompositeError::OutOfRange {
                index,
                len: self.children.len,
            })
    }

    fn children(&self) -> Box<dyn Iterator<Item = &dyn Component> + '_> {
        Box::new(self.children.iter())
    }

    fn clone_node(&self) -> Box<dyn Component> {
        Box::new(self.clone())
    }
}

impl fmt::Display for LinkedListComposite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
