//! Prototype pattern: cloning through a capability instead of a concrete type.
//!
//! [`PrototypeFactory::get_clone`] only sees `&dyn Prototype`; each variant
//! decides how to copy itself and whether it can be copied at all.

use std::any::Any;
use std::fmt;

use tracing::{debug, instrument};

use crate::component::Component;
use crate::errors::{PrototypeError, PrototypeResult};

/// Something that can produce an independent copy of itself.
pub trait Prototype: fmt::Debug + Any {
    /// A new instance with the same observable state and no shared mutable data.
    fn clone_prototype(&self) -> PrototypeResult<Box<dyn Prototype>>;

    /// Observable state, used to compare original and copy.
    fn describe(&self) -> String;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Clone dispatch over any [`Prototype`] variant.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrototypeFactory;

impl PrototypeFactory {
    pub fn new() -> Self {
        Self
    }

    /// Returns a copy of `proto`. Fails only when the variant itself refuses.
    #[instrument(level = "debug", skip_all, fields(proto = %proto.describe()))]
    pub fn get_clone(&self, proto: &dyn Prototype) -> PrototypeResult<Box<dyn Prototype>> {
        let copy = proto.clone_prototype()?;
        debug!(copy = %copy.describe(), "cloned prototype");
        Ok(copy)
    }
}

/// Plain value prototype: a label plus a list of tags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConcretePrototypeA {
    label: String,
    tags: Vec<String>,
}

impl ConcretePrototypeA {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tags: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }
}

impl Prototype for ConcretePrototypeA {
    fn clone_prototype(&self) -> PrototypeResult<Box<dyn Prototype>> {
        Ok(Box::new(self.clone()))
    }

    fn describe(&self) -> String {
        format!("A[{}; tags={}]", self.label, self.tags.join(","))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Prototype that can be bound to a live session.
///
/// A session handle cannot be duplicated, so cloning is refused while bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcretePrototypeB {
    label: String,
    session: Option<u64>,
}

impl ConcretePrototypeB {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            session: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn bind(&mut self, session: u64) {
        self.session = Some(session);
    }

    pub fn unbind(&mut self) {
        self.session = None;
    }

    pub fn session(&self) -> Option<u64> {
        self.session
    }
}

impl Prototype for ConcretePrototypeB {
    fn clone_prototype(&self) -> PrototypeResult<Box<dyn Prototype>> {
        match self.session {
            Some(session) => Err(PrototypeError::Unsupported {
                kind: "ConcretePrototypeB",
                reason: format!("bound to session {session}"),
            }),
            None => Ok(Box::new(self.clone())),
        }
    }

    fn describe(&self) -> String {
        match self.session {
            Some(session) => format!("B[{}; session={session}]", self.label),
            None => format!("B[{}; unbound]", self.label),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A composite tree used as a prototype; copies are deep.
#[derive(Debug, Clone)]
pub struct TreePrototype {
    root: Box<dyn Component>,
}

impl TreePrototype {
    pub fn new(root: Box<dyn Component>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &dyn Component {
        &*self.root
    }

    /// Swap in a different tree, leaving other copies untouched.
    pub fn replace_root(&mut self, root: Box<dyn Component>) {
        self.root = root;
    }
}

impl Prototype for TreePrototype {
    fn clone_prototype(&self) -> PrototypeResult<Box<dyn Prototype>> {
        Ok(Box::new(self.clone()))
    }

    fn describe(&self) -> String {
        self.root.render()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
