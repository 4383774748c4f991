//! Builds composite trees from compact tree expressions.
//!
//! ```text
//! node     := kind? NAME children?
//! kind     := ("array" | "linked" | "binary") ":"
//! children := "(" [ node ("," node)* ] ")"
//! ```
//!
//! A bare name is a [`Leaf`]; a name with a kind prefix or a child list is a
//! composite, array-backed unless a kind says otherwise.

use regex::Regex;
use tracing::{debug, instrument};

use crate::component::{Component, IntoComponent};
use crate::composite::{ArrayComposite, BinaryComposite, LinkedListComposite};
use crate::errors::{CompositeError, CompositeResult};
use crate::leaf::Leaf;

/// Demo tree mixing all three storage variants.
pub const DEMO_TREE: &str =
    "array:ArrayComposite(C, linked:LinkedListComposite(A, B), D, THIS, binary:BinaryComposite(A))";

/// Trees `composite` prints when no tree is given: a binary node, an array
/// node holding a linked node, and a lone leaf.
pub const COMPOSITE_DEMO: [&str; 3] = [
    "binary:BinaryComposite(A)",
    "array:ArrayComposite(C, linked:LinkedListComposite(A, B), D, THIS)",
    "THIS",
];

pub const DEFAULT_MAX_NESTING: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Storage {
    Array,
    Linked,
    Binary,
}

impl Storage {
    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "array" => Some(Self::Array),
            "linked" => Some(Self::Linked),
            "binary" => Some(Self::Binary),
            _ => None,
        }
    }
}

/// Parses tree expressions into owned trees.
pub struct TreeBuilder {
    node_regex: Regex,
    max_nesting: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            node_regex: Regex::new(r"^(?:(array|linked|binary):)?([^\s(),:]+)").unwrap(),
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }

    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }

    /// Build a tree from `expression`.
    ///
    /// # Errors
    /// - `CompositeError::Parse` for malformed input, trailing input or
    ///   nesting deeper than the configured limit
    /// - `CompositeError::ArityViolation` for a binary node with more than two children
    #[instrument(level = "debug", skip(self))]
    pub fn build(&self, expression: &str) -> CompositeResult<Box<dyn Component>> {
        let mut parser = Parser {
            builder: self,
            input: expression,
            pos: 0,
        };
        let root = parser.node(0)?;
        parser.skip_whitespace();
        if parser.pos != expression.len() {
            return Err(parser.error("unexpected trailing input"));
        }
        debug!(root = root.name(), "built tree");
        Ok(root)
    }
}

struct Parser<'b, 's> {
    builder: &'b TreeBuilder,
    input: &'s str,
    pos: usize,
}

impl Parser<'_, '_> {
    fn node(&mut self, nesting: usize) -> CompositeResult<Box<dyn Component>> {
        self.skip_whitespace();
        let rest = &self.input[self.pos..];
        let caps = self
            .builder
            .node_regex
            .captures(rest)
            .ok_or_else(|| self.error("expected node name"))?;
        let storage = caps.get(1).and_then(|m| Storage::from_prefix(m.as_str()));
        let name = caps[2].to_string();
        self.pos += caps[0].len();

        self.skip_whitespace();
        let children = if self.peek() == Some('(') {
            Some(self.children(nesting + 1)?)
        } else {
            None
        };

        let node = match (storage, children) {
            (None, None) => Leaf::new(name).boxed(),
            (storage, children) => {
                let children = children.unwrap_or_default();
                match storage.unwrap_or(Storage::Array) {
                    Storage::Array => ArrayComposite::new(name, children).boxed(),
                    Storage::Linked => LinkedListComposite::new(name, children).boxed(),
                    Storage::Binary => BinaryComposite::new(name, children)?.boxed(),
                }
            }
        };
        Ok(node)
    }

    fn children(&mut self, nesting: usize) -> CompositeResult<Vec<Box<dyn Component>>> {
        if nesting > self.builder.max_nesting {
            return Err(self.error(&format!(
                "nesting deeper than {} levels",
                self.builder.max_nesting
            )));
        }
        self.pos += 1; // '('
        let mut children = Vec::new();

        self.skip_whitespace();
        if self.peek() == Some(')') {
            self.pos += 1;
            return Ok(children);
        }

        loop {
            children.push(self.node(nesting)?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => self.pos += 1,
                Some(')') => {
                    self.pos += 1;
                    return Ok(children);
                }
                Some(other) => return Err(self.error(&format!("expected ',' or ')', found '{other}'"))),
                None => return Err(self.error("unexpected end of input, missing ')'")),
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn error(&self, reason: &str) -> CompositeError {
        CompositeError::Parse {
            position: self.pos,
            reason: reason.to_string(),
        }
    }
}
