//! Composite trees with interchangeable child storage and a single external
//! pre-order iterator, plus a prototype clone helper.
//!
//! ```
//! use dpatterns::{ArrayComposite, Component, IntoComponent, Leaf, LinkedListComposite, Traverse};
//!
//! let tree = ArrayComposite::new(
//!     "root",
//!     vec![
//!         Leaf::new("A").boxed(),
//!         LinkedListComposite::new("inner", vec![Leaf::new("B").boxed(), Leaf::new("C").boxed()]).boxed(),
//!         Leaf::new("D").boxed(),
//!     ],
//! );
//!
//! let names: Vec<_> = tree.make_iterator().map(|node| node.name()).collect();
//! assert_eq!(names, ["root", "A", "inner", "B", "C", "D"]);
//! assert_eq!(tree.child_at(1)?.render(), "inner(B, C)");
//! # Ok::<(), dpatterns::CompositeError>(())
//! ```

pub mod builder;
pub mod cli;
pub mod component;
pub mod composite;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod iterator;
pub mod leaf;
pub mod prototype;
pub mod tree_stack;
pub mod tree_traits;
pub mod util;

pub use builder::TreeBuilder;
pub use component::{Component, IntoComponent, Traverse};
pub use composite::{ArrayComposite, BinaryComposite, LinkedListComposite};
pub use errors::{CompositeError, CompositeResult, PrototypeError, PrototypeResult};
pub use iterator::{CompositeIterator, IteratorState};
pub use leaf::Leaf;
pub use prototype::{ConcretePrototypeA, ConcretePrototypeB, Prototype, PrototypeFactory, TreePrototype};
