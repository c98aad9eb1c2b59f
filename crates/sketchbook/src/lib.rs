//! # Sketchbook: practice code, one idea per module
//!
//! Small standalone demonstrations, each callable on its own and all driven
//! in order by [`demo::run_demo`].
//!
//! ## Contents
//!
//! 1. [`recursion`] - factorial and two naive recursive Fibonacci functions
//! 2. [`pointers`] - reading through a reference and swapping by reference
//! 3. [`list`] - a singly linked [`Node`](list::Node) and tail insertion
//! 4. [`hash`] - two hash-table fragments (key parsing, first-write-wins slot)
//! 5. [`demo`] - the fixed demonstration transcript
//!
//! ## Quick Start
//!
//! ```bash
//! # Run all tests
//! cargo test
//!
//! # Print the demonstration transcript
//! cargo run
//!
//! # Same, with the list walk and hash collisions logged to stderr
//! RUST_LOG=sketchbook=debug cargo run
//! ```
//!
//! ```
//! use sketchbook::list::{insert_node_at_tail, Node};
//!
//! let mut head = Node::new("HeadNode", 1);
//! insert_node_at_tail(Node::new("tailNode", 2), &mut head);
//!
//! let tail = head.next_node().unwrap();
//! assert_eq!(tail.key, "tailNode");
//! assert_eq!(tail.value, 2);
//! ```

pub mod demo;
mod error;
pub mod hash;
pub mod list;
pub mod pointers;
pub mod recursion;

pub use error::SketchbookError;
