//! # Singly Linked List
//!
//! A [`Node`] owns its successor through `Option<Box<Node>>`, so the chain
//! always ends in `None` and dropping the head drops the whole list.
//!
//! ```text
//! head ──▶ Node { "HeadNode", 1 } ──▶ Node { "tailNode", 2 } ──▶ None
//! ```

use tracing::debug;

/// One link in a singly linked chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub key: String,
    pub value: i32,
    /// Successor, `None` at the tail.
    pub next: Option<Box<Node>>,
}

impl Node {
    /// Creates a detached node with no successor.
    pub fn new(key: impl Into<String>, value: i32) -> Self {
        Self {
            key: key.into(),
            value,
            next: None,
        }
    }

    /// Creates a node that already links to `next`.
    pub fn with_next(key: impl Into<String>, value: i32, next: Node) -> Self {
        Self {
            key: key.into(),
            value,
            next: Some(Box::new(next)),
        }
    }

    /// Returns the successor, if any.
    pub fn next_node(&self) -> Option<&Node> {
        self.next.as_deref()
    }
}

/// Walks from `head_node` to the tail and links `new_node` after it.
///
/// `new_node` is expected to be detached; if it has successors they are
/// carried along unchecked.
pub fn insert_node_at_tail(new_node: Node, head_node: &mut Node) {
    let mut current = head_node;
    let mut hops = 0usize;

    loop {
        match current.next {
            Some(ref mut next) => {
                current = &mut **next;
                hops += 1;
            }
            None => {
                debug!(tail = %current.key, new_tail = %new_node.key, hops, "appending node at tail");
                current.next = Some(Box::new(new_node));
                return;
            }
        }
    }
}
