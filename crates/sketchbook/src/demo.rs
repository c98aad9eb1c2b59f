//! # Demonstration Transcript
//!
//! Runs each sketch once, in a fixed order, and writes what it sees:
//!
//! ```text
//! 5th Fibonacci number is 8
//! Variable a = 10
//! Address of a (let address_of_a = &a): 0x7ffd...
//! Value at address of a (let value_at_address_of_a = *address_of_a): 10
//! Initial Values: n = 5 p = 10
//! Swapped Values: n = 10 p = 5
//! HeadNode
//! 1
//! tailNode
//! 2
//! ```
//!
//! The address line differs between runs and platforms.

use std::io::Write;

use tracing::info;

use crate::error::SketchbookError;
use crate::list::{insert_node_at_tail, Node};
use crate::pointers::{swap_values, value_at};
use crate::recursion::fibonnaci;

/// Writes the demonstration transcript to `out`.
pub fn run_demo<W: Write>(out: &mut W) -> Result<(), SketchbookError> {
    info!("running demonstration");

    let number = 6;
    writeln!(out, "5th Fibonacci number is {}", fibonnaci(number))?;

    let a = 10;
    let address_of_a = &a;
    let value_at_address_of_a = value_at(address_of_a);
    writeln!(out, "Variable a = {a}")?;
    writeln!(out, "Address of a (let address_of_a = &a): {address_of_a:p}")?;
    writeln!(
        out,
        "Value at address of a (let value_at_address_of_a = *address_of_a): {value_at_address_of_a}"
    )?;

    let mut n = 5;
    let mut p = 10;
    writeln!(out, "Initial Values: n = {n} p = {p}")?;
    swap_values(&mut n, &mut p);
    writeln!(out, "Swapped Values: n = {n} p = {p}")?;

    let mut head_node = Node::new("HeadNode", 1);
    let new_node = Node::new("tailNode", 2);
    insert_node_at_tail(new_node, &mut head_node);

    let tail = head_node
        .next_node()
        .ok_or_else(|| SketchbookError::MissingSuccessor {
            key: head_node.key.clone(),
        })?;
    writeln!(out, "{}\n{}", head_node.key, head_node.value)?;
    writeln!(out, "{}\n{}", tail.key, tail.value)?;

    out.flush()?;
    Ok(())
}
