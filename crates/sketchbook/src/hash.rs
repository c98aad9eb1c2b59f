//! # Hash-Table Fragments
//!
//! Two pieces of a hash table that never got built:
//!
//! - [`hash_function`] reads a node's key as a decimal integer and uses that
//!   number directly as the bucket index.
//! - [`insert_into_hash_table`] fills an empty bucket and drops the node if
//!   the bucket is taken.
//!
//! There is no sizing, resizing, chaining or probing. The bucket slice
//! belongs to the caller.

use tracing::{debug, trace};

use crate::error::SketchbookError;
use crate::list::Node;

/// Parses the node's key as a base-10 integer and returns it as the index.
///
/// Parsing follows C's `stoi`: leading whitespace is skipped, one optional
/// `+` or `-` is accepted, then the longest run of ASCII digits is read.
/// Anything after the digits is ignored, so `"42abc"` hashes to `42`.
///
/// # Errors
///
/// - [`SketchbookError::InvalidKey`] if no digits follow the optional sign.
/// - [`SketchbookError::KeyOutOfRange`] if the number does not fit in `i32`.
pub fn hash_function(node: &Node) -> Result<i32, SketchbookError> {
    let index = parse_leading_int(&node.key)?;
    trace!(key = %node.key, index, "hashed key");
    Ok(index)
}

fn parse_leading_int(key: &str) -> Result<i32, SketchbookError> {
    let bytes = key.as_bytes();
    let mut pos = bytes
        .iter()
        .position(|&b| !matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r'))
        .unwrap_or(bytes.len());

    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let digits: Vec<i32> = bytes[pos..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .map(|b| i32::from(b - b'0'))
        .collect();

    if digits.is_empty() {
        return Err(SketchbookError::InvalidKey {
            key: key.to_string(),
        });
    }

    // Accumulate toward the sign so i32::MIN is reachable.
    digits
        .into_iter()
        .try_fold(0i32, |acc, digit| {
            let shifted = acc.checked_mul(10)?;
            if negative {
                shifted.checked_sub(digit)
            } else {
                shifted.checked_add(digit)
            }
        })
        .ok_or_else(|| SketchbookError::KeyOutOfRange {
            key: key.to_string(),
        })
}

/// Stores `node` in `buckets[index]` if that bucket is empty.
///
/// An occupied bucket keeps its node and `node` is dropped.
///
/// # Panics
///
/// Panics if `index` is out of bounds for `buckets`.
pub fn insert_into_hash_table(node: Node, index: usize, buckets: &mut [Option<Node>]) {
    if let Some(existing) = &buckets[index] {
        debug!(index, kept = %existing.key, dropped = %node.key, "bucket occupied, dropping node");
        return;
    }

    buckets[index] = Some(node);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case("0", 0; "zero")]
    #[test_case("7", 7; "single digit")]
    #[test_case("42", 42; "plain")]
    #[test_case("  42", 42; "leading spaces")]
    #[test_case("\t\n42", 42; "leading tab and newline")]
    #[test_case("+42", 42; "plus sign")]
    #[test_case("-42", -42; "minus sign")]
    #[test_case("42abc", 42; "trailing garbage ignored")]
    #[test_case("007", 7; "leading zeros")]
    #[test_case("2147483647", i32::MAX; "max")]
    #[test_case("-2147483648", i32::MIN; "min")]
    fn numeric_keys_hash_to_their_value(key: &str, expected: i32) {
        let node = Node::new(key, 0);
        assert_eq!(hash_function(&node).unwrap(), expected);
    }

    #[test_case("HeadNode"; "word")]
    #[test_case(""; "empty")]
    #[test_case("   "; "only whitespace")]
    #[test_case("-"; "bare sign")]
    #[test_case("+-1"; "double sign")]
    #[test_case("abc42"; "digits after letters")]
    fn non_numeric_keys_are_rejected(key: &str) {
        let node = Node::new(key, 0);
        assert!(matches!(
            hash_function(&node),
            Err(SketchbookError::InvalidKey { .. })
        ));
    }

    #[test_case("2147483648"; "max plus one")]
    #[test_case("-2147483649"; "min minus one")]
    #[test_case("99999999999999999999"; "very long")]
    fn oversized_keys_are_out_of_range(key: &str) {
        let node = Node::new(key, 0);
        assert!(matches!(
            hash_function(&node),
            Err(SketchbookError::KeyOutOfRange { .. })
        ));
    }

    #[test]
    fn error_message_names_the_key() {
        let err = hash_function(&Node::new("tailNode", 2)).unwrap_err();
        assert!(err.to_string().contains("tailNode"));
    }

    #[test]
    fn insert_fills_empty_bucket() {
        let mut buckets: Vec<Option<Node>> = vec![None; 4];

        insert_into_hash_table(Node::new("2", 20), 2, &mut buckets);

        assert_eq!(buckets[2], Some(Node::new("2", 20)));
        assert!(buckets.iter().enumerate().all(|(i, b)| i == 2 || b.is_none()));
    }

    #[test]
    fn insert_into_occupied_bucket_keeps_first() {
        let mut buckets: Vec<Option<Node>> = vec![None; 4];

        insert_into_hash_table(Node::new("1", 10), 1, &mut buckets);
        insert_into_hash_table(Node::new("01", 11), 1, &mut buckets);

        assert_eq!(buckets[1], Some(Node::new("1", 10)));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn insert_past_the_end_is_fatal() {
        let mut buckets: Vec<Option<Node>> = vec![None; 2];
        insert_into_hash_table(Node::new("5", 5), 5, &mut buckets);
    }

    #[test]
    fn hash_then_insert() {
        let mut buckets: Vec<Option<Node>> = vec![None; 8];
        let node = Node::new("3", 30);

        let index = usize::try_from(hash_function(&node).unwrap()).unwrap();
        insert_into_hash_table(node, index, &mut buckets);

        assert_eq!(buckets[3].as_ref().map(|n| n.value), Some(30));
    }

    proptest! {
        #[test]
        fn any_i32_key_round_trips(n in any::<i32>()) {
            let node = Node::new(n.to_string(), 0);
            prop_assert_eq!(hash_function(&node).unwrap(), n);
        }

        #[test]
        fn alphabetic_keys_never_hash(key in "[a-zA-Z]{1,16}") {
            let node = Node::new(key, 0);
            prop_assert!(hash_function(&node).is_err());
        }
    }
}
