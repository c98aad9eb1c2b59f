//! # References
//!
//! `&a` is the address of `a`; `*address` reads the value stored there.
//! A `&mut` parameter lets a function write back into the caller's variable,
//! which is how [`swap_values`] exchanges two integers in place.
//!
//! The borrow checker rules out passing the same variable as both `x` and
//! `y`, so the aliased swap cannot be written.

/// Reads the value held at `address`.
pub fn value_at(address: &i32) -> i32 {
    *address
}

/// Exchanges the values behind `x` and `y` using a temporary.
pub fn swap_values(x: &mut i32, y: &mut i32) {
    let temp = *x;
    *x = *y;
    *y = temp;
}
