//! # Recursion
//!
//! Factorial and Fibonacci written as direct recursion with no memoization.
//! The cost profile is part of the point: `fibonnaci(n)` makes an exponential
//! number of calls.
//!
//! ## Base Cases
//!
//! - `factorial` stops at `n <= 1` and returns `1`. That guard also catches
//!   every negative input, so `factorial(-4) == 1`.
//! - Both Fibonacci functions stop at `n <= 1` and return `n` itself, so
//!   negative inputs come back unchanged.
//!
//! ## `tail_fibonnaci` Is Not Tail Recursive
//!
//! The name promises an accumulator-style tail call. The body is the same
//! two-branch recursion as [`fibonnaci`], and it is kept that way: both
//! functions must agree for every input.

/// Returns `n!` for `n >= 2`, and `1` for every `n <= 1`.
///
/// # Panics
///
/// Panics if the result does not fit in an `i32` (`n >= 13`).
pub fn factorial(n: i32) -> i32 {
    if n <= 1 {
        return 1;
    }

    match n.checked_mul(factorial(n - 1)) {
        Some(product) => product,
        None => panic!("factorial({n}) overflows i32"),
    }
}

/// Naive recursive Fibonacci: `fibonnaci(0) == 0`, `fibonnaci(1) == 1`.
pub fn fibonnaci(n: i32) -> i32 {
    if n > 1 {
        return fibonnaci(n - 1) + fibonnaci(n - 2);
    }

    n
}

/// Second naive recursive Fibonacci.
///
/// Despite the name this branches into two recursive calls and does no work
/// after them in tail position. Same results and same cost as [`fibonnaci`].
pub fn tail_fibonnaci(n: i32) -> i32 {
    if n <= 1 {
        return n;
    }

    tail_fibonnaci(n - 1) + tail_fibonnaci(n - 2)
}
