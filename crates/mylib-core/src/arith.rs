//! Free functions: arithmetic, callbacks, the failing operation and the
//! long-running triangular sum.

use std::hint::black_box;

use tracing::{debug, instrument};

use crate::error::{Error, Result};

/// Message carried by [`might_fail`] when asked to fail
pub const FAILURE_MESSAGE: &str = "Something went wrong";

/// Add two integers, rejecting overflow.
pub fn add(a: i64, b: i64) -> Result<i64> {
    a.checked_add(b).ok_or(Error::Overflow { operation: "add" })
}

/// Fail with [`FAILURE_MESSAGE`] when `fail` is set.
pub fn might_fail(fail: bool) -> Result<()> {
    if fail {
        return Err(Error::failed(FAILURE_MESSAGE));
    }
    Ok(())
}

/// Apply `f` to `x`, then to the result.
///
/// The callable's own error type is propagated untouched; the second call
/// is skipped when the first one fails.
pub fn apply_twice<T, E, F>(mut f: F, x: T) -> std::result::Result<T, E>
where
    F: FnMut(T) -> std::result::Result<T, E>,
{
    let once = f(x)?;
    f(once)
}

/// Closed form of `0 + 1 + ... + (n - 1)`, or `None` when it overflows.
pub fn triangular(n: u64) -> Option<u64> {
    if n == 0 {
        return Some(0);
    }
    // One of n, n - 1 is even; halve it first so the product stays exact.
    let (a, b) = if n % 2 == 0 { (n / 2, n - 1) } else { (n, (n - 1) / 2) };
    a.checked_mul(b)
}

/// Sum `0..n` one element at a time.
///
/// This is deliberately CPU bound: callers in an interpreter release
/// their global lock around it. The closed form is only used to reject
/// inputs whose sum does not fit before any work is done.
#[instrument(level = "debug")]
pub fn long_task(n: u64) -> Result<u64> {
    let expected = triangular(n).ok_or(Error::Overflow {
        operation: "long_task",
    })?;

    let mut total: u64 = 0;
    for i in 0..n {
        // black_box keeps the loop from being folded into the closed form
        total = total.wrapping_add(black_box(i));
    }
    debug_assert_eq!(total, expected);

    debug!(total, "long_task finished");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_add() {
        assert_eq!(add(2, 5).unwrap(), 7);
        assert_eq!(add(-3, 3).unwrap(), 0);
    }

    #[test]
    fn test_add_overflow() {
        assert!(matches!(
            add(i64::MAX, 1),
            Err(Error::Overflow { operation: "add" })
        ));
    }

    #[test]
    fn test_might_fail() {
        assert!(might_fail(false).is_ok());
        let err = might_fail(true).unwrap_err();
        assert_eq!(err.to_string(), "Something went wrong");
    }

    #[test]
    fn test_apply_twice_doubles_twice() {
        let result: std::result::Result<i64, ()> = apply_twice(|x| Ok(x * 2), 5);
        assert_eq!(result, Ok(20));
    }

    #[test]
    fn test_apply_twice_stops_on_first_error() {
        let mut calls = 0;
        let result: std::result::Result<i64, &str> = apply_twice(
            |_| {
                calls += 1;
                Err("boom")
            },
            1,
        );
        assert_eq!(result, Err("boom"));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_long_task() {
        assert_eq!(long_task(0).unwrap(), 0);
        assert_eq!(long_task(1).unwrap(), 0);
        assert_eq!(long_task(5).unwrap(), 10);
        assert_eq!(long_task(1_000_000).unwrap(), 499_999_500_000);
    }

    #[test]
    fn test_long_task_overflow_is_rejected_up_front() {
        assert!(matches!(
            long_task(u64::MAX),
            Err(Error::Overflow {
                operation: "long_task"
            })
        ));
    }

    #[test]
    fn test_triangular() {
        assert_eq!(triangular(0), Some(0));
        assert_eq!(triangular(4), Some(6));
        assert_eq!(triangular(5), Some(10));
        assert_eq!(triangular(u64::MAX), None);
    }

    proptest! {
        #[test]
        fn prop_add_matches_integer_addition(a in -(1i64 << 60)..(1i64 << 60), b in -(1i64 << 60)..(1i64 << 60)) {
            prop_assert_eq!(add(a, b).unwrap(), a + b);
        }

        #[test]
        fn prop_long_task_matches_closed_form(n in 0u64..5_000) {
            prop_assert_eq!(long_task(n).unwrap(), n * n.saturating_sub(1) / 2);
        }
    }
}
