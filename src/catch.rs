//! Synchronous resolution: run once, capture everything.
//!
//! [`try_catch_sync`] is the boundary between code that fails by returning `Err`
//! or by panicking and code that wants a [`ResultPair`] back. Nothing escapes it.
//!
//! # Examples
//!
//! ```
//! use catch_rail::{try_catch_sync, Value};
//!
//! let (data, error) = try_catch_sync(|| "42".parse::<i32>()).into_pair();
//! assert_eq!(data, Some(42));
//! assert!(error.is_none());
//!
//! let pair = try_catch_sync(Value(0));
//! assert_eq!(pair.data(), Some(&0));
//! ```

use std::panic::{self, AssertUnwindSafe};
use std::thread;

use crate::convert::as_error_from_panic;
use crate::traits::Attempt;
use crate::types::{Failure, ResultPair};

/// Runs a producer (or takes a plain [`Value`](crate::traits::Value)) and captures
/// the outcome as a [`ResultPair`].
///
/// - `Ok(v)` becomes `{ data: v, error: None }`.
/// - `Err(e)` becomes `{ data: None, error: e.into() }`. A `Failure` or proper
///   error passes through unchanged.
/// - A panic is caught and its payload normalized with
///   [`as_error_from_panic`](crate::convert::as_error_from_panic).
///
/// Never suspends and never panics on behalf of the producer.
///
/// # Examples
///
/// ```
/// use catch_rail::{try_catch_sync, Failure};
///
/// let pair = try_catch_sync(|| -> Result<i32, Failure> { panic!("42") });
/// let error = pair.error().unwrap();
/// assert_eq!(error.cause_ref::<&str>(), Some(&"42"));
/// ```
pub fn try_catch_sync<T, A>(input: A) -> ResultPair<T>
where
    A: Attempt<T>,
{
    settle(panic::catch_unwind(AssertUnwindSafe(|| input.attempt())))
}

/// Turns a caught outcome into a pair. Shared by every resolver.
pub(crate) fn settle<T>(outcome: thread::Result<Result<T, Failure>>) -> ResultPair<T> {
    match outcome {
        Ok(Ok(data)) => ResultPair::ok(data),
        Ok(Err(failure)) => {
            crate::trace_event!(trace, "attempt returned a failure");
            ResultPair::err(failure)
        },
        Err(payload) => {
            crate::trace_event!(trace, "attempt panicked");
            ResultPair::err(as_error_from_panic(payload))
        },
    }
}
