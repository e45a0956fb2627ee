//! Macros for building resolver inputs and for internal diagnostics.
//!
//! - [`macro@crate::attempt`] - Runs a block through
//!   [`try_catch_sync`](crate::try_catch_sync), so `?` inside the block is captured
//!   into the returned [`ResultPair`](crate::types::ResultPair).
//!
//! # Examples
//!
//! ```
//! use catch_rail::attempt;
//!
//! let pair = attempt!({
//!     let n: i32 = "42".parse()?;
//!     n * 2
//! });
//! assert_eq!(pair.data(), Some(&84));
//!
//! let pair = attempt!({ "x".parse::<i32>()? });
//! assert!(pair.is_err());
//! ```

/// Runs a block as a synchronous attempt and returns a
/// [`ResultPair`](crate::types::ResultPair).
///
/// The block's value becomes the data. `?` converts any error into a
/// [`Failure`](crate::types::Failure), and panics are caught as well.
///
/// # Examples
///
/// ```rust
/// use catch_rail::{attempt, Failure};
///
/// let pair = attempt!({
///     if true {
///         return Err(Failure::new("no"));
///     }
///     1
/// });
/// assert_eq!(pair.error().unwrap().message(), "no");
/// ```
#[macro_export]
macro_rules! attempt {
    ($body:block) => {
        $crate::try_catch_sync(|| -> ::core::result::Result<_, $crate::types::Failure> {
            ::core::result::Result::Ok($body)
        })
    };
}

/// Emits a `tracing` event when the `tracing` feature is enabled, otherwise nothing.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($arg)+);
    }};
}

pub(crate) use trace_event;
