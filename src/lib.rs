//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `catch_rail::*` or pick focused pieces as needed.
//!
//! Failures are turned into values: a panic, an `Err` from a producer or a
//! rejected future all end up in the error slot of a [`ResultPair`], which reads
//! both as a `(data, error)` pair and as a `Record { data, error }`.
//!
//! # Examples
//!
//! ## Synchronous Producer
//!
//! ```
//! use catch_rail::{try_catch_sync, Record};
//!
//! let pair = try_catch_sync(|| "42".parse::<i32>());
//!
//! let (data, error) = pair.as_pair();
//! assert_eq!(data, Some(&42));
//! assert!(error.is_none());
//!
//! let Record { data, error } = pair.into_record();
//! assert_eq!(data, Some(42));
//! assert!(error.is_none());
//! ```
//!
//! ## Non-Error Values Are Wrapped
//!
//! ```
//! use catch_rail::{try_catch_sync, Thrown, WRAPPED_MESSAGE};
//!
//! let pair = try_catch_sync(|| Err::<(), _>(Thrown(404u16)));
//! let error = pair.error().unwrap();
//!
//! assert_eq!(error.message(), WRAPPED_MESSAGE);
//! assert_eq!(error.cause_ref::<u16>(), Some(&404));
//! ```
//!
//! ## Recursive Resolution
//!
//! ```
//! use catch_rail::prelude_async::*;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let nested = Nestable::thunk(|| Nestable::future(async { Ok::<_, Failure>(7) }));
//! let pair = try_magic(nested).await;
//! assert_eq!(pair.data(), Some(&7));
//! # }
//! ```

/// Synchronous resolver
pub mod catch;
/// Normalization of caught values into failures
pub mod convert;
/// Macros for building resolver inputs
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Inputs accepted by the resolvers
pub mod traits;
/// ResultPair and Failure
pub mod types;

/// Async resolvers (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub(crate) use macros::trace_event;

pub use catch::try_catch_sync;
pub use convert::{as_error, as_error_from_panic};
pub use traits::{Attempt, Value};
pub use types::{Failure, PanicPayload, Record, ResultPair, Thrown, WRAPPED_MESSAGE};

#[cfg(feature = "async")]
pub use async_ext::{try_catch, try_magic, Nestable};
