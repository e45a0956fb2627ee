//! Async resolvers.
//!
//! - [`try_catch`]: awaits one awaitable and captures the outcome.
//! - [`try_magic`]: keeps unwrapping thunks, futures and earlier pairs until a
//!   terminal value or failure is reached.
//!
//! # Feature Flag
//!
//! Requires the `async` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! catch-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use catch_rail::prelude_async::*;
//!
//! async fn fetch_user(id: u64) -> ResultPair<User> {
//!     try_catch(fetch_from_db(id)).await
//! }
//! ```

mod future_ext;
mod magic;
mod try_catch;

pub use future_ext::FutureTryCatchExt;
pub use magic::{try_magic, BoxNestedFuture, BoxThunk, DepthExceeded, Nestable, TryMagic};
pub use try_catch::{try_catch, TryCatch};
