//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! async resolvers.
//!
//! # Usage
//!
//! ```ignore
//! use catch_rail::prelude_async::*;
//!
//! async fn fetch_user(id: u64) -> ResultPair<User> {
//!     fetch_from_db(id).try_catch().await
//! }
//! ```
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Macros**: [`attempt!`]
//! - **Functions**: [`try_catch_sync`], [`as_error`]
//! - **Types**: [`ResultPair`], [`Record`], [`Failure`], [`Thrown`], [`Value`]
//!
//! ## Async-Specific
//!
//! - **Functions**: [`try_catch`](crate::async_ext::try_catch), [`try_magic`](crate::async_ext::try_magic)
//! - **Traits**: [`FutureTryCatchExt`](crate::async_ext::FutureTryCatchExt) - `.try_catch()` for futures
//! - **Types**: [`Nestable`](crate::async_ext::Nestable), [`TryCatch`](crate::async_ext::TryCatch), [`TryMagic`](crate::async_ext::TryMagic)

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{
    try_catch, try_magic, FutureTryCatchExt, Nestable, TryCatch, TryMagic,
};
