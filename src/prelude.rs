//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the synchronous surface. Import everything with:
//!
//! ```
//! use catch_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`attempt!`]
//! - **Functions**: [`try_catch_sync`], [`as_error`]
//! - **Types**: [`ResultPair`], [`Record`], [`Failure`], [`Thrown`], [`Value`]
//! - **Traits**: [`Attempt`]
//!
//! # Examples
//!
//! ```
//! use catch_rail::prelude::*;
//!
//! fn load_port(raw: &str) -> ResultPair<u16> {
//!     try_catch_sync(|| raw.parse::<u16>())
//! }
//!
//! assert_eq!(load_port("8080").data(), Some(&8080));
//! assert!(load_port("http").is_err());
//! ```

// Macros
pub use crate::attempt;

// Functions
pub use crate::catch::try_catch_sync;
pub use crate::convert::as_error;

// Core types
pub use crate::traits::{Attempt, Value};
pub use crate::types::{Failure, Record, ResultPair, Thrown, WRAPPED_MESSAGE};
