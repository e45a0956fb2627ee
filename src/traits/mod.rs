//! Core traits for feeding values into the resolvers.
//!
//! - [`Attempt`]: Something the synchronous resolver can run exactly once
//! - [`Value`]: Wrapper marking a plain value as data rather than as a producer
//!
//! # Examples
//!
//! ```
//! use catch_rail::traits::{Attempt, Value};
//!
//! assert_eq!(Value(7).attempt().ok(), Some(7));
//! assert_eq!((|| Ok::<_, std::fmt::Error>(7)).attempt().ok(), Some(7));
//! ```

pub mod attempt;

pub use attempt::{Attempt, Value};
