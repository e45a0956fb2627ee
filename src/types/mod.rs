//! Result and failure types.
//!
//! This module provides the two values every resolver produces: the
//! dual-shape [`ResultPair`] and the normalized [`Failure`] stored in its
//! error slot.
//!
//! # Examples
//!
//! ```
//! use catch_rail::{Failure, ResultPair};
//!
//! let pair: ResultPair<u32> = ResultPair::err(Failure::new("database connection failed"));
//!
//! let (data, error) = pair.as_pair();
//! assert!(data.is_none());
//! assert_eq!(error.unwrap().message(), "database connection failed");
//! ```

pub mod failure;
pub mod result_pair;

pub use failure::*;
pub use result_pair::{Record, ResultPair};
