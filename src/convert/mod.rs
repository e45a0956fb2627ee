//! Normalization of caught values into [`Failure`].
//!
//! Whatever a computation throws or rejects with, the resolvers store a
//! [`Failure`]. A value that already is one (or is a boxed proper error) passes
//! through untouched; anything else is wrapped with [`WRAPPED_MESSAGE`] and kept
//! as the cause, so nothing is discarded.
//!
//! # Examples
//!
//! ```
//! use catch_rail::convert::as_error;
//! use catch_rail::{Failure, WRAPPED_MESSAGE};
//!
//! let failure = as_error(Failure::new("boom"));
//! assert_eq!(failure.message(), "boom");
//!
//! let wrapped = as_error(42u8);
//! assert_eq!(wrapped.message(), WRAPPED_MESSAGE);
//! assert_eq!(wrapped.cause_ref::<u8>(), Some(&42));
//! ```

use std::any::Any;
use std::error::Error as StdError;

use crate::types::{Failure, PanicPayload};

pub use crate::types::WRAPPED_MESSAGE;

type BoxedAny = Box<dyn Any + Send + Sync + 'static>;

/// Normalizes an arbitrary caught value into a [`Failure`].
///
/// # Classification
///
/// - `Failure` is returned unchanged.
/// - `Box<dyn Error + Send + Sync>` becomes a failure around the same box.
/// - `Box<dyn Any + Send + Sync>` is classified by its contents.
/// - Anything else is wrapped: the message is [`WRAPPED_MESSAGE`] and the value
///   becomes the cause.
///
/// Typed errors (`std::io::Error` and friends) are not recognisable through
/// `Any`; convert those with `Failure::from` instead.
///
/// Never panics.
///
/// # Examples
///
/// ```
/// use catch_rail::convert::as_error;
///
/// let boxed: Box<dyn std::error::Error + Send + Sync> = "bad input".into();
/// let failure = as_error(boxed);
/// assert!(!failure.is_wrapped());
/// assert_eq!(failure.message(), "bad input");
/// ```
pub fn as_error<C>(caught: C) -> Failure
where
    C: Any + Send + Sync,
{
    normalize(Box::new(caught))
}

/// Normalizes a panic payload, as returned by [`std::panic::catch_unwind`].
///
/// Follows the same rules as [`as_error`]. Payloads from `panic!` (`&'static str`
/// or `String`) become the cause directly; a payload of any other type is kept
/// inside a [`PanicPayload`].
pub fn as_error_from_panic(payload: Box<dyn Any + Send + 'static>) -> Failure {
    let payload = match payload.downcast::<Failure>() {
        Ok(failure) => return *failure,
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<Box<dyn StdError + Send + Sync>>() {
        Ok(error) => return Failure::from_boxed(*error),
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<BoxedAny>() {
        Ok(inner) => return normalize(*inner),
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<&'static str>() {
        Ok(text) => return wrap(Box::new(*text)),
        Err(payload) => payload,
    };
    match payload.downcast::<String>() {
        Ok(text) => wrap(Box::new(*text)),
        Err(payload) => wrap(Box::new(PanicPayload::new(payload))),
    }
}

fn normalize(caught: BoxedAny) -> Failure {
    let caught = match caught.downcast::<Failure>() {
        Ok(failure) => return *failure,
        Err(caught) => caught,
    };
    let caught = match caught.downcast::<Box<dyn StdError + Send + Sync>>() {
        Ok(error) => return Failure::from_boxed(*error),
        Err(caught) => caught,
    };
    match caught.downcast::<BoxedAny>() {
        Ok(inner) => normalize(*inner),
        Err(caught) => wrap(caught),
    }
}

fn wrap(caught: BoxedAny) -> Failure {
    crate::trace_event!(debug, "wrapping a thrown value that is not a proper error");
    Failure::wrapped(caught)
}
