//! Inputs accepted by the synchronous resolver.
//!
//! [`try_catch_sync`](crate::try_catch_sync) takes either a producer closure or
//! a plain value. Rust cannot tell "a closure meant as data" from "a closure
//! meant to be called" any better than by its type, so the rule is simple: every
//! closure is a producer, and a plain value is spelled [`Value`].

use core::convert::Infallible;
use core::future::{ready, IntoFuture, Ready};

use crate::types::Failure;

/// A computation the synchronous resolver runs exactly once.
///
/// Returning `Err` is the Rust counterpart of throwing. Panics are handled by
/// the resolver, not by implementors.
///
/// # Examples
///
/// ```
/// use catch_rail::traits::Attempt;
///
/// let parsed = (|| "12".parse::<u8>()).attempt();
/// assert_eq!(parsed.ok(), Some(12));
/// ```
pub trait Attempt<T> {
    /// Runs the computation.
    fn attempt(self) -> Result<T, Failure>;
}

impl<F, T, E> Attempt<T> for F
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Failure>,
{
    #[inline]
    fn attempt(self) -> Result<T, Failure> {
        self().map_err(Into::into)
    }
}

/// A plain, already-known value handed to a resolver as data.
///
/// Works with [`try_catch_sync`](crate::try_catch_sync) and, through
/// `IntoFuture`, with the async resolvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Value<T>(pub T);

impl<T> Value<T> {
    /// Returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Attempt<T> for Value<T> {
    #[inline]
    fn attempt(self) -> Result<T, Failure> {
        Ok(self.0)
    }
}

impl<T> IntoFuture for Value<T> {
    type Output = Result<T, Infallible>;
    type IntoFuture = Ready<Result<T, Infallible>>;

    #[inline]
    fn into_future(self) -> Self::IntoFuture {
        ready(Ok(self.0))
    }
}
