//! Single-level async resolution.
//!
//! [`try_catch`] awaits one awaitable and captures its outcome as a
//! [`ResultPair`]. A rejected future (`Err`) and a panic during `poll` end up in
//! the error slot the same way.

use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::catch::settle;
use crate::types::{Failure, ResultPair};

/// Awaits `awaitable` and captures the outcome as a [`ResultPair`].
///
/// Accepts anything implementing `IntoFuture<Output = Result<T, E>>`: futures,
/// `async` blocks, foreign awaitable types, and plain values spelled
/// [`Value`](crate::traits::Value). The returned future never panics on behalf
/// of the awaited computation and suspends only where that computation does.
///
/// # Examples
///
/// ```
/// use catch_rail::{try_catch, Failure, Value};
///
/// # #[tokio::main]
/// # async fn main() {
/// let pair = try_catch(async { Ok::<_, Failure>(42) }).await;
/// assert_eq!(pair.data(), Some(&42));
///
/// let pair = try_catch(async { Err::<i32, _>(Failure::new("42")) }).await;
/// assert_eq!(pair.error().unwrap().message(), "42");
///
/// let pair = try_catch(Value("plain")).await;
/// assert_eq!(pair.data(), Some(&"plain"));
/// # }
/// ```
pub fn try_catch<A, T, E>(awaitable: A) -> TryCatch<A::IntoFuture>
where
    A: IntoFuture<Output = Result<T, E>>,
    E: Into<Failure>,
{
    match panic::catch_unwind(AssertUnwindSafe(|| awaitable.into_future())) {
        Ok(future) => TryCatch::new(future),
        Err(payload) => TryCatch {
            future: None,
            early: Some(crate::convert::as_error_from_panic(payload)),
        },
    }
}

pin_project! {
    /// Future returned by [`try_catch`] and
    /// [`FutureTryCatchExt::try_catch`](super::FutureTryCatchExt::try_catch).
    ///
    /// Resolves to a [`ResultPair`] exactly once.
    ///
    /// # Cancel Safety
    ///
    /// `TryCatch` is cancel-safe if the inner future is cancel-safe. Dropping it
    /// before completion simply drops the inner future.
    #[must_use = "futures do nothing unless polled"]
    pub struct TryCatch<Fut> {
        #[pin]
        future: Option<Fut>,
        early: Option<Failure>,
    }
}

impl<Fut> TryCatch<Fut> {
    /// Wraps an existing future.
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future: Some(future), early: None }
    }
}

impl<Fut, T, E> Future for TryCatch<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<Failure>,
{
    type Output = ResultPair<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        if let Some(failure) = this.early.take() {
            return Poll::Ready(ResultPair::err(failure));
        }

        let future = this
            .future
            .as_mut()
            .as_pin_mut()
            .expect("TryCatch polled after completion; this is a bug");

        let outcome = match panic::catch_unwind(AssertUnwindSafe(|| future.poll(cx))) {
            Ok(Poll::Pending) => return Poll::Pending,
            Ok(Poll::Ready(result)) => Ok(result.map_err(Into::into)),
            Err(payload) => Err(payload),
        };

        this.future.set(None);
        Poll::Ready(settle(outcome))
    }
}

impl<Fut, T, E> FusedFuture for TryCatch<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<Failure>,
{
    fn is_terminated(&self) -> bool {
        self.future.is_none() && self.early.is_none()
    }
}
