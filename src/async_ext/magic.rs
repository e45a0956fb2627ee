//! Recursive async resolution ("magic" mode).
//!
//! [`try_magic`] keeps unwrapping its input until nothing nested is left:
//! thunks are called, futures are awaited, and whatever they produce is
//! resolved again. A [`ResultPair`] is always terminal: one this resolver
//! already produced is returned as-is, and any other pair comes out with the
//! same data or error. Both cases look the same to a caller. Pairs are
//! recognised by the `Resolved` variant of [`Nestable`], never by their shape,
//! so a user value that merely looks like a pair is treated as data.
//!
//! Inputs are described by the [`Nestable`] sum type. Each variant is one
//! transition of the resolver:
//!
//! | Variant    | Transition |
//! |------------|------------|
//! | `Value`    | terminal success |
//! | `Failed`   | terminal failure, no further unwrapping |
//! | `Resolved` | pass-through when tagged, otherwise re-issued tagged |
//! | `Thunk`    | call it, resolve the result |
//! | `Future`   | await it, resolve the output |
//!
//! # Examples
//!
//! ```
//! use catch_rail::async_ext::{try_magic, Nestable};
//!
//! # #[tokio::main]
//! # async fn main() {
//! // () => () => Promise.resolve(() => () => 42)
//! let nested = Nestable::thunk(|| {
//!     Nestable::thunk(|| {
//!         Nestable::future(async {
//!             Nestable::thunk(|| Nestable::thunk(|| Nestable::value(42)))
//!         })
//!     })
//! });
//!
//! let pair = try_magic(nested).await;
//! assert_eq!(pair.data(), Some(&42));
//! # }
//! ```

use core::fmt;
use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use futures_core::future::FusedFuture;

use crate::convert::as_error_from_panic;
use crate::traits::Value;
use crate::types::{Failure, ResultPair};

/// Boxed zero-argument producer of another nestable value.
pub type BoxThunk<T> = Box<dyn FnOnce() -> Nestable<T> + Send + 'static>;

/// Boxed future resolving to another nestable value.
pub type BoxNestedFuture<T> = Pin<Box<dyn Future<Output = Nestable<T>> + Send + 'static>>;

/// A value the recursive resolver knows how to unwrap.
///
/// Build it with the constructors ([`value`](Nestable::value),
/// [`thunk`](Nestable::thunk), [`future`](Nestable::future),
/// [`fail`](Nestable::fail)) or through `From` for results, failures, pairs and
/// [`Value`].
pub enum Nestable<T> {
    /// A plain, terminal value.
    Value(T),
    /// A producer to call once.
    Thunk(BoxThunk<T>),
    /// An awaitable to await once.
    Future(BoxNestedFuture<T>),
    /// A failure handed over as a value; resolved without further unwrapping.
    Failed(Failure),
    /// A pair produced earlier.
    Resolved(ResultPair<T>),
}

impl<T> Nestable<T> {
    /// Wraps a plain value.
    #[inline]
    pub fn value(value: T) -> Self {
        Self::Value(value)
    }

    /// Wraps a producer. Whatever it returns is resolved again.
    pub fn thunk<F, N>(thunk: F) -> Self
    where
        T: 'static,
        F: FnOnce() -> N + Send + 'static,
        N: Into<Nestable<T>> + 'static,
    {
        Self::Thunk(Box::new(move || -> Nestable<T> { thunk().into() }))
    }

    /// Wraps an awaitable. Its output is resolved again.
    ///
    /// `into_future` runs lazily, inside the resolver, so a panic there is
    /// captured like any other.
    pub fn future<A, N>(awaitable: A) -> Self
    where
        T: 'static,
        A: IntoFuture<Output = N> + Send + 'static,
        A::IntoFuture: Send,
        N: Into<Nestable<T>> + 'static,
    {
        Self::Future(Box::pin(async move {
            let next: Nestable<T> = awaitable.await.into();
            next
        }))
    }

    /// Wraps a failure.
    #[inline]
    pub fn fail(failure: impl Into<Failure>) -> Self {
        Self::Failed(failure.into())
    }
}

impl<T> From<ResultPair<T>> for Nestable<T> {
    #[inline]
    fn from(pair: ResultPair<T>) -> Self {
        Self::Resolved(pair)
    }
}

impl<T> From<Failure> for Nestable<T> {
    #[inline]
    fn from(failure: Failure) -> Self {
        Self::Failed(failure)
    }
}

impl<T> From<Value<T>> for Nestable<T> {
    #[inline]
    fn from(value: Value<T>) -> Self {
        Self::Value(value.0)
    }
}

impl<T, E> From<Result<T, E>> for Nestable<T>
where
    E: Into<Failure>,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(error) => Self::Failed(error.into()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Nestable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Thunk(_) => f.write_str("Thunk(..)"),
            Self::Future(_) => f.write_str("Future(..)"),
            Self::Failed(failure) => f.debug_tuple("Failed").field(failure).finish(),
            Self::Resolved(pair) => f.debug_tuple("Resolved").field(pair).finish(),
        }
    }
}

/// Error stored in the pair when [`TryMagic::max_depth`] is exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthExceeded {
    /// The configured limit.
    pub limit: usize,
}

impl fmt::Display for DepthExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nesting depth limit of {} exceeded", self.limit)
    }
}

impl std::error::Error for DepthExceeded {}

/// Resolves `input` recursively and captures the outcome as a [`ResultPair`].
///
/// The resolver loops over the [`Nestable`] transitions until it reaches a
/// terminal value or a failure:
///
/// 1. `Thunk`: the producer is called once and its result resolved again.
/// 2. `Future`: the awaitable is awaited and its output resolved again.
/// 3. `Failed`: the failure becomes the error, identity preserved.
/// 4. `Resolved`: the pair's data or error is returned unchanged, so
///    `try_magic(try_magic(v).await)` yields the same pair. Whether the pair
///    came from this resolver makes no observable difference.
/// 5. `Value`: terminal success.
///
/// A panic at any depth, in a producer or in a `poll`, is normalized with
/// [`as_error_from_panic`](crate::convert::as_error_from_panic) and becomes the
/// error. There is no depth limit unless [`TryMagic::max_depth`] sets one, so a
/// producer chain that never ends never resolves.
///
/// # Examples
///
/// ```
/// use catch_rail::async_ext::{try_magic, Nestable};
/// use catch_rail::{Failure, ResultPair};
///
/// # #[tokio::main]
/// # async fn main() {
/// let first: ResultPair<i32> = try_magic(Nestable::value(42)).await;
/// let again = try_magic(first).await;
/// assert_eq!(again.data(), Some(&42));
///
/// let failed: ResultPair<i32> = try_magic(Failure::new("42")).await;
/// assert_eq!(failed.error().unwrap().message(), "42");
/// # }
/// ```
pub fn try_magic<T, N>(input: N) -> TryMagic<T>
where
    N: Into<Nestable<T>>,
{
    TryMagic { state: Some(input.into()), depth: 0, max_depth: None }
}

/// Future returned by [`try_magic`].
///
/// Each thunk call and each awaited future counts as one level of depth.
#[must_use = "futures do nothing unless polled"]
pub struct TryMagic<T> {
    state: Option<Nestable<T>>,
    depth: usize,
    max_depth: Option<usize>,
}

// `T` is only ever moved out of the state, never pinned.
impl<T> Unpin for TryMagic<T> {}

impl<T> TryMagic<T> {
    /// Fails with [`DepthExceeded`] instead of unwrapping more than `limit` levels.
    #[inline]
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Number of levels unwrapped so far.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn exceeded(&self) -> Option<Failure> {
        match self.max_depth {
            Some(limit) if self.depth >= limit => {
                crate::trace_event!(debug, limit = limit, "nesting depth limit exceeded");
                Some(Failure::from(DepthExceeded { limit }))
            },
            _ => None,
        }
    }
}

impl<T> Future for TryMagic<T> {
    type Output = ResultPair<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        loop {
            let state = this
                .state
                .take()
                .expect("TryMagic polled after completion; this is a bug");

            let next = match state {
                Nestable::Value(value) => return Poll::Ready(ResultPair::ok(value).tagged()),
                Nestable::Failed(failure) => {
                    crate::trace_event!(trace, depth = this.depth, "resolved to a failure");
                    return Poll::Ready(ResultPair::err(failure).tagged());
                },
                Nestable::Resolved(pair) if pair.is_tagged() => return Poll::Ready(pair),
                Nestable::Resolved(pair) => return Poll::Ready(pair.tagged()),
                Nestable::Thunk(thunk) => {
                    if let Some(failure) = this.exceeded() {
                        return Poll::Ready(ResultPair::err(failure).tagged());
                    }
                    match panic::catch_unwind(AssertUnwindSafe(thunk)) {
                        Ok(next) => next,
                        Err(payload) => Nestable::Failed(as_error_from_panic(payload)),
                    }
                },
                Nestable::Future(mut future) => {
                    if let Some(failure) = this.exceeded() {
                        return Poll::Ready(ResultPair::err(failure).tagged());
                    }
                    match panic::catch_unwind(AssertUnwindSafe(|| future.as_mut().poll(cx))) {
                        Ok(Poll::Pending) => {
                            this.state = Some(Nestable::Future(future));
                            return Poll::Pending;
                        },
                        Ok(Poll::Ready(next)) => next,
                        Err(payload) => Nestable::Failed(as_error_from_panic(payload)),
                    }
                },
            };

            this.depth += 1;
            crate::trace_event!(trace, depth = this.depth, "unwrapped one nesting level");
            this.state = Some(next);
        }
    }
}

impl<T> FusedFuture for TryMagic<T> {
    fn is_terminated(&self) -> bool {
        self.state.is_none()
    }
}
