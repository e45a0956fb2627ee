//! Extension trait for `Future<Output = Result<T, E>>`.
//!
//! Provides `.try_catch()` for futures, the method form of
//! [`try_catch`](super::try_catch).

use core::future::Future;

use crate::types::Failure;

use super::try_catch::TryCatch;

/// Extension trait for capturing the outcome of a `Result`-returning future.
///
/// # Examples
///
/// ```rust
/// use catch_rail::prelude_async::*;
///
/// #[derive(Debug)]
/// struct User;
///
/// async fn fetch_from_db(_id: u64) -> Result<User, std::io::Error> {
///     Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no such user"))
/// }
///
/// async fn fetch_user(id: u64) -> ResultPair<User> {
///     fetch_from_db(id).try_catch().await
/// }
/// ```
pub trait FutureTryCatchExt<T, E>: Future<Output = Result<T, E>> + Sized
where
    E: Into<Failure>,
{
    /// Captures the future's outcome, including panics, as a
    /// [`ResultPair`](crate::types::ResultPair).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catch_rail::prelude_async::*;
    ///
    /// async fn example() {
    ///     let pair = async { Err::<(), _>(Failure::new("failed")) }
    ///         .try_catch()
    ///         .await;
    ///     assert!(pair.is_err());
    /// }
    /// ```
    #[inline]
    fn try_catch(self) -> TryCatch<Self> {
        TryCatch::new(self)
    }
}

impl<Fut, T, E> FutureTryCatchExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<Failure>,
{
}
