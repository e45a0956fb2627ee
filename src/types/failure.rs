//! The normalized failure object.
//!
//! [`Failure`] is what every resolver stores in the error slot of a
//! [`ResultPair`](crate::types::ResultPair). It is either a *proper* error
//! (anything implementing [`std::error::Error`], kept as-is behind one box) or a
//! message with an optional cause of any type.
//!
//! # Examples
//!
//! ```
//! use catch_rail::Failure;
//!
//! let plain = Failure::new("disk full");
//! assert_eq!(plain.message(), "disk full");
//! assert!(plain.cause().is_none());
//!
//! let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
//! let failure = Failure::from(io);
//! assert!(failure.is::<std::io::Error>());
//! assert!(!failure.is_wrapped());
//! ```

use std::any::Any;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display};
use std::ops::Deref;
use std::sync::Mutex;

/// Diagnostic message used when a thrown or rejected value is not a proper error.
pub const WRAPPED_MESSAGE: &str = "wrapped error because thrown value is not a proper error";

type BoxedError = Box<dyn StdError + Send + Sync + 'static>;
type BoxedCause = Box<dyn Any + Send + Sync + 'static>;

/// A normalized failure: a message plus an optional original cause.
///
/// `Failure` deliberately does not implement [`std::error::Error`] itself, which
/// allows the blanket `From<E: Error>` conversion (the same trade-off `anyhow`
/// makes). It dereferences to `dyn Error + Send + Sync` instead, and converts
/// into `Box<dyn Error + Send + Sync>` for interop with `?`.
pub struct Failure {
    inner: BoxedError,
}

impl Failure {
    /// Creates a failure with the given message and no cause.
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self { inner: Box::new(Message { message: message.into(), cause: None, wrapped: false }) }
    }

    /// Creates a failure with the given message and an arbitrary cause.
    #[inline]
    pub fn with_cause<C>(message: impl Into<Cow<'static, str>>, cause: C) -> Self
    where
        C: Any + Send + Sync,
    {
        Self {
            inner: Box::new(Message {
                message: message.into(),
                cause: Some(Box::new(cause)),
                wrapped: false,
            }),
        }
    }

    /// Keeps a proper error as the failure, boxing it exactly once.
    #[inline]
    pub fn from_error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self { inner: Box::new(error) }
    }

    /// Keeps an already boxed error as the failure without reallocating.
    #[inline]
    pub fn from_boxed(error: BoxedError) -> Self {
        Self { inner: error }
    }

    /// Wraps a value that is not a proper error, keeping it as the cause.
    pub(crate) fn wrapped(cause: BoxedCause) -> Self {
        Self {
            inner: Box::new(Message {
                message: Cow::Borrowed(WRAPPED_MESSAGE),
                cause: Some(cause),
                wrapped: true,
            }),
        }
    }

    /// Returns the failure message.
    ///
    /// Borrowed for message failures, rendered through `Display` for proper errors.
    pub fn message(&self) -> Cow<'_, str> {
        match self.as_message() {
            Some(msg) => Cow::Borrowed(&*msg.message),
            None => Cow::Owned(self.inner.to_string()),
        }
    }

    /// Returns the original cause attached to a message failure.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Any + Send + Sync)> {
        self.as_message().and_then(|msg| msg.cause.as_deref())
    }

    /// Returns the cause if it is of type `C`.
    #[inline]
    pub fn cause_ref<C: Any>(&self) -> Option<&C> {
        self.cause().and_then(|cause| cause.downcast_ref::<C>())
    }

    /// Consumes the failure and returns its cause, if any.
    pub fn into_cause(self) -> Option<BoxedCause> {
        match self.inner.downcast::<Message>() {
            Ok(msg) => msg.cause,
            Err(_) => None,
        }
    }

    /// Returns `true` when this failure was created by wrapping a non-error value.
    #[inline]
    pub fn is_wrapped(&self) -> bool {
        self.as_message().is_some_and(|msg| msg.wrapped)
    }

    /// Returns `true` if the underlying proper error is of type `E`.
    #[inline]
    pub fn is<E: StdError + 'static>(&self) -> bool {
        self.inner.is::<E>()
    }

    /// Borrows the underlying proper error as `E`.
    #[inline]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }

    /// Recovers the underlying proper error as `E`, or returns the failure unchanged.
    pub fn downcast<E: StdError + 'static>(self) -> Result<E, Self> {
        self.inner.downcast::<E>().map(|e| *e).map_err(|inner| Self { inner })
    }

    /// Iterates over this failure and every error in its `source()` chain.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(&*self.inner) }
    }

    /// Consumes the failure, returning the boxed error behind it.
    #[inline]
    pub fn into_boxed_error(self) -> BoxedError {
        self.inner
    }

    fn as_message(&self) -> Option<&Message> {
        self.inner.downcast_ref::<Message>()
    }
}

impl<E> From<E> for Failure
where
    E: StdError + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self::from_error(error)
    }
}

impl From<Failure> for BoxedError {
    #[inline]
    fn from(failure: Failure) -> Self {
        failure.inner
    }
}

impl Deref for Failure {
    type Target = dyn StdError + Send + Sync + 'static;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl AsRef<dyn StdError + Send + Sync + 'static> for Failure {
    #[inline]
    fn as_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.inner
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return Display::fmt(&self.inner, f);
        }
        for (i, err) in self.chain().enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            Display::fmt(err, f)?;
        }
        Ok(())
    }
}

impl Debug for Failure {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.inner, f)
    }
}

/// Iterator over a failure and its `source()` chain.
///
/// Created by [`Failure::chain`].
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Returns a textual rendering of a cause when it is a string.
pub(crate) fn describe_cause(cause: &(dyn Any + Send + Sync)) -> Option<&str> {
    if let Some(s) = cause.downcast_ref::<&'static str>() {
        return Some(*s);
    }
    cause.downcast_ref::<String>().map(String::as_str)
}

struct Message {
    message: Cow<'static, str>,
    cause: Option<BoxedCause>,
    wrapped: bool,
}

impl Display for Message {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Failure");
        s.field("message", &self.message);
        match self.cause.as_deref() {
            Some(cause) => match describe_cause(cause) {
                Some(text) => s.field("cause", &text),
                None => s.field("cause", &format_args!("<opaque>")),
            },
            None => s.field("cause", &format_args!("None")),
        };
        s.finish()
    }
}

impl StdError for Message {}

/// A thrown value of arbitrary type, used to reject with something that is not an error.
///
/// Converting a `Thrown` into a [`Failure`] runs it through
/// [`as_error`](crate::convert::as_error), so the value ends up as the cause of a
/// wrapped failure. Only a `Failure` or a `Box<dyn Error + Send + Sync>` passes
/// through unchanged; a concrete error type such as `std::io::Error` is wrapped
/// like any other value. Return those through `Err(e)` or `Failure::from` instead.
///
/// # Examples
///
/// ```
/// use catch_rail::{try_catch_sync, Thrown, WRAPPED_MESSAGE};
///
/// let pair = try_catch_sync(|| Err::<i32, _>(Thrown("42")));
/// let error = pair.error().unwrap();
/// assert_eq!(error.message(), WRAPPED_MESSAGE);
/// assert_eq!(error.cause_ref::<&str>(), Some(&"42"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thrown<V>(pub V);

impl<V> From<Thrown<V>> for Failure
where
    V: Any + Send + Sync,
{
    #[inline]
    fn from(thrown: Thrown<V>) -> Self {
        crate::convert::as_error(thrown.0)
    }
}

/// Holder for a panic payload that is neither text nor a recognised failure.
///
/// Panic payloads are only `Send`; the holder keeps such a payload inside a
/// `Sync` failure so it is never discarded. Recover it with
/// [`into_inner`](PanicPayload::into_inner) after [`Failure::into_cause`].
pub struct PanicPayload {
    payload: Mutex<Box<dyn Any + Send + 'static>>,
}

impl PanicPayload {
    pub(crate) fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload: Mutex::new(payload) }
    }

    /// Returns the original payload.
    pub fn into_inner(self) -> Box<dyn Any + Send + 'static> {
        self.payload.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns `true` if the payload is of type `P`.
    pub fn is<P: Any>(&self) -> bool {
        match self.payload.lock() {
            Ok(guard) => guard.is::<P>(),
            Err(poisoned) => poisoned.get_ref().is::<P>(),
        }
    }
}

impl Debug for PanicPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanicPayload").finish_non_exhaustive()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Failure {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Failure", 3)?;
        state.serialize_field("message", &self.message())?;
        state.serialize_field("wrapped", &self.is_wrapped())?;
        state.serialize_field("cause", &self.cause().and_then(describe_cause))?;
        state.end()
    }
}
