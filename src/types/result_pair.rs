//! The dual-shape success/failure container.
//!
//! A [`ResultPair`] holds exactly one of a success value or a [`Failure`]. The
//! same two slots can be read positionally, as `(data, error)`, or by name, as a
//! [`Record`] with `data` and `error` fields. Both views borrow or move out of the
//! one storage, so they can never disagree.
//!
//! # Examples
//!
//! ```
//! use catch_rail::{Record, ResultPair};
//!
//! let pair = ResultPair::ok(42);
//!
//! let (data, error) = pair.as_pair();
//! assert_eq!(data, Some(&42));
//! assert!(error.is_none());
//!
//! let Record { data, error } = pair.into_record();
//! assert_eq!(data, Some(42));
//! assert!(error.is_none());
//! ```

use core::fmt::{self, Debug};

use super::Failure;

/// Named-field view of a [`ResultPair`].
///
/// Also the input of [`ResultPair::from_record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Record<T, E = Failure> {
    /// Success value, `None` on failure.
    pub data: Option<T>,
    /// Failure, `None` on success.
    pub error: Option<E>,
}

/// Who built a pair. Only the recursive resolver sets `Magic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Origin {
    Plain,
    #[cfg_attr(not(feature = "async"), allow(dead_code))]
    Magic,
}

/// Exactly one of a success value or a [`Failure`], readable as a pair or a record.
///
/// Fields are private and there is no mutable access, so a pair is read-only
/// once built.
#[must_use]
pub struct ResultPair<T> {
    data: Option<T>,
    error: Option<Failure>,
    origin: Origin,
}

impl<T> ResultPair<T> {
    /// Creates a successful pair.
    #[inline]
    pub fn ok(data: T) -> Self {
        Self { data: Some(data), error: None, origin: Origin::Plain }
    }

    /// Creates a failed pair.
    #[inline]
    pub fn err(error: Failure) -> Self {
        Self { data: None, error: Some(error), origin: Origin::Plain }
    }

    /// Builds a pair from a `{ data, error }` record.
    ///
    /// Presence is `Option::is_some`, so falsy success values such as `0`,
    /// `""` or `false` are ordinary data.
    ///
    /// # Panics
    ///
    /// Panics if both or neither of `data` and `error` are present. That is an
    /// internal invariant of every resolver, not a user-facing failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use catch_rail::{Record, ResultPair};
    ///
    /// let pair = ResultPair::from_record(Record { data: Some(0), error: None });
    /// assert_eq!(pair.data(), Some(&0));
    /// ```
    pub fn from_record(record: Record<T>) -> Self {
        Self::from_record_with(record, Origin::Plain)
    }

    pub(crate) fn from_record_with(record: Record<T>, origin: Origin) -> Self {
        let Record { data, error } = record;
        assert!(
            data.is_some() != error.is_some(),
            "catch-rail internal error: a ResultPair must hold exactly one of data or error"
        );
        Self { data, error, origin }
    }

    /// Re-issues the pair with the resolver tag set.
    #[cfg_attr(not(feature = "async"), allow(dead_code))]
    pub(crate) fn tagged(self) -> Self {
        Self { origin: Origin::Magic, ..self }
    }

    #[inline]
    #[cfg_attr(not(feature = "async"), allow(dead_code))]
    pub(crate) fn is_tagged(&self) -> bool {
        self.origin == Origin::Magic
    }

    /// Returns the success value, if any.
    #[inline]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Returns the failure, if any.
    #[inline]
    pub fn error(&self) -> Option<&Failure> {
        self.error.as_ref()
    }

    /// Returns `true` if the pair holds data.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.data.is_some()
    }

    /// Returns `true` if the pair holds a failure.
    #[inline]
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }

    /// Positional view: `(data, error)`.
    #[inline]
    pub fn as_pair(&self) -> (Option<&T>, Option<&Failure>) {
        (self.data.as_ref(), self.error.as_ref())
    }

    /// Named view: `Record { data, error }`.
    #[inline]
    pub fn as_record(&self) -> Record<&T, &Failure> {
        Record { data: self.data.as_ref(), error: self.error.as_ref() }
    }

    /// Consumes the pair into `(data, error)`.
    #[inline]
    pub fn into_pair(self) -> (Option<T>, Option<Failure>) {
        (self.data, self.error)
    }

    /// Consumes the pair into `Record { data, error }`.
    #[inline]
    pub fn into_record(self) -> Record<T> {
        Record { data: self.data, error: self.error }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<T, Failure> {
        match (self.data, self.error) {
            (Some(data), _) => Ok(data),
            (None, Some(error)) => Err(error),
            (None, None) => unreachable!("ResultPair holds exactly one of data or error"),
        }
    }

    /// Maps the success value, keeping a failure untouched.
    pub fn map<U, F>(self, f: F) -> ResultPair<U>
    where
        F: FnOnce(T) -> U,
    {
        ResultPair { data: self.data.map(f), error: self.error, origin: self.origin }
    }
}

impl<T, E> From<Result<T, E>> for ResultPair<T>
where
    E: Into<Failure>,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(error) => Self::err(error.into()),
        }
    }
}

impl<T> From<ResultPair<T>> for (Option<T>, Option<Failure>) {
    #[inline]
    fn from(pair: ResultPair<T>) -> Self {
        pair.into_pair()
    }
}

impl<T> From<ResultPair<T>> for Record<T> {
    #[inline]
    fn from(pair: ResultPair<T>) -> Self {
        pair.into_record()
    }
}

impl<T: Debug> Debug for ResultPair<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultPair")
            .field("data", &self.data)
            .field("error", &self.error)
            .finish()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ResultPair<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ResultPair", 2)?;
        state.serialize_field("data", &self.data)?;
        state.serialize_field("error", &self.error)?;
        state.end()
    }
}
