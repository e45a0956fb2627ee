//! Tracing integration for catch-rail.
//!
//! Reports the outcome of a resolution as a `tracing` event inside a span.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! catch-rail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::types::ResultPair;

/// Extension trait for recording a [`ResultPair`] outcome in a span.
///
/// # Example
///
/// ```rust,ignore
/// use catch_rail::tracing_ext::ResultPairSpanExt;
/// use tracing::info_span;
///
/// let span = info_span!("load_config");
/// let pair = try_catch_sync(load_config).in_span(&span);
/// ```
pub trait ResultPairSpanExt: Sized {
    /// Records the outcome in the current span.
    fn in_current_span(self) -> Self {
        self.in_span(&Span::current())
    }

    /// Records the outcome in `span`: a `warn` event with the failure chain on
    /// error, a `trace` event on success. The pair is returned unchanged.
    fn in_span(self, span: &Span) -> Self;
}

impl<T> ResultPairSpanExt for ResultPair<T> {
    fn in_span(self, span: &Span) -> Self {
        let _entered = span.enter();
        match self.error() {
            Some(failure) => {
                tracing::warn!(
                    span = span_name(span),
                    error = %format_args!("{:#}", failure),
                    wrapped = failure.is_wrapped(),
                    "resolution failed"
                );
            },
            None => tracing::trace!("resolution succeeded"),
        }
        self
    }
}

/// Returns the name of `span`, or `"unknown"` for a disabled span.
fn span_name(span: &Span) -> &'static str {
    span.metadata().map(|m| m.name()).unwrap_or("unknown")
}
