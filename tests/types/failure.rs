use std::error::Error;
use std::fmt;
use std::io;

use catch_rail::{Failure, Thrown, WRAPPED_MESSAGE};

use crate::common::addr;

#[derive(Debug)]
struct Outer {
    source: io::Error,
}

impl fmt::Display for Outer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("loading config")
    }
}

impl Error for Outer {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

#[test]
fn new_failure_has_message_and_no_cause() {
    let failure = Failure::new("42");
    assert_eq!(failure.message(), "42");
    assert!(failure.cause().is_none());
    assert!(!failure.is_wrapped());
    assert_eq!(failure.to_string(), "42");
}

#[test]
fn with_cause_keeps_any_value() {
    let failure = Failure::with_cause("lookup failed", vec![1u8, 2, 3]);
    assert_eq!(failure.message(), "lookup failed");
    assert_eq!(failure.cause_ref::<Vec<u8>>(), Some(&vec![1, 2, 3]));
    assert!(!failure.is_wrapped());
}

#[test]
fn proper_errors_pass_through_and_downcast() {
    let failure = Failure::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
    assert!(failure.is::<io::Error>());
    assert_eq!(failure.message(), "missing");
    assert!(failure.cause().is_none());

    let io = failure.downcast::<io::Error>().unwrap();
    assert_eq!(io.kind(), io::ErrorKind::NotFound);
}

#[test]
fn downcast_to_wrong_type_returns_the_failure() {
    let failure = Failure::new("not io");
    let failure = failure.downcast::<io::Error>().unwrap_err();
    assert_eq!(failure.message(), "not io");
}

#[test]
fn from_boxed_keeps_the_allocation() {
    let boxed: Box<dyn Error + Send + Sync> = Box::new(io::Error::other("boom"));
    let origin = (&*boxed as *const (dyn Error + Send + Sync)).cast::<()>();
    let failure = Failure::from_boxed(boxed);
    assert_eq!(addr(&failure), origin);
}

#[test]
fn thrown_values_are_wrapped_with_the_cause() {
    let failure: Failure = Thrown("42").into();
    assert!(failure.is_wrapped());
    assert_eq!(failure.message(), WRAPPED_MESSAGE);
    assert_eq!(failure.cause_ref::<&str>(), Some(&"42"));
}

#[test]
fn thrown_failure_is_not_rewrapped() {
    let original = Failure::new("inner");
    let origin = addr(&original);
    let failure: Failure = Thrown(original).into();
    assert_eq!(addr(&failure), origin);
    assert!(!failure.is_wrapped());
}

#[test]
fn thrown_concrete_error_is_wrapped() {
    let failure: Failure = Thrown(io::Error::other("disk gone")).into();
    assert!(failure.is_wrapped());
    assert_eq!(failure.message(), WRAPPED_MESSAGE);
    let cause = failure.cause_ref::<io::Error>().map(|e| e.to_string());
    assert_eq!(cause.as_deref(), Some("disk gone"));

    let passed: Failure = io::Error::other("disk gone").into();
    assert!(!passed.is_wrapped());
    assert!(passed.is::<io::Error>());
}

#[test]
fn chain_walks_sources() {
    let failure = Failure::from(Outer { source: io::Error::other("disk gone") });
    let messages: Vec<String> = failure.chain().map(|e| e.to_string()).collect();
    assert_eq!(messages, vec!["loading config", "disk gone"]);
    assert_eq!(format!("{failure}"), "loading config");
    assert_eq!(format!("{failure:#}"), "loading config: disk gone");
}

#[test]
fn into_cause_returns_the_original_value() {
    let failure: Failure = Thrown(String::from("raw")).into();
    let cause = failure.into_cause().unwrap();
    assert_eq!(*cause.downcast::<String>().unwrap(), "raw");
}

#[test]
fn converts_into_boxed_std_error() {
    fn run() -> Result<(), Box<dyn Error + Send + Sync>> {
        Err::<(), _>(Failure::new("via question mark"))?;
        Ok(())
    }

    let err = run().unwrap_err();
    assert_eq!(err.to_string(), "via question mark");
}

#[test]
fn debug_shows_message_and_textual_cause() {
    let failure: Failure = Thrown("42").into();
    let debug = format!("{failure:?}");
    assert!(debug.contains(WRAPPED_MESSAGE));
    assert!(debug.contains("42"));
}

#[test]
fn failure_is_send_and_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<Failure>();
    assert_sync::<Failure>();
}
