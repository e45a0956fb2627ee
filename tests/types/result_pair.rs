use catch_rail::{Failure, Record, ResultPair};

use crate::common::{addr, check};

#[test]
fn ok_pair_reads_the_same_both_ways() {
    let pair = ResultPair::ok(42);
    check(&pair, Some(42), None);
}

#[test]
fn err_pair_reads_the_same_both_ways() {
    let pair = ResultPair::<i32>::err(Failure::new("42"));
    check(&pair, None, Some("42"));
}

#[test]
fn falsy_values_are_data() {
    check(&ResultPair::from_record(Record { data: Some(0), error: None }), Some(0), None);
    check(&ResultPair::from_record(Record { data: Some(false), error: None }), Some(false), None);
    check(&ResultPair::from_record(Record { data: Some(""), error: None }), Some(""), None);
    check(&ResultPair::ok(f64::NAN).map(|v| v.is_nan()), Some(true), None);
}

#[test]
fn from_record_with_error() {
    let pair = ResultPair::<u8>::from_record(Record { data: None, error: Some(Failure::new("x")) });
    check(&pair, None, Some("x"));
}

#[test]
#[should_panic(expected = "exactly one of data or error")]
fn both_slots_are_an_internal_error() {
    let _ = ResultPair::from_record(Record { data: Some(1), error: Some(Failure::new("x")) });
}

#[test]
fn pair_and_record_conversions_move_the_same_values() {
    let failure = Failure::new("gone");
    let origin = addr(&failure);

    let (data, error): (Option<i32>, Option<Failure>) = ResultPair::err(failure).into();
    assert!(data.is_none());
    assert_eq!(addr(error.as_ref().unwrap()), origin);

    let Record { data, error } = ResultPair::<i32>::err(error.unwrap()).into_record();
    assert!(data.is_none());
    assert_eq!(addr(error.as_ref().unwrap()), origin);
}

#[test]
fn into_result_round_trips() {
    assert_eq!(ResultPair::ok("v").into_result().ok(), Some("v"));

    let pair: ResultPair<i32> = Err::<i32, _>(Failure::new("bad")).into();
    let err = pair.into_result().unwrap_err();
    assert_eq!(err.message(), "bad");
}

#[test]
fn from_std_result_converts_proper_errors() {
    let pair: ResultPair<u8> = "300".parse::<u8>().into();
    assert!(pair.is_err());
    assert!(pair.error().unwrap().is::<std::num::ParseIntError>());
}

#[test]
fn map_leaves_failures_untouched() {
    let pair = ResultPair::<i32>::err(Failure::new("kept")).map(|v| v * 2);
    check(&pair, None, Some("kept"));

    let pair = ResultPair::ok(21).map(|v| v * 2);
    check(&pair, Some(42), None);
}

#[test]
fn debug_lists_both_slots() {
    let debug = format!("{:?}", ResultPair::ok(7));
    assert_eq!(debug, "ResultPair { data: Some(7), error: None }");
}
