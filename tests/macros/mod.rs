use catch_rail::{attempt, Failure, WRAPPED_MESSAGE};

use crate::common::check;

#[test]
fn attempt_captures_the_block_value() {
    let pair = attempt!({
        let base = 40;
        base + 2
    });
    check(&pair, Some(42), None);
}

#[test]
fn attempt_captures_question_mark() {
    let pair = attempt!({ "nope".parse::<u32>()? });
    assert!(pair.error().unwrap().is::<std::num::ParseIntError>());
}

#[test]
fn attempt_captures_explicit_failure() {
    let pair = attempt!({
        if "".is_empty() {
            return Err(Failure::new("empty"));
        }
        1
    });
    check(&pair, None, Some("empty"));
}

#[test]
fn attempt_captures_panics() {
    let pair = attempt!({
        let v: Vec<u8> = Vec::new();
        v[3]
    });
    check(&pair, None, Some(WRAPPED_MESSAGE));
}
