use std::io;

use catch_rail::prelude_async::*;

use crate::common::{addr, check};

async fn load(id: u64) -> Result<String, io::Error> {
    if id == 0 {
        return Err(io::Error::new(io::ErrorKind::NotFound, "no such record"));
    }
    Ok(format!("record {id}"))
}

#[tokio::test]
async fn method_form_captures_success() {
    let pair = load(7).try_catch().await;
    check(&pair, Some("record 7".to_string()), None);
}

#[tokio::test]
async fn method_form_captures_typed_errors() {
    let pair = load(0).try_catch().await;
    check(&pair, None, Some("no such record"));

    let error = pair.error().unwrap();
    assert_eq!(error.downcast_ref::<io::Error>().map(io::Error::kind), Some(io::ErrorKind::NotFound));
}

#[tokio::test]
async fn method_form_keeps_failure_identity() {
    let err = Failure::new("gone");
    let origin = addr(&err);

    let pair = async move { Err::<u8, _>(err) }.try_catch().await;
    assert_eq!(addr(pair.error().unwrap()), origin);
}

#[tokio::test]
async fn method_form_captures_panics() {
    let pair = async {
        if true {
            panic!("mid-flight");
        }
        Ok::<u8, Failure>(0)
    }
    .try_catch()
    .await;

    check(&pair, None, Some(WRAPPED_MESSAGE));
}

#[tokio::test]
async fn method_form_matches_function_form() {
    let by_method = load(3).try_catch().await;
    let by_function = try_catch(load(3)).await;
    assert_eq!(by_method.into_pair().0, by_function.into_pair().0);
}
