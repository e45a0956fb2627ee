//! Tests for the single-level async resolver.

use std::future::ready;
use std::io;
use std::panic::panic_any;

use catch_rail::prelude_async::*;

use super::support::{Deferred, Thenable};
use crate::common::{addr, check};

#[test]
fn try_catch_is_send() {
    fn assert_send<T: Send>() {}

    assert_send::<TryCatch<std::future::Ready<Result<i32, Failure>>>>();
}

#[tokio::test]
async fn resolved_future_is_ok() {
    let actual = try_catch(async { Ok::<_, Failure>(42) }).await;
    check(&actual, Some(42), None);
}

#[tokio::test]
async fn rejected_future_is_error_with_identity() {
    let err = Failure::new("42");
    let origin = addr(&err);

    let actual = try_catch(async move { Err::<i32, _>(err) }).await;
    check(&actual, None, Some("42"));
    assert_eq!(addr(actual.error().unwrap()), origin);
}

#[tokio::test]
async fn rejected_with_non_error_is_wrapped() {
    let actual = try_catch(async { Err::<i32, _>(Thrown("42")) }).await;
    check(&actual, None, Some(WRAPPED_MESSAGE));
    assert_eq!(actual.error().unwrap().cause_ref::<&str>(), Some(&"42"));
}

#[tokio::test]
async fn sync_value_is_ok_and_matches_sync_resolver() {
    let actual = try_catch(Value(42)).await;
    check(&actual, Some(42), None);

    let sync = try_catch_sync(Value(42));
    assert_eq!(actual.as_pair().0, sync.as_pair().0);
    assert_eq!(actual.is_err(), sync.is_err());
}

#[tokio::test]
async fn typed_error_is_kept() {
    let actual = try_catch(ready(Err::<(), _>(io::Error::other("disk")))).await;
    let error = actual.error().unwrap();
    assert!(error.is::<io::Error>());
    assert_eq!(error.message(), "disk");
}

#[tokio::test]
async fn ok_thenable_is_ok() {
    let actual = try_catch(Thenable::fulfilled(42)).await;
    check(&actual, Some(42), None);
}

#[tokio::test]
async fn error_thenable_is_error() {
    let err = Failure::new("42");
    let origin = addr(&err);

    let actual = try_catch(Thenable::<i32>::rejected(err)).await;
    check(&actual, None, Some("42"));
    assert_eq!(addr(actual.error().unwrap()), origin);
}

#[tokio::test]
async fn suspends_with_the_inner_future() {
    let actual = try_catch(Deferred::new(Ok(7u8))).await;
    check(&actual, Some(7), None);
}

#[tokio::test]
async fn panic_while_polling_is_captured() {
    let actual = try_catch(async {
        if true {
            panic!("poll blew up");
        }
        Ok::<i32, Failure>(1)
    })
    .await;
    check(&actual, None, Some(WRAPPED_MESSAGE));
    assert_eq!(actual.error().unwrap().cause_ref::<&str>(), Some(&"poll blew up"));
}

#[tokio::test]
async fn panic_with_failure_keeps_identity() {
    let err = Failure::new("thrown");
    let origin = addr(&err);

    let actual = try_catch(async move {
        if true {
            panic_any(err);
        }
        Ok::<i32, Failure>(1)
    })
    .await;
    assert_eq!(addr(actual.error().unwrap()), origin);
}

#[tokio::test]
async fn panic_in_into_future_is_captured() {
    struct Exploding;

    impl std::future::IntoFuture for Exploding {
        type Output = Result<i32, Failure>;
        type IntoFuture = std::future::Ready<Result<i32, Failure>>;

        fn into_future(self) -> Self::IntoFuture {
            panic!("into_future blew up")
        }
    }

    let actual = try_catch(Exploding).await;
    assert_eq!(actual.error().unwrap().cause_ref::<&str>(), Some(&"into_future blew up"));
}

#[tokio::test]
async fn concurrent_resolutions_do_not_interfere() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            tokio::spawn(try_catch(async move {
                if i % 2 == 0 {
                    Ok(i)
                } else {
                    Err(Failure::new(format!("odd {i}")))
                }
            }))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let pair = handle.await.unwrap();
        if i % 2 == 0 {
            check(&pair, Some(i as i32), None);
        } else {
            check(&pair, None, Some(format!("odd {i}").as_str()));
        }
    }
}
