use std::io;

use catch_rail::prelude_async::*;

fn parse_port(raw: &str) -> Result<u16, Failure> {
    Ok(raw.trim().parse::<u16>()?)
}

async fn read_config(path: &str) -> Result<String, io::Error> {
    std::fs::read_to_string(path)
}

#[tokio::main]
async fn main() {
    println!("Running Quick Start examples...");

    // 1. Synchronous attempts
    println!("\n1. Synchronous attempts:");
    let (port, error) = try_catch_sync(|| parse_port("8080")).into_pair();
    println!("port = {:?}, error = {:?}", port, error.map(|e| e.to_string()));

    let pair = try_catch_sync(|| parse_port("http"));
    if let Some(error) = pair.error() {
        println!("Error: {error}");
    }

    // 2. Panics become errors
    println!("\n2. Panics become errors:");
    std::panic::set_hook(Box::new(|_| {}));
    let pair = try_catch_sync(|| -> Result<u16, Failure> { panic!("config missing") });
    let _ = std::panic::take_hook();
    let error = pair.error().unwrap();
    println!("message = {:?}, cause = {:?}", error.message(), error.cause_ref::<&str>());

    // 3. Futures
    println!("\n3. Futures:");
    let Record { data, error } = read_config("config.toml").try_catch().await.into_record();
    match (data, error) {
        (Some(text), _) => println!("read {} bytes", text.len()),
        (None, Some(error)) => println!("Error: {error:#}"),
        (None, None) => unreachable!(),
    }

    // 4. Nested producers
    println!("\n4. Nested producers:");
    let nested = Nestable::thunk(|| {
        Nestable::future(async { Nestable::thunk(|| parse_port(" 443 ")) })
    });
    let mut resolving = try_magic(nested).max_depth(16);
    let pair = (&mut resolving).await;
    println!("data = {:?} after {} levels", pair.data(), resolving.depth());

    // 5. Resolved pairs pass through
    println!("\n5. Resolved pairs pass through:");
    let again = try_magic(pair).await;
    println!("data = {:?}", again.data());
}
