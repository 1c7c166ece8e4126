//! Demo client for resilient decoding
//!
//! Decodes a payload whose `foo` value is malformed and whose `bar` key is
//! missing; both fields come back as their declared defaults. Run with
//! `RUST_LOG=trace` to see the swallowed per-field failures.

use anyhow::Result;
use resilient_codable::{ResilientCodable, from_json_str};
use serde::Serialize;

#[derive(ResilientCodable, Serialize, Debug)]
struct Foo {
    #[resilient(default = 0)]
    foo: i32,

    #[resilient(default = String::from("bar"))]
    bar: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let json = r#"
    {
        "foo": "one"
    }
    "#;

    let foo: Foo = from_json_str(json)?;
    println!("foo is {} and bar is {}", foo.foo, foo.bar);

    Ok(())
}
