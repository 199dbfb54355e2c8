//! A binary executable that demonstrates how to use the `sprig-json`
//! library.
//!
//! This is the sample-data runner: it feeds a few literal documents to
//! `parse` and prints either the resulting value tree or the error
//! message. It is not part of the library itself.
//!
//! You can run it with: `cargo run`

use sprig_json::parse;

fn main() {
    let documents = [
        r#"{ "name": "Babbage", "admin": true, "tags": ["engine", "analytical"] }"#,
        r#"[true, { "nested": [] }, "end"]"#,
        // Numbers are outside the subset; this one is expected to fail.
        r#"{ "id": 1815 }"#,
        // Trailing comma; the parser rejects this one.
        r#"{ "a": "b", }"#,
    ];

    for input in documents {
        println!("Parsing: {input}");
        match parse(input) {
            Ok(value) => println!("  -> {value:?}"),
            Err(e) => println!("  -> {e}"),
        }
        println!();
    }
}
