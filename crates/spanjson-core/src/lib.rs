//! # spanjson-core
//!
//! Recursive-descent parser that turns JSON text into a tree of tagged
//! [`Value`]s and reports how many bytes of the input the value used.
//!
//! The parser reads from the start of a borrowed `&str` and stops after one
//! value. It does not stream, does not resume, and does not report line or
//! column on failure: a [`ParseError`] names the reason only.
//!
//! ## Quick start
//!
//! ```rust
//! use spanjson_core::{parse, Dict, Value};
//!
//! let parsed = parse(r#"{"name":"Alice","scores":[95,87]}"#).unwrap();
//! assert_eq!(parsed.consumed, 33);
//!
//! let dict = parsed.value.get::<Dict>();
//! assert_eq!(dict["name"], Value::from("Alice"));
//! assert!(dict["scores"].is::<Vec<Value>>());
//!
//! // Text after the value is not consumed.
//! let parsed = parse("[1, 2] tail").unwrap();
//! assert_eq!(parsed.consumed, 6);
//! ```
//!
//! ## Modules
//!
//! - [`value`]: `Value`, `Kind`, typed accessors
//! - [`escape`]: backslash escape table
//! - [`parser`]: scalar parsers, container parsers and the dispatcher
//! - [`encoder`]: `Value` → compact JSON text
//! - [`interop`]: `serde::Serialize` and `serde_json::Value` conversions
//! - [`options`]: `ParseOptions`
//! - [`error`]: error types

pub mod encoder;
pub mod error;
pub mod escape;
pub mod interop;
pub mod options;
pub mod parser;
pub mod value;

pub use encoder::encode;
pub use error::{JsonError, ParseError, Result, TypeMismatch};
pub use escape::unescape;
pub use options::ParseOptions;
pub use parser::{
    parse, parse_array, parse_complete, parse_complete_with, parse_literal, parse_number,
    parse_object, parse_or_null, parse_string, parse_with, ParseResult, Parsed,
};
pub use value::{Dict, Kind, List, Value, Variant};
