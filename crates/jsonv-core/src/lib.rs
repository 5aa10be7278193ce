//! # jsonv-core
//!
//! A minimal JSON value library: an in-memory tagged-union representation of
//! JSON data, a recursive-descent parser with positional error reporting,
//! and a serializer with depth-proportional indentation.
//!
//! The format is a deliberately small JSON subset: five kinds (null, number,
//! string, array, object), no string escape sequences, no booleans, no
//! `NaN`/`Infinity`. Numbers keep the integer/double distinction across a
//! round trip. Object iteration order is lexicographic by key.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonv_core::Value;
//!
//! let doc = Value::parse(r#"{"node": 1, "subnodes": [{"node": "a"}]}"#).unwrap();
//! assert!(doc.at_key("node").unwrap().is_integer());
//!
//! let text = doc.serialize().unwrap();
//! assert_eq!(Value::parse(&text).unwrap(), doc);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — `Value`, `Number`, `Array`, `Object`, `Kind`
//! - [`parser`] — JSON text → `Value`
//! - [`generator`] — `Value` → JSON text
//! - [`error`] — `JsonError` and the crate `Result` alias

pub mod error;
pub mod generator;
pub mod parser;
pub mod value;

pub use error::{JsonError, Result};
pub use generator::serialize;
pub use parser::parse;
pub use value::{Array, Kind, Number, Object, Value};
