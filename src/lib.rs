//! A small, embeddable JSON core: parse a text buffer into a flyweight value tree, query
//! it, and render it back out as compact canonical JSON.
//!
//! Parsed data lives in a flat [ValueStore] addressed by copyable [Value] handles rather
//! than a pointer-heavy tree; a [Document] bundles the store with the root handle. The
//! parser is a single-pass explicit state machine with its own container stack, so
//! nesting depth is never limited by the call stack.
//!
//! ```no_run
//! use flint_json::{Parser, ValueKind};
//!
//! let document = Parser::default().parse_str(r#"{"enabled": true, "ports": [80, 443]}"#)?;
//! let root = document.root();
//! assert_eq!(document.lookup(root, "enabled").map(|v| v.kind), Some(ValueKind::True));
//! println!("{}", document.to_json());
//! # Ok::<(), flint_json::ParserError>(())
//! ```

pub mod coords;
pub mod decoders;
#[macro_use]
pub mod errors;
pub mod parser;
pub mod store;
pub mod stringify;
mod trace;
#[cfg(test)]
mod test_macros;

pub use crate::coords::Coords;
pub use crate::decoders::Encoding;
pub use crate::errors::{ParserError, ParserErrorDetails, ParserResult};
pub use crate::parser::Parser;
pub use crate::store::{Document, KeyValue, Value, ValueKind, ValueStore};
pub use crate::stringify::{FloatFormat, Stringifier};
