//! The stringifier.
//!
//! Walks a [Value] tree through the backing [ValueStore] and renders compact JSON text:
//! `", "` between entries, `": "` after keys, no trailing separators. String rendering is
//! ASCII-oriented - the short escapes plus `\u00XX` for remaining control characters, with
//! everything else passed through unchanged.

use std::fmt::Write;

use crate::store::{Document, Value, ValueKind, ValueStore};

/// Policy for rendering float values
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FloatFormat {
    /// Scientific notation at a fixed number of significant digits. Simple and
    /// predictable, but not round-trip exact.
    Scientific { precision: usize },
    /// Shortest representation that parses back to the same f64. Always keeps a
    /// decimal point so a float never re-reads as an integer.
    Shortest,
}

impl Default for FloatFormat {
    fn default() -> Self {
        FloatFormat::Scientific { precision: 7 }
    }
}

/// Renders [Value] trees as canonical compact JSON text
#[derive(Debug, Default)]
pub struct Stringifier {
    float_format: FloatFormat,
}

impl Stringifier {
    pub fn new(float_format: FloatFormat) -> Self {
        Stringifier { float_format }
    }

    /// Render a whole [Document] from its root
    pub fn stringify(&self, document: &Document) -> String {
        self.stringify_value(document, document.root())
    }

    /// Render an arbitrary value belonging to the given [Document]
    pub fn stringify_value(&self, document: &Document, value: Value) -> String {
        let mut output = String::new();
        self.write_value(document.store(), value, &mut output);
        output
    }

    fn write_value(&self, store: &ValueStore, value: Value, output: &mut String) {
        match value.kind {
            ValueKind::Null => output.push_str("null"),
            ValueKind::True => output.push_str("true"),
            ValueKind::False => output.push_str("false"),
            ValueKind::Integer => {
                let _ = write!(output, "{}", store.integer(value));
            }
            ValueKind::Float => self.write_float(store.float(value), output),
            ValueKind::String => write_escaped(store.string(value), output),
            ValueKind::Array => self.write_array(store, value, output),
            ValueKind::Object => self.write_object(store, value, output),
            ValueKind::KeyValue | ValueKind::None => {
                debug_assert!(false, "stringify reached a non-value handle: {:?}", value);
            }
        }
    }

    fn write_float(&self, value: f64, output: &mut String) {
        match self.float_format {
            FloatFormat::Scientific { precision } => {
                let _ = write!(output, "{:.*e}", precision.saturating_sub(1), value);
            }
            FloatFormat::Shortest => {
                // {:?} on an f64 is the shortest round-trippable form and always
                // includes a decimal point or exponent
                let _ = write!(output, "{:?}", value);
            }
        }
    }

    fn write_array(&self, store: &ValueStore, value: Value, output: &mut String) {
        output.push('[');
        for (i, element) in store.array(value).iter().enumerate() {
            if i > 0 {
                output.push_str(", ");
            }
            self.write_value(store, *element, output);
        }
        output.push(']');
    }

    fn write_object(&self, store: &ValueStore, value: Value, output: &mut String) {
        output.push('{');
        for (i, entry) in store.entries(value).iter().enumerate() {
            if i > 0 {
                output.push_str(", ");
            }
            let kv = store.key_value(*entry);
            write_escaped(&kv.key, output);
            output.push_str(": ");
            self.write_value(store, kv.value, output);
        }
        output.push('}');
    }
}

fn write_escaped(s: &str, output: &mut String) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\x08' => output.push_str("\\b"),
            '\x0C' => output.push_str("\\f"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c < '\x20' => {
                let _ = write!(output, "\\u{:04x}", c as u32);
            }
            c => output.push(c),
        }
    }
    output.push('"');
}
