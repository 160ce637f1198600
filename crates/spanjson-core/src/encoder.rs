//! Compact JSON text from a [`Value`] tree.
//!
//! Output is chosen so that [`parse`](crate::parse) reads back an equal tree:
//!
//! - Strings escape `"`, `\` and the control characters the escape table
//!   knows; every other character is written verbatim (no `\u` escapes,
//!   which the parser would not understand).
//! - Floats always carry a fraction or exponent (`1.0`, `1e300`) so they
//!   come back as `Float`, never `Int`.
//! - Dict keys are written in sorted order, so equal trees encode to equal
//!   text.

use std::fmt;

use crate::error::{JsonError, Result};
use crate::escape::escape;
use crate::value::{sorted_entries, Value};

/// Encode a value as compact JSON text.
///
/// Fails only for NaN or infinite floats, which JSON cannot express.
pub fn encode(value: &Value) -> Result<String> {
    let mut writer = Writer {
        out: String::new(),
        non_finite_as_null: false,
    };
    writer.value(value)?;
    Ok(writer.out)
}

/// Writes the same text as [`encode`], except that non-finite floats
/// appear as `null`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = Writer {
            out: String::new(),
            non_finite_as_null: true,
        };
        writer.value(self).map_err(|_| fmt::Error)?;
        f.write_str(&writer.out)
    }
}

struct Writer {
    out: String,
    non_finite_as_null: bool,
}

impl Writer {
    fn value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(true) => self.out.push_str("true"),
            Value::Bool(false) => self.out.push_str("false"),
            Value::Int(n) => self.out.push_str(&n.to_string()),
            Value::Float(f) => self.float(*f)?,
            Value::String(s) => self.string(s),
            Value::List(items) => {
                self.out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.value(item)?;
                }
                self.out.push(']');
            }
            Value::Dict(dict) => {
                self.out.push('{');
                for (i, (key, item)) in sorted_entries(dict).into_iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.string(key);
                    self.out.push(':');
                    self.value(item)?;
                }
                self.out.push('}');
            }
        }
        Ok(())
    }

    fn float(&mut self, f: f64) -> Result<()> {
        if !f.is_finite() {
            if self.non_finite_as_null {
                self.out.push_str("null");
                return Ok(());
            }
            return Err(JsonError::Encode(format!(
                "float {f} has no JSON representation"
            )));
        }
        // Debug keeps a `.0` on whole numbers and is shortest-roundtrip.
        self.out.push_str(&format!("{f:?}"));
        Ok(())
    }

    fn string(&mut self, s: &str) {
        self.out.push('"');
        for c in s.chars() {
            match escape(c) {
                Some(letter) => {
                    self.out.push('\\');
                    self.out.push(letter);
                }
                None => self.out.push(c),
            }
        }
        self.out.push('"');
    }
}
