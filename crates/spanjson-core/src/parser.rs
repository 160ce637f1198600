//! Recursive-descent JSON parser over a borrowed text span.
//!
//! Every parser takes the remaining input as `&str` and, on success, returns
//! the value together with how many bytes it consumed. The caller owns the
//! cursor and advances it by that amount; no parser keeps state between
//! calls, so parsing is reentrant and thread-safe.
//!
//! # Dispatch order
//!
//! [`parse`] skips leading whitespace, then tries the literal, number and
//! string parsers in that order. If none matches it looks at the first
//! character: `[` goes to the array parser, `{` to the object parser.
//! Containers re-enter the dispatcher for every element and value.
//!
//! # Leniency
//!
//! The grammar is looser than RFC 8259 in a few deliberate places:
//!
//! - Commas between container members are optional, and a trailing comma
//!   before the closing bracket is accepted. Two commas in a row are not.
//! - The number scanner collects any run of digits, `.`, `e`, `E`, `+`, `-`
//!   and then asks the integer and float parsers whether the whole run is
//!   valid, so `007` and `.5` are numbers.
//! - String escapes go through [`unescape`](crate::escape::unescape), which
//!   has no `\u` form.
//! - [`parse`] does not require the value to span the whole input. Use
//!   [`parse_complete`] for that.

use crate::error::{JsonError, ParseError, Result};
use crate::escape::unescape;
use crate::options::ParseOptions;
use crate::value::{Dict, List, Value};

/// A successfully parsed value and the number of bytes it consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub value: Value,
    /// Byte length of the value's own text, counted from its first
    /// significant character. Always nonzero and always on a `char` boundary.
    /// Whitespace the dispatcher skipped before the value is not included.
    pub consumed: usize,
}

impl Parsed {
    fn new(value: Value, consumed: usize) -> Self {
        Self { value, consumed }
    }

    pub fn into_pair(self) -> (Value, usize) {
        (self.value, self.consumed)
    }
}

pub type ParseResult = std::result::Result<Parsed, ParseError>;

/// Parse the JSON value at the start of `text`.
///
/// Leading whitespace (space, `\n`, `\r`, `\t`, `\x0b`, `\x0c`) is skipped
/// and not counted in [`Parsed::consumed`], so `parse("  42")` consumes 2.
/// Anything after the value is left alone.
pub fn parse(text: &str) -> ParseResult {
    parse_with(text, &ParseOptions::default())
}

pub fn parse_with(text: &str, options: &ParseOptions) -> ParseResult {
    value_at(text, Context::new(options))
}

/// Zero-length form of [`parse`]: failure becomes `(Value::Null, 0)`.
pub fn parse_or_null(text: &str) -> (Value, usize) {
    parse(text)
        .map(Parsed::into_pair)
        .unwrap_or((Value::Null, 0))
}

/// Parse `text` as exactly one value, allowing only whitespace after it.
pub fn parse_complete(text: &str) -> Result<Value> {
    parse_complete_with(text, &ParseOptions::default())
}

pub fn parse_complete_with(text: &str, options: &ParseOptions) -> Result<Value> {
    let parsed = parse_with(text, options)?;
    let end = skip_whitespace(text, 0) + parsed.consumed;
    if skip_whitespace(text, end) != text.len() {
        return Err(JsonError::TrailingCharacters {
            consumed: end,
            len: text.len(),
        });
    }
    Ok(parsed.value)
}

impl std::str::FromStr for Value {
    type Err = JsonError;

    /// Same as [`parse_complete`].
    fn from_str(s: &str) -> Result<Self> {
        parse_complete(s)
    }
}

/// Match `true`, `false` or `null` at the start of `text`.
///
/// Only the prefix is checked: `nullable` yields `Null` with 4 bytes
/// consumed.
pub fn parse_literal(text: &str) -> ParseResult {
    const LITERALS: [(&str, Value); 3] = [
        ("true", Value::Bool(true)),
        ("false", Value::Bool(false)),
        ("null", Value::Null),
    ];

    LITERALS
        .into_iter()
        .find(|(word, _)| text.starts_with(word))
        .map(|(word, value)| Parsed::new(value, word.len()))
        .ok_or(ParseError::ExpectedLiteral)
}

/// Scan a numeric run and parse it as `Int`, falling back to `Float`.
///
/// The run is the longest prefix of digits, `.`, `e`, `E`, `+` and `-`. No
/// grammar is checked while scanning; the run as a whole must then parse as
/// an `i64` or as a finite `f64`. Integers outside the `i64` range therefore
/// come back as `Float`. A float whose magnitude is out of range in either
/// direction fails: `1e999` overflows and `1e-400` underflows to zero.
pub fn parse_number(text: &str) -> ParseResult {
    let len = text.bytes().take_while(|b| is_number_byte(*b)).count();
    if len == 0 {
        return Err(ParseError::ExpectedNumber);
    }
    let run = &text[..len];

    // Neither form takes an explicit sign on the mantissa.
    if run.starts_with('+') {
        return Err(ParseError::InvalidNumber);
    }

    if let Ok(n) = run.parse::<i64>() {
        return Ok(Parsed::new(Value::Int(n), len));
    }
    match run.parse::<f64>() {
        Ok(f) if f.is_finite() && !underflowed(run, f) => {
            Ok(Parsed::new(Value::Float(f), len))
        }
        _ => Err(ParseError::InvalidNumber),
    }
}

/// A nonzero mantissa that rounded to zero.
fn underflowed(run: &str, f: f64) -> bool {
    let mantissa = run.split(['e', 'E']).next().unwrap_or(run);
    f == 0.0 && mantissa.bytes().any(|b| matches!(b, b'1'..=b'9'))
}

fn is_number_byte(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')
}

/// Parse a double-quoted string starting at the first byte of `text`.
///
/// A backslash takes the next character through the escape table. Running
/// out of input before the closing quote, including right after a
/// backslash, is `UnterminatedString`.
pub fn parse_string(text: &str) -> ParseResult {
    let mut chars = text.char_indices();
    if !matches!(chars.next(), Some((_, '"'))) {
        return Err(ParseError::ExpectedString);
    }

    let mut out = String::new();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Ok(Parsed::new(Value::String(out), i + 1)),
            '\\' => match chars.next() {
                Some((_, escaped)) => out.push(unescape(escaped)),
                None => break,
            },
            _ => out.push(c),
        }
    }
    Err(ParseError::UnterminatedString)
}

/// Parse an array starting at the first byte of `text`.
pub fn parse_array(text: &str) -> ParseResult {
    array_at(text, Context::new(&ParseOptions::default()))
}

/// Parse an object starting at the first byte of `text`.
///
/// Duplicate keys keep the last value.
pub fn parse_object(text: &str) -> ParseResult {
    object_at(text, Context::new(&ParseOptions::default()))
}

/// Per-call state threaded through the recursion.
#[derive(Debug, Clone, Copy)]
struct Context {
    options: ParseOptions,
    depth: usize,
}

impl Context {
    fn new(options: &ParseOptions) -> Self {
        Self {
            options: *options,
            depth: 0,
        }
    }

    /// Enter one more level of container nesting.
    fn descend(self) -> std::result::Result<Self, ParseError> {
        let depth = self.depth + 1;
        if let Some(limit) = self.options.max_depth {
            if depth > limit {
                return Err(ParseError::DepthLimitExceeded { limit });
            }
        }
        Ok(Self { depth, ..self })
    }
}

fn value_at(text: &str, cx: Context) -> ParseResult {
    let rest = &text[skip_whitespace(text, 0)..];
    let Some(first) = rest.bytes().next() else {
        return Err(ParseError::EmptyInput);
    };

    if let Ok(parsed) = parse_literal(rest) {
        return Ok(parsed);
    }

    // A scanner that recognised its opening character owns the failure:
    // nothing later in the cascade can start with that character.
    match parse_number(rest) {
        Ok(parsed) => return Ok(parsed),
        Err(ParseError::ExpectedNumber) => {}
        Err(reason) => return Err(reason),
    }
    match parse_string(rest) {
        Ok(parsed) => return Ok(parsed),
        Err(ParseError::ExpectedString) => {}
        Err(reason) => return Err(reason),
    }

    match first {
        b'[' => array_at(rest, cx),
        b'{' => object_at(rest, cx),
        _ => Err(ParseError::UnexpectedChar),
    }
}

fn array_at(text: &str, cx: Context) -> ParseResult {
    if !text.starts_with('[') {
        return Err(ParseError::ExpectedArray);
    }
    let cx = cx.descend()?;
    tracing::trace!(depth = cx.depth, "parsing array");

    let mut items = List::new();
    let mut i = 1;
    loop {
        i = skip_whitespace(text, i);
        match text.as_bytes().get(i) {
            None => return Err(abort("array", i, ParseError::UnterminatedArray)),
            Some(b']') => return Ok(Parsed::new(Value::List(items), i + 1)),
            Some(_) => {}
        }

        let element = value_at(&text[i..], cx).map_err(|reason| abort("array", i, reason))?;
        items.push(element.value);
        i = skip_whitespace(text, i + element.consumed);
        if text.as_bytes().get(i) == Some(&b',') {
            i += 1;
        }
    }
}

fn object_at(text: &str, cx: Context) -> ParseResult {
    if !text.starts_with('{') {
        return Err(ParseError::ExpectedObject);
    }
    let cx = cx.descend()?;
    tracing::trace!(depth = cx.depth, "parsing object");

    let mut dict = Dict::new();
    let mut i = 1;
    loop {
        i = skip_whitespace(text, i);
        match text.as_bytes().get(i) {
            None => return Err(abort("object", i, ParseError::UnterminatedObject)),
            Some(b'}') => return Ok(Parsed::new(Value::Dict(dict), i + 1)),
            Some(_) => {}
        }

        let key = parse_string(&text[i..])
            .map_err(|_| abort("object", i, ParseError::InvalidKey))?;
        let Value::String(name) = key.value else {
            return Err(abort("object", i, ParseError::InvalidKey));
        };
        i = skip_whitespace(text, i + key.consumed);

        if text.as_bytes().get(i) != Some(&b':') {
            return Err(abort("object", i, ParseError::ExpectedColon));
        }
        i = skip_whitespace(text, i + 1);

        let value = value_at(&text[i..], cx).map_err(|reason| abort("object", i, reason))?;
        dict.insert(name, value.value);
        i = skip_whitespace(text, i + value.consumed);
        if text.as_bytes().get(i) == Some(&b',') {
            i += 1;
        }
    }
}

/// Log where a container gave up and pass the reason through unchanged.
fn abort(container: &'static str, offset: usize, reason: ParseError) -> ParseError {
    tracing::debug!(container, offset, %reason, "container parse failed");
    reason
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\n' | b'\r' | b'\t' | b'\x0b' | b'\x0c')
}

/// Byte offset of the first non-whitespace byte at or after `from`.
fn skip_whitespace(text: &str, from: usize) -> usize {
    let bytes = text.as_bytes();
    let mut i = from;
    while i < bytes.len() && is_whitespace(bytes[i]) {
        i += 1;
    }
    i
}
