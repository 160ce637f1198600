/// Property-based tests for the parser and encoder.
///
/// Uses `proptest` to generate random value trees and check that
/// `parse(encode(value)) == value`, plus a few invariants that must hold for
/// arbitrary input text:
///
/// - parsing never panics, and a successful parse consumes a nonzero,
///   in-bounds, char-aligned prefix of the text after leading whitespace;
/// - leading whitespace is skipped and left out of `consumed`;
/// - the zero-length compatibility form agrees with the `Result` form.
///
/// Generated floats are finite: NaN and infinities have no JSON text.
use proptest::prelude::*;
use spanjson_core::{encode, parse, parse_complete, parse_or_null, Value};

// ============================================================================
// Strategies
// ============================================================================

fn arb_float() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<f64>().prop_filter("finite", |f| f.is_finite()),
        (-1_000_000i64..1_000_000i64, 0u32..5u32)
            .prop_map(|(mantissa, decimals)| mantissa as f64 / 10f64.powi(decimals as i32)),
        Just(0.0),
        Just(-0.0),
        Just(1.0),
    ]
}

fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,20}",
        any::<String>(),
        Just(String::new()),
        Just("line1\nline2".to_string()),
        Just("say \"hi\"".to_string()),
        Just("path\\to\\file".to_string()),
        Just("\0\x07\x08\x0b\x0c".to_string()),
        Just("true".to_string()),
        Just("42".to_string()),
    ]
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        arb_float().prop_map(Value::Float),
        arb_string().prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::List),
            prop::collection::hash_map(arb_string(), inner, 0..6).prop_map(Value::Dict),
        ]
    })
}

fn arb_whitespace() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(' '),
            Just('\n'),
            Just('\r'),
            Just('\t'),
            Just('\x0b'),
            Just('\x0c'),
        ],
        0..8,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn encode_then_parse_is_identity(value in arb_value()) {
        let text = encode(&value).unwrap();
        let parsed = parse(&text).unwrap();
        prop_assert_eq!(parsed.consumed, text.len());
        prop_assert_eq!(parsed.value, value);
    }

    #[test]
    fn integers_parse_as_int(n in any::<i64>()) {
        let parsed = parse(&n.to_string()).unwrap();
        prop_assert_eq!(parsed.value, Value::Int(n));
    }

    #[test]
    fn fractional_numbers_parse_as_float(f in arb_float()) {
        let text = format!("{f:?}");
        let parsed = parse(&text).unwrap();
        prop_assert_eq!(parsed.value, Value::Float(f));
        prop_assert_eq!(parsed.consumed, text.len());
    }

    #[test]
    fn leading_whitespace_not_counted(value in arb_value(), ws in arb_whitespace()) {
        let text = encode(&value).unwrap();
        let padded = format!("{ws}{text}");
        let parsed = parse(&padded).unwrap();
        prop_assert_eq!(parsed.consumed, text.len());
        prop_assert_eq!(parsed.value, value);
    }

    #[test]
    fn trailing_text_is_not_consumed(value in arb_value(), tail in "[ ,\\]}x]{0,5}") {
        let text = encode(&value).unwrap();
        let parsed = parse(&format!("{text}{tail}")).unwrap();
        // A bare number would keep scanning into the tail, but the tail
        // holds no numeric characters.
        prop_assert_eq!(parsed.consumed, text.len());
    }

    #[test]
    fn arbitrary_text_never_panics(text in any::<String>()) {
        if let Ok(parsed) = parse(&text) {
            let rest = text.trim_start_matches([' ', '\n', '\r', '\t', '\x0b', '\x0c']);
            prop_assert!(parsed.consumed > 0);
            prop_assert!(parsed.consumed <= rest.len());
            prop_assert!(rest.is_char_boundary(parsed.consumed));
        }
    }

    #[test]
    fn json_shaped_text_never_panics(text in "[\\[\\]{}\",:0-9.eE+\\- \\\\a-z]{0,40}") {
        let _ = parse(&text);
        let _ = parse_complete(&text);
    }

    #[test]
    fn compat_form_agrees(text in "[\\[\\]{}\",:0-9 truefalsn]{0,24}") {
        match parse(&text) {
            Ok(parsed) => prop_assert_eq!(parse_or_null(&text), parsed.into_pair()),
            Err(_) => prop_assert_eq!(parse_or_null(&text), (Value::Null, 0)),
        }
    }
}
