//! Backslash escapes inside string literals.
//!
//! The table is single-character only. There is no `\uXXXX` form: `\u0041`
//! reads as the five characters `u0041`. `\"` and `\/` are not listed either
//! and come out right only because unknown escapes pass through unchanged.

/// Map the character after a backslash to the character it stands for.
///
/// Unrecognized characters are returned as-is (the backslash is dropped).
pub fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        'r' => '\r',
        '0' => '\0',
        't' => '\t',
        'v' => '\x0b',
        'f' => '\x0c',
        'b' => '\x08',
        'a' => '\x07',
        '\\' => '\\',
        other => other,
    }
}

/// The escape letter to write after a backslash for `c`, if `c` needs one.
///
/// Inverse of [`unescape`] for every character the encoder escapes.
pub fn escape(c: char) -> Option<char> {
    let letter = match c {
        '"' => '"',
        '\\' => '\\',
        '\n' => 'n',
        '\r' => 'r',
        '\0' => '0',
        '\t' => 't',
        '\x0b' => 'v',
        '\x0c' => 'f',
        '\x08' => 'b',
        '\x07' => 'a',
        _ => return None,
    };
    Some(letter)
}
