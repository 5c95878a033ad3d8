// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning fragment text into string-literal bodies.
//!
//! Escaping is total and lossless: every code point maps to something the target
//! compiler accepts inside one quoted literal, and `unescape` maps it back. JVM
//! literals are UTF-16, so anything above U+FFFF comes out as two `\uXXXX` escapes.
//! Fragments never end in the middle of a code point, so a pair always stays
//! together in one literal.

use crate::error::UnescapeError;

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Renders text as the body of a quoted literal for one target language.
pub trait Escaper: Send + Sync {
    /// Delimiter of the literal this escaper produces.
    fn quote(&self) -> char {
        '"'
    }

    /// Append the escaped form of `text` to `out`.
    fn escape_into(&self, text: &str, out: &mut String);

    fn escape(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 8);
        self.escape_into(text, &mut out);
        out
    }

    /// Decode a literal body produced by `escape`.
    fn unescape(&self, literal: &str) -> Result<String, UnescapeError> {
        unescape_jvm(literal)
    }
}

// =============================================================================
// JAVA
// =============================================================================

/// Java string literals.
///
/// Printable ASCII passes through; everything else becomes a named escape or
/// `\uXXXX`, so the generated file is pure ASCII regardless of the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaEscaper;

impl Escaper for JavaEscaper {
    fn escape_into(&self, text: &str, out: &mut String) {
        for c in text.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\u{8}' => out.push_str("\\b"),
                '\t' => out.push_str("\\t"),
                // Line terminators must never be written as \u000A / \u000D:
                // javac translates unicode escapes before it tokenizes.
                '\n' => out.push_str("\\n"),
                '\u{c}' => out.push_str("\\f"),
                '\r' => out.push_str("\\r"),
                ' '..='~' => out.push(c),
                _ => push_utf16_escapes(c, out),
            }
        }
    }
}

// =============================================================================
// KOTLIN
// =============================================================================

/// Kotlin string literals.
///
/// Same as Java plus `$`, which would otherwise open a string template. Kotlin
/// has no `\f`, so form feed goes out as `\u000C`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinEscaper;

impl Escaper for KotlinEscaper {
    fn escape_into(&self, text: &str, out: &mut String) {
        for c in text.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '$' => out.push_str("\\$"),
                '\u{8}' => out.push_str("\\b"),
                '\t' => out.push_str("\\t"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                ' '..='~' => out.push(c),
                _ => push_utf16_escapes(c, out),
            }
        }
    }
}

/// Write `c` as one `\uXXXX` per UTF-16 unit.
fn push_utf16_escapes(c: char, out: &mut String) {
    let mut units = [0u16; 2];
    for unit in c.encode_utf16(&mut units) {
        out.push_str("\\u");
        for shift in [12, 8, 4, 0] {
            out.push(HEX[usize::from((*unit >> shift) & 0xF)] as char);
        }
    }
}

// =============================================================================
// UNESCAPE
// =============================================================================

/// Decode a JVM literal body (Java or Kotlin flavour).
///
/// Recombines surrogate pairs written as consecutive `\u` escapes. Anything the
/// escapers above never produce is rejected rather than guessed at.
pub fn unescape_jvm(literal: &str) -> Result<String, UnescapeError> {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.chars();
    let mut high: Option<u16> = None;

    while let Some(c) = chars.next() {
        if c != '\\' {
            if let Some(unit) = high {
                return Err(UnescapeError::LoneSurrogate(unit));
            }
            out.push(c);
            continue;
        }

        let escape = chars.next().ok_or(UnescapeError::DanglingBackslash)?;
        let decoded = match escape {
            'b' => '\u{8}',
            't' => '\t',
            'n' => '\n',
            'f' => '\u{c}',
            'r' => '\r',
            '"' => '"',
            '\'' => '\'',
            '\\' => '\\',
            '$' => '$',
            'u' => {
                let unit = read_hex_unit(&mut chars)?;
                match unit {
                    0xD800..=0xDBFF => {
                        if let Some(previous) = high {
                            return Err(UnescapeError::LoneSurrogate(previous));
                        }
                        high = Some(unit);
                        continue;
                    }
                    0xDC00..=0xDFFF => {
                        let lead = high.take().ok_or(UnescapeError::LoneSurrogate(unit))?;
                        let code_point = 0x10000
                            + ((u32::from(lead) - 0xD800) << 10)
                            + (u32::from(unit) - 0xDC00);
                        char::from_u32(code_point).ok_or(UnescapeError::LoneSurrogate(unit))?
                    }
                    _ => char::from_u32(u32::from(unit))
                        .ok_or(UnescapeError::LoneSurrogate(unit))?,
                }
            }
            other => return Err(UnescapeError::UnknownEscape(other)),
        };

        if let Some(unit) = high {
            return Err(UnescapeError::LoneSurrogate(unit));
        }
        out.push(decoded);
    }

    match high {
        Some(unit) => Err(UnescapeError::LoneSurrogate(unit)),
        None => Ok(out),
    }
}

fn read_hex_unit(chars: &mut std::str::Chars<'_>) -> Result<u16, UnescapeError> {
    let digits: String = chars.by_ref().take(4).collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(UnescapeError::BadUnicodeEscape(digits));
    }
    u16::from_str_radix(&digits, 16).map_err(|_| UnescapeError::BadUnicodeEscape(digits))
}
