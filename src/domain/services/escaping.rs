//! Escaping for single-quoted string literals
//!
//! Inline markup and styles are embedded as `'...'` in the generated module.
//! The input is treated as literal body text in which backslash sequences are
//! already meaningful: only what would break the literal gets escaped.
//!
//! Rules, applied left to right:
//!
//! - `\` plus a character that forms a strict-mode escape is copied as is,
//!   so `\'`, `\\`, `\n`, `\x41` and `\u{1F600}` are never escaped twice.
//! - A `\` that does not start a strict-mode escape is a literal backslash and
//!   is emitted as `\\`. This covers legacy octal escapes (`\1`..`\9`, `\0`
//!   before a digit) and malformed `\x` / `\u` escapes, so a CSS escape such as
//!   `\201C` reaches the page unchanged.
//! - `\0` is written as `\x00`; no following digit can turn it into an octal
//!   escape.
//! - An unescaped `'` becomes `\'`.
//! - A raw `\n` or `\r` becomes the `\n` / `\r` escape sequence.
//! - A trailing lone `\` would swallow the closing quote; it is treated as a
//!   literal backslash and emitted as `\\`.
//! - A line continuation (`\` before a line terminator) is dropped; it adds
//!   nothing to the string value.
//!
//! Generated modules are always strict, so the output parses in strict mode.
//! It never spans more than one line, and the function is idempotent.

/// Escape `text` for embedding between two single quotes
pub fn escape_single_quotes(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let rest = chars.as_str();
                match rest.chars().next() {
                    // line continuation: contributes nothing to the value
                    Some('\n') => {
                        chars.next();
                    }
                    Some('\r') => {
                        chars.next();
                        if chars.as_str().starts_with('\n') {
                            chars.next();
                        }
                    }
                    Some('0') if starts_strict_escape(rest) => {
                        chars.next();
                        out.push_str("\\x00");
                    }
                    Some(escaped) if starts_strict_escape(rest) => {
                        chars.next();
                        out.push('\\');
                        out.push(escaped);
                    }
                    _ => out.push_str("\\\\"),
                }
            }
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }

    out
}

/// Whether `\` followed by `rest` is an escape sequence a strict-mode parser
/// accepts
fn starts_strict_escape(rest: &str) -> bool {
    let Some(first) = rest.chars().next() else {
        return false;
    };
    let after = &rest[first.len_utf8()..];

    match first {
        '0' => !after.starts_with(|c: char| c.is_ascii_digit()),
        '1'..='9' => false,
        'x' => has_hex_digits(after, 2),
        'u' => has_hex_digits(after, 4) || is_code_point_escape(after),
        _ => true,
    }
}

fn has_hex_digits(text: &str, count: usize) -> bool {
    text.len() >= count && text.as_bytes()[..count].iter().all(u8::is_ascii_hexdigit)
}

/// `{` hex digits `}` naming a code point up to U+10FFFF
fn is_code_point_escape(text: &str) -> bool {
    let Some(body) = text.strip_prefix('{') else {
        return false;
    };
    let Some(end) = body.find('}') else {
        return false;
    };
    let digits = &body[..end];

    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_hexdigit())
        && u32::from_str_radix(digits, 16).is_ok_and(|value| value <= 0x10FFFF)
}
