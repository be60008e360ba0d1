//! Token escaping
//!
//! A rendered value is written verbatim unless it would read back as
//! something else. Otherwise backslash is doubled, the delimiter and any
//! edge whitespace become `\u{..}`, a value spelled like the marker has
//! its first character escaped, and the empty value is `\e`.

use std::borrow::Cow;

/// Escaped form of the empty value
const EMPTY: &str = "\\e";

pub(super) fn escape<'v>(text: &'v str, delimiter: char, marker: &str) -> Cow<'v, str> {
    if text.is_empty() {
        return Cow::Borrowed(EMPTY);
    }

    let is_marker = text == marker;
    let ambiguous = is_marker
        || text.contains('\\')
        || text.contains(delimiter)
        || text.starts_with(char::is_whitespace)
        || text.ends_with(char::is_whitespace);
    if !ambiguous {
        return Cow::Borrowed(text);
    }

    let last = text.chars().count() - 1;
    let mut out = String::with_capacity(text.len() + 8);
    for (idx, c) in text.chars().enumerate() {
        let edge = idx == 0 || idx == last;
        if c == '\\' {
            out.push_str("\\\\");
        } else if c == delimiter || (edge && c.is_whitespace()) || (idx == 0 && is_marker) {
            out.extend(c.escape_unicode());
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Undo `escape`; `None` for a malformed escape sequence
pub(super) fn unescape(token: &str) -> Option<Cow<'_, str>> {
    if !token.contains('\\') {
        return Some(Cow::Borrowed(token));
    }
    if token == EMPTY {
        return Some(Cow::Borrowed(""));
    }

    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            '\\' => out.push('\\'),
            'u' => {
                if chars.next()? != '{' {
                    return None;
                }
                let mut hex = String::new();
                loop {
                    match chars.next()? {
                        '}' => break,
                        h => hex.push(h),
                    }
                }
                let code = u32::from_str_radix(&hex, 16).ok()?;
                out.push(char::from_u32(code)?);
            }
            _ => return None,
        }
    }
    Some(Cow::Owned(out))
}
