//! Parameter-block decomposition.
//!
//! A parameter block is the tail of a media type starting at its first `;`:
//!
//! ```text
//! ; charset=UTF-8; boundary="a;b"
//! ```
//!
//! The block is split on `;` outside quoted values, each segment is split
//! at its first `=`, and the pairs are folded into a [`Parameters`] map where
//! a repeated key keeps its last value.
//!
//! # Example
//!
//! ```rust
//! use media_type::decompose_parameters;
//!
//! let params = decompose_parameters(Some("; charset=UTF-8; charset=ASCII"))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(params.get("charset").map(String::as_str), Some("ASCII"));
//!
//! assert_eq!(decompose_parameters(None).unwrap(), None);
//! assert!(decompose_parameters(Some(";")).is_err());
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;

use log::trace;

use crate::error::ParameterError;

/// Parameter map. Keys are case-sensitive as captured.
pub type Parameters = BTreeMap<String, String>;

/// Decompose a raw parameter block into a key/value map.
///
/// Returns `Ok(None)` for an absent or empty block. A block consisting of
/// separators only, such as a trailing `;`, is an error.
pub fn decompose_parameters(block: Option<&str>) -> Result<Option<Parameters>, ParameterError> {
    let block = match block {
        Some(b) if !b.is_empty() => b,
        _ => return Ok(None),
    };
    trace!("Decomposing parameter block '{block}'");

    let rest = block
        .trim_start_matches([' ', '\t'])
        .strip_prefix(';')
        .ok_or_else(|| ParameterError::MissingSemicolon {
            block: block.to_string(),
        })?;

    let segments = split_segments(rest)?;
    if segments.iter().all(|s| s.trim().is_empty()) {
        return Err(ParameterError::EmptyBlock);
    }

    let mut parameters = Parameters::new();
    for (index, segment) in segments.into_iter().enumerate() {
        let segment = segment.trim_matches([' ', '\t']);
        if segment.is_empty() {
            return Err(ParameterError::EmptySegment { index });
        }
        let (key, value) = split_pair(segment)?;
        parameters.insert(key.to_string(), value);
    }
    Ok(Some(parameters))
}

/// Split on `;` outside quoted values. Fails on an unterminated quote.
fn split_segments(rest: &str) -> Result<Vec<&str>, ParameterError> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;

    for (i, c) in rest.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                segments.push(&rest[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    let last = &rest[start..];
    if in_quotes {
        return Err(ParameterError::UnterminatedQuote {
            segment: last.trim_matches([' ', '\t']).to_string(),
        });
    }
    segments.push(last);
    Ok(segments)
}

/// Split a trimmed segment at its first `=` and unquote the value.
fn split_pair(segment: &str) -> Result<(&str, String), ParameterError> {
    let (key, value) = segment
        .split_once('=')
        .ok_or_else(|| ParameterError::MissingEquals {
            segment: segment.to_string(),
        })?;
    let key = key.trim_end_matches([' ', '\t']);
    if key.is_empty() {
        return Err(ParameterError::EmptyKey {
            segment: segment.to_string(),
        });
    }
    let value = value.trim_start_matches([' ', '\t']);
    Ok((key, unquote(value)))
}

/// Strip surrounding quotes and resolve backslash escapes.
///
/// Values that are not quoted are returned unchanged.
fn unquote(value: &str) -> String {
    let Some(inner) = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
    else {
        return value.to_string();
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Returns `true` if `c` may appear in an RFC 2045 token.
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_graphic() && !"()<>@,;:\\\"/[]?=".contains(c)
}

/// Returns `true` if `s` is a non-empty RFC 2045 token.
pub fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_token_char)
}

/// Format a parameter value for output.
///
/// Tokens are emitted bare; anything else becomes a quoted-string with `"`
/// and `\` escaped.
pub fn format_parameter_value(value: &str) -> Cow<'_, str> {
    if is_token(value) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    Cow::Owned(out)
}
