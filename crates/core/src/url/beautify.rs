//! Human-readable rendering of canonical URLs.
//!
//! Output is for display only and must never be stored or compared as a key:
//! parsing it back is not guaranteed to give the canonical form.

use std::borrow::Cow;

use percent_encoding::{percent_decode, percent_encode_byte};

use super::authority::Authority;
use super::{ParsedUrl, canonicalize, parse};

/// Decode percent-encoded UTF-8 in the path and punycode labels in the host.
///
/// Undecodable pieces (invalid UTF-8 byte runs, broken `xn--` labels) are left
/// as they were; the rest of the URL is still beautified.
pub fn beautify(url: &str) -> String {
    let parsed = parse(url);

    let display = ParsedUrl {
        authority: beautify_authority(&parsed.authority),
        path: decode_display(&parsed.path).into_owned(),
        params: decode_display(&parsed.params).into_owned(),
        ..parsed
    };

    canonicalize(&display, false)
}

fn beautify_authority(authority: &str) -> String {
    if authority.is_empty() {
        return String::new();
    }

    let parts = Authority::split(authority);
    let host = parts.host.split('.').map(decode_label).collect::<Vec<_>>().join(".");
    parts.with_host(&host).to_string()
}

fn decode_label(label: &str) -> Cow<'_, str> {
    let encoded = match label.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("xn--") => &label[4..],
        _ => return Cow::Borrowed(label),
    };

    match idna::punycode::decode_to_string(encoded) {
        // an empty label would erase the host
        Some(decoded) if !decoded.is_empty() => Cow::Owned(decoded),
        _ => {
            tracing::debug!(label, "punycode label kept as-is");
            Cow::Borrowed(label)
        }
    }
}

/// Decode each run of `%XX` escapes that forms valid UTF-8.
fn decode_display(component: &str) -> Cow<'_, str> {
    if !component.contains('%') {
        return Cow::Borrowed(component);
    }

    let bytes = component.as_bytes();
    let mut out = String::with_capacity(component.len());
    let mut idx = 0;

    while idx < bytes.len() {
        let run_end = escape_run_end(bytes, idx);
        if run_end == idx {
            let next = component[idx..].chars().next().map_or(1, char::len_utf8);
            out.push_str(&component[idx..idx + next]);
            idx += next;
            continue;
        }

        let decoded: Vec<u8> = percent_decode(&bytes[idx..run_end]).collect();
        for chunk in decoded.utf8_chunks() {
            for c in chunk.valid().chars() {
                push_display_char(&mut out, c);
            }
            for &byte in chunk.invalid() {
                out.push_str(percent_encode_byte(byte));
            }
        }
        idx = run_end;
    }

    Cow::Owned(out)
}

/// End of the run of consecutive `%XX` escapes starting at `start`.
fn escape_run_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end + 2 < bytes.len()
        && bytes[end] == b'%'
        && bytes[end + 1].is_ascii_hexdigit()
        && bytes[end + 2].is_ascii_hexdigit()
    {
        end += 3;
    }
    end
}

/// Decoded characters that would alter the URL's structure or hide whitespace stay escaped.
fn push_display_char(out: &mut String, c: char) {
    let keep_escaped = c.is_control()
        || c.is_whitespace()
        || matches!(c, '%' | '/' | '?' | '#' | ';' | '=' | '&' | '+');

    if keep_escaped {
        let mut buf = [0u8; 4];
        for &byte in c.encode_utf8(&mut buf).as_bytes() {
            out.push_str(percent_encode_byte(byte));
        }
    } else {
        out.push(c);
    }
}
