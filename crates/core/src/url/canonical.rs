//! Canonical serialization of a resolved URL.
//!
//! The canonical string is the crawler's identity for a resource: the storage key,
//! the subject of crawl-policy regexes and the queue deduplication key.

use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC, percent_decode_str, percent_encode, utf8_percent_encode};

use super::ParsedUrl;
use super::authority::Authority;

/// Bytes never valid inside a path, plus `;` and `=` which would read as params syntax.
const PATH: &AsciiSet = &PARAMS.add(b';').add(b'=');

/// Bytes never valid inside a path segment or userinfo. Existing `%XX` escapes pass through.
const PARAMS: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Form-style query keys and values: everything but ASCII alphanumerics and `-._~`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Serialize `url` into its canonical string.
///
/// An authority with an empty path always gets a `/` path, so `http://a` and
/// `http://a/` canonicalize identically. With `quote`, the host is lowercased
/// and IDNA-encoded, literal `;`/`=` inside path segments become `%3B`/`%3D`,
/// characters illegal in a path are escaped and the query is re-encoded field
/// by field. The fragment is always copied verbatim.
pub fn canonicalize(url: &ParsedUrl, quote: bool) -> String {
    let mut out = String::with_capacity(
        url.scheme.len() + url.authority.len() + url.path.len() + url.params.len() + url.query.len() + url.fragment.len() + 8,
    );

    if !url.scheme.is_empty() {
        out.push_str(&url.scheme);
        out.push(':');
    }

    if !url.authority.is_empty() {
        out.push_str("//");
        if quote {
            out.push_str(&quote_authority(&url.authority));
        } else {
            out.push_str(&url.authority);
        }
    }

    if url.path.is_empty() && !url.authority.is_empty() {
        out.push('/');
    } else if quote {
        out.extend(utf8_percent_encode(&url.path, PATH));
    } else {
        out.push_str(&url.path);
    }

    if !url.params.is_empty() {
        out.push(';');
        if quote {
            out.extend(utf8_percent_encode(&url.params, PARAMS));
        } else {
            out.push_str(&url.params);
        }
    }

    if !url.query.is_empty() {
        out.push('?');
        if quote {
            out.push_str(&quote_query(&url.query));
        } else {
            out.push_str(&url.query);
        }
    }

    if !url.fragment.is_empty() {
        out.push('#');
        out.push_str(&url.fragment);
    }

    out
}

/// Lowercase the host and convert internationalized names to their `xn--` form.
/// Userinfo gets the params escaping, the port is left alone.
fn quote_authority(authority: &str) -> String {
    let parts = Authority::split(authority);

    let host = if parts.host.is_ascii() {
        parts.host.to_ascii_lowercase()
    } else {
        match idna::domain_to_ascii(parts.host) {
            Ok(ascii) => ascii,
            Err(err) => {
                tracing::debug!(host = parts.host, error = ?err, "host kept as-is, IDNA conversion failed");
                parts.host.to_lowercase()
            }
        }
    };

    let userinfo = parts.userinfo.map(|userinfo| utf8_percent_encode(userinfo, PARAMS).to_string());

    Authority { userinfo: userinfo.as_deref(), host: &host, port: parts.port }.to_string()
}

/// Re-encode each `&`-separated field, keeping the `=` only where one was present.
fn quote_query(query: &str) -> String {
    query
        .split('&')
        .map(|field| match field.split_once('=') {
            Some((key, value)) => format!("{}={}", quote_plus(key), quote_plus(value)),
            None => quote_plus(field),
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a form-encoded component and encode it again, spaces as `+`.
fn quote_plus(component: &str) -> String {
    let spaced = component.replace('+', " ");
    let bytes: Vec<u8> = percent_decode_str(&spaced).collect();
    percent_encode(&bytes, QUERY_COMPONENT).to_string().replace("%20", "+")
}
