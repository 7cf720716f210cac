//! Tolerant tokenizer splitting a raw link into its components.
//!
//! Crawled hrefs are untrusted text, so every input yields a [`ParsedUrl`].

use super::ParsedUrl;

/// Split a raw link into scheme, authority, path, params, query and fragment.
///
/// Never fails. Inputs that are not valid URLs still tokenize into a best-effort
/// relative reference that the resolver can work with.
pub fn parse(raw: &str) -> ParsedUrl {
    let cleaned = clean(raw);

    let (rest, fragment) = cleaned.split_once('#').unwrap_or((cleaned.as_str(), ""));
    let (rest, query) = rest.split_once('?').unwrap_or((rest, ""));
    let (scheme, rest) = split_scheme(rest);
    let (authority, path) = split_authority(rest);
    let (path, params) = split_params(path);

    ParsedUrl {
        scheme,
        authority: authority.to_string(),
        path: path.to_string(),
        params: params.to_string(),
        query: query.to_string(),
        fragment: fragment.to_string(),
    }
}

/// Whether `candidate` is a syntactically valid scheme: `[a-zA-Z][a-zA-Z0-9+.-]*`.
pub(crate) fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Trim surrounding whitespace and C0 controls, drop embedded tabs and newlines.
fn clean(raw: &str) -> String {
    raw.trim_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect()
}

fn split_scheme(input: &str) -> (String, &str) {
    let Some((candidate, rest)) = input.split_once(':') else {
        return (String::new(), input);
    };

    if candidate.is_empty() && rest.starts_with("//") {
        // `://host/`: scheme-relative link with a stray colon
        return (String::new(), rest);
    }

    if is_scheme(candidate) { (candidate.to_ascii_lowercase(), rest) } else { (String::new(), input) }
}

/// Any run of two or more slashes opens the authority.
fn split_authority(input: &str) -> (&str, &str) {
    let Some(stripped) = input.strip_prefix("//") else {
        return ("", input);
    };

    let stripped = stripped.trim_start_matches('/');
    match stripped.find('/') {
        Some(idx) => stripped.split_at(idx),
        None => (stripped, ""),
    }
}

/// Params live in the last segment only: `a;x/b;y` has path `a;x/b` and params `y`.
fn split_params(path: &str) -> (&str, &str) {
    let segment_start = path.rfind('/').map_or(0, |idx| idx + 1);

    match path[segment_start..].find(';') {
        Some(idx) => {
            let split = segment_start + idx;
            (&path[..split], &path[split + 1..])
        }
        None => (path, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absolute() {
        let url = parse("http://a/b/c/d;p?q#f");
        assert_eq!(url.scheme, "http");
        assert_eq!(url.authority, "a");
        assert_eq!(url.path, "/b/c/d");
        assert_eq!(url.params, "p");
        assert_eq!(url.query, "q");
        assert_eq!(url.fragment, "f");
    }

    #[test]
    fn test_parse_no_scheme() {
        let url = parse("://127.0.0.1/");
        assert_eq!(url.scheme, "");
        assert_eq!(url.authority, "127.0.0.1");
        assert_eq!(url.path, "/");

        let url = parse("//127.0.0.1/");
        assert_eq!(url.scheme, "");
        assert_eq!(url.authority, "127.0.0.1");
        assert_eq!(url.path, "/");
    }

    #[test]
    fn test_parse_extra_slashes() {
        for raw in ["///host/", "////host/"] {
            let url = parse(raw);
            assert_eq!(url.authority, "host", "raw: {raw}");
            assert_eq!(url.path, "/", "raw: {raw}");
        }
    }

    #[test]
    fn test_parse_no_slash_keeps_path() {
        let url = parse("http:netloc");
        assert_eq!(url.scheme, "http");
        assert_eq!(url.authority, "");
        assert_eq!(url.path, "netloc");
    }

    #[test]
    fn test_parse_params() {
        let url = parse("a;p");
        assert_eq!(url.scheme, "");
        assert_eq!(url.authority, "");
        assert_eq!(url.path, "a");
        assert_eq!(url.params, "p");

        let url = parse(";p");
        assert_eq!(url.path, "");
        assert_eq!(url.params, "p");
    }

    #[test]
    fn test_parse_params_only_in_last_segment() {
        let url = parse("g;x=1/./y");
        assert_eq!(url.path, "g;x=1/./y");
        assert_eq!(url.params, "");
    }

    #[test]
    fn test_parse_authority_without_path() {
        let url = parse("http://a");
        assert_eq!(url.authority, "a");
        assert_eq!(url.path, "");

        let url = parse("http://a?x=1");
        assert_eq!(url.authority, "a");
        assert_eq!(url.path, "");
        assert_eq!(url.query, "x=1");
    }

    #[test]
    fn test_parse_scheme_lowercased() {
        let url = parse("HTTPS://Example.com/");
        assert_eq!(url.scheme, "https");
        assert_eq!(url.authority, "Example.com");
    }

    #[test]
    fn test_parse_invalid_scheme_is_path() {
        let url = parse(":not-a-url");
        assert_eq!(url.scheme, "");
        assert_eq!(url.path, ":not-a-url");

        let url = parse("1abc:def");
        assert_eq!(url.scheme, "");
        assert_eq!(url.path, "1abc:def");

        let url = parse("a b:c");
        assert_eq!(url.scheme, "");
    }

    #[test]
    fn test_parse_colon_in_query_is_not_scheme() {
        let url = parse("page?next=http://x/");
        assert_eq!(url.scheme, "");
        assert_eq!(url.path, "page");
        assert_eq!(url.query, "next=http://x/");
    }

    #[test]
    fn test_parse_query_and_fragment_opaque() {
        let url = parse("g?y/./x#s/../x");
        assert_eq!(url.path, "g");
        assert_eq!(url.query, "y/./x");
        assert_eq!(url.fragment, "s/../x");
    }

    #[test]
    fn test_parse_fragment_may_contain_question_mark() {
        let url = parse("g#a?b");
        assert_eq!(url.query, "");
        assert_eq!(url.fragment, "a?b");
    }

    #[test]
    fn test_parse_trims_and_strips_newlines() {
        let url = parse("  \n http://a/b\n/c\t \r\n");
        assert_eq!(url.authority, "a");
        assert_eq!(url.path, "/b/c");
    }

    #[test]
    fn test_parse_opaque_scheme() {
        let url = parse("mailto:someone@example.com");
        assert_eq!(url.scheme, "mailto");
        assert_eq!(url.authority, "");
        assert_eq!(url.path, "someone@example.com");

        let url = parse("javascript:void(0)");
        assert_eq!(url.scheme, "javascript");
        assert_eq!(url.path, "void(0)");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse(""), ParsedUrl::default());
        assert_eq!(parse("   "), ParsedUrl::default());
    }

    #[test]
    fn test_is_scheme() {
        assert!(is_scheme("http"));
        assert!(is_scheme("svn+ssh"));
        assert!(is_scheme("a.b-c"));
        assert!(!is_scheme(""));
        assert!(!is_scheme("1http"));
        assert!(!is_scheme("ht tp"));
    }
}
