//! Dot-segment removal for URL paths.

/// Remove `.` and `..` segments from `path`.
///
/// `..` above the root is absorbed rather than escaping it, so `/b/c/../../../g`
/// becomes `/g`. A trailing dot-segment leaves a trailing slash behind. Leading
/// slash presence and empty segments are preserved, except that a relative path
/// drops the empty segments a removed dot-segment would leave at its start
/// (`a/..//x` is `x`). The result never contains a dot-segment, which makes the
/// function idempotent.
pub fn normalize_path(path: &str) -> String {
    let (root, relative) = match path.strip_prefix('/') {
        Some(rest) => ("/", rest),
        None => ("", path),
    };

    let mut kept: Vec<&str> = Vec::new();
    let mut segments = relative.split('/').peekable();

    while let Some(segment) = segments.next() {
        let last = segments.peek().is_none();

        match segment {
            "." => {}
            ".." => {
                kept.pop();
            }
            // a relative path must not gain a leading slash once dot-segments are gone
            "" if root.is_empty() && kept.is_empty() => continue,
            _ => {
                kept.push(segment);
                continue;
            }
        }

        if last {
            kept.push("");
        }
    }

    format!("{root}{}", kept.join("/"))
}
