//! URL path placeholder substitution

/// Fill the `{key}` (escaped) or `{key+}` (greedy, slashes preserved)
/// placeholder in a URL path with `value`.
///
/// `url::Url` percent-encodes braces when a template is parsed, so both the
/// raw and the `%7B…%7D` spellings of a placeholder are recognized. Returns
/// `None` when the path has no placeholder for `key`.
pub(crate) fn fill_placeholder(path: &str, key: &str, value: &str) -> Option<String> {
    let greedy = escape_greedy(value);
    let escaped = urlencoding::encode(value);

    let candidates = [
        (format!("{{{key}+}}"), greedy.as_str()),
        (format!("%7B{key}+%7D"), greedy.as_str()),
        (format!("{{{key}}}"), escaped.as_ref()),
        (format!("%7B{key}%7D"), escaped.as_ref()),
    ];

    for (pattern, replacement) in &candidates {
        if path.contains(pattern.as_str()) {
            return Some(path.replacen(pattern.as_str(), replacement, 1));
        }
    }

    None
}

/// Escape a greedy path value segment-by-segment, keeping `/` separators.
fn escape_greedy(value: &str) -> String {
    value
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_raw_placeholder() {
        let filled = fill_placeholder("/users/{id}", "id", "42");
        assert_eq!(filled.as_deref(), Some("/users/42"));
    }

    #[test]
    fn fills_percent_encoded_placeholder() {
        let filled = fill_placeholder("/users/%7Bid%7D/posts", "id", "42");
        assert_eq!(filled.as_deref(), Some("/users/42/posts"));
    }

    #[test]
    fn escapes_reserved_characters() {
        let filled = fill_placeholder("/files/{name}", "name", "a/b c");
        assert_eq!(filled.as_deref(), Some("/files/a%2Fb%20c"));
    }

    #[test]
    fn greedy_placeholder_keeps_slashes() {
        let filled = fill_placeholder("/objects/%7Bkey+%7D", "key", "photos/2024/cat.jpg");
        assert_eq!(filled.as_deref(), Some("/objects/photos/2024/cat.jpg"));
    }

    #[test]
    fn missing_placeholder_returns_none() {
        assert!(fill_placeholder("/users", "id", "42").is_none());
    }
}
