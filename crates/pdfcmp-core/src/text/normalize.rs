/// Canonicalize a line of text for comparison.
///
/// Non-breaking spaces become ordinary spaces, whitespace runs collapse to
/// a single space, the ends are trimmed and everything is lowercased. Applied
/// identically to both documents so scores are symmetric.
pub fn normalize_text(raw: &str) -> String {
    raw.replace('\u{a0}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Same as [`normalize_text`] for optional input; `None` normalizes to "".
pub fn normalize_opt(raw: Option<&str>) -> String {
    raw.map(normalize_text).unwrap_or_default()
}
