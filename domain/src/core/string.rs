//! String utilities for the domain layer.

/// Shorten free text for one-line display (listings, log fields).
///
/// Newlines and runs of whitespace collapse to single spaces; text longer
/// than `max_chars` characters is cut and suffixed with `...`.
pub fn preview(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let kept: String = collapsed
        .chars()
        .take(max_chars.saturating_sub(3))
        .collect();
    format!("{}...", kept.trim_end())
}

/// True when the value carries no characters other than whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
