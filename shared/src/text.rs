//! Text helpers used when authoring and displaying case studies.

use chrono::{DateTime, NaiveDate};

/// Average reading speed used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Derive a URL slug from a title.
///
/// Lowercases, keeps only `a-z`, `0-9`, spaces and hyphens, and turns every run
/// of spaces/hyphens into a single `-`. Edge hyphens are kept, so
/// `" Why we failed "` becomes `"-why-we-failed-"`. Applying it to its own
/// output returns the same string.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());

    for ch in lowered.chars() {
        match ch {
            'a'..='z' | '0'..='9' => slug.push(ch),
            ' ' | '-' if !slug.ends_with('-') => slug.push('-'),
            _ => {},
        }
    }

    slug
}

/// Remove every `<...>` span. An unterminated `<` is kept as text.
pub fn strip_html_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        match rest[start..].find('>') {
            Some(end) => {
                out.push_str(&rest[..start]);
                rest = &rest[start + end + 1..];
            },
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// Minutes needed to read `content` (HTML), rounded up, never below 1.
pub fn estimate_reading_time(content: &str) -> u32 {
    let words = strip_html_tags(content).split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// Split a comma separated tag list, trimming and dropping empty entries.
pub fn parse_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.to_string())
        .collect()
}

/// Render a backend timestamp as `Mar 5, 2024`.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates; anything else is
/// returned unchanged.
pub fn format_display_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return timestamp.date_naive().format("%b %-d, %Y").to_string();
    }

    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => {
            tracing::debug!("unparseable timestamp kept as-is: {trimmed}");
            trimmed.to_string()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_drops_punctuation_and_collapses_separators() {
        assert_eq!(slugify("My Startup! Story"), "my-startup-story");
        assert_eq!(slugify("Hello -- World"), "hello-world");
        assert_eq!(slugify("Scaling to $1M ARR"), "scaling-to-1m-arr");
    }

    #[test]
    fn slugify_of_symbols_only_is_empty() {
        assert_eq!(slugify("!!!???"), "");
        assert_eq!(slugify("!!! ???"), "-");
    }

    #[test]
    fn slugify_keeps_surrounding_separators() {
        assert_eq!(slugify("  Hello -- World  "), "-hello-world-");
    }

    #[test]
    fn strip_html_keeps_unterminated_tag() {
        assert_eq!(strip_html_tags("<p>a</p> b <c"), "a b <c");
    }

    #[test]
    fn format_display_date_variants() {
        assert_eq!(format_display_date("2024-03-05T10:00:00.123+00:00"), "Mar 5, 2024");
        assert_eq!(format_display_date("2024-12-25"), "Dec 25, 2024");
        assert_eq!(format_display_date("yesterday"), "yesterday");
    }
}
