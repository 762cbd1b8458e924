//! Body text formatting
//!
//! Long-form fields arrive as plain text with blank-line paragraph breaks and
//! `•` bullet lines. The fixtures sometimes contain the two-character escape
//! `\n` instead of a real newline; both count as a line break.

use once_cell::sync::Lazy;
use regex::Regex;

/// Bullet marker that starts a list item line
pub const BULLET: char = '•';

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Format a body blob as paragraph and list markup
///
/// - Paragraphs are separated by a blank line; empty paragraphs are dropped.
/// - A paragraph containing a bullet marker becomes an optional `<p>` holding
///   its non-bullet lines joined by spaces, followed by a `<ul>` of the
///   bullet lines.
/// - Any other paragraph becomes one `<p>` with line breaks kept as `<br>`.
#[must_use]
pub fn format_body(blob: &str) -> String {
    let text = blob.replace("\\n", "\n");
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(format_paragraph)
        .collect()
}

fn format_paragraph(paragraph: &str) -> String {
    if !paragraph.contains(BULLET) {
        return format!("<p>{}</p>", paragraph.replace('\n', "<br>"));
    }

    let lines: Vec<&str> = paragraph.split('\n').collect();
    let items: String = lines
        .iter()
        .map(|line| line.trim())
        .filter_map(|line| line.strip_prefix(BULLET))
        .map(|item| format!("<li>{}</li>", item.trim()))
        .collect();
    let free_text = lines
        .iter()
        .filter(|line| !line.trim().starts_with(BULLET))
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    let free_text = free_text.trim();

    let mut out = String::new();
    if !free_text.is_empty() {
        out.push_str("<p>");
        out.push_str(free_text);
        out.push_str("</p>");
    }
    if !items.is_empty() {
        out.push_str("<ul>");
        out.push_str(&items);
        out.push_str("</ul>");
    }
    out
}

/// Plain-text excerpt of a markup fragment
///
/// Tags are stripped; text longer than `max_chars` characters is cut and
/// suffixed with `...`.
#[must_use]
pub fn excerpt(markup: &str, max_chars: usize) -> String {
    let plain = TAG.replace_all(markup, "");
    if plain.chars().count() > max_chars {
        let cut: String = plain.chars().take(max_chars).collect();
        format!("{cut}...")
    } else {
        plain.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_paragraphs_keep_line_breaks() {
        assert_eq!(format_body("one\ntwo"), "<p>one<br>two</p>");
        assert_eq!(format_body("a\n\nb"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn bullet_paragraph_splits_into_text_and_list() {
        let blob = "Intro paragraph.\n\nWe study:\n• pricing\n• hedging";
        assert_eq!(
            format_body(blob),
            "<p>Intro paragraph.</p><p>We study:</p><ul><li>pricing</li><li>hedging</li></ul>"
        );
    }

    #[test]
    fn bullet_only_paragraph_has_no_leading_text() {
        assert_eq!(format_body("• a\n  •   b  "), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn free_text_lines_are_joined_with_spaces() {
        assert_eq!(
            format_body("first\n• item\nsecond"),
            "<p>first second</p><ul><li>item</li></ul>"
        );
    }

    #[test]
    fn inline_bullet_without_list_lines() {
        // Marker present but no line starts with it: no list, lines joined.
        assert_eq!(format_body("x • y\nz"), "<p>x • y z</p>");
    }

    #[test]
    fn escaped_newlines_count_as_breaks() {
        assert_eq!(format_body(r"a\n\nb\nc"), "<p>a</p><p>b<br>c</p>");
    }

    #[test]
    fn empty_paragraphs_are_dropped() {
        assert_eq!(format_body("\n\n  \n\n"), "");
        assert_eq!(format_body(""), "");
    }

    #[test]
    fn excerpt_strips_tags_and_truncates() {
        assert_eq!(excerpt("<p>Hello <b>world</b></p>", 150), "Hello world");
        assert_eq!(excerpt("abcdef", 3), "abc...");
        assert_eq!(excerpt("abc", 3), "abc");
        assert_eq!(excerpt("éèêë", 2), "éè...");
    }
}
