//! Markup helpers

/// Escape text for use in element content or a quoted attribute value
#[must_use]
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wrap `inner` in a labelled `<strong>` prefix, as the detail pages render fields
pub(crate) fn labelled(label: &str, inner: &str) -> String {
    format!("<strong>{label}: </strong>{inner}")
}
