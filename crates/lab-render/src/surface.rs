//! Page adapters
//!
//! [`PageSurface`] is the seam between projections and whatever holds the
//! page. Two adapters ship here: `Vec<Mutation>` records commands verbatim,
//! and [`MemoryPage`] applies them to a flat in-memory model of the page's
//! addressable elements.

use crate::html::escape;
use crate::mutation::Mutation;
use crate::selectors::{self, Selector};
use indexmap::IndexMap;
use tracing::trace;

/// Something mutation commands can be applied to
pub trait PageSurface: Send {
    /// Apply one command; unknown targets are ignored
    fn apply(&mut self, mutation: Mutation);

    /// Apply commands in order
    fn apply_all<I>(&mut self, mutations: I)
    where
        I: IntoIterator<Item = Mutation>,
        Self: Sized,
    {
        for mutation in mutations {
            self.apply(mutation);
        }
    }
}

impl PageSurface for Vec<Mutation> {
    fn apply(&mut self, mutation: Mutation) {
        self.push(mutation);
    }
}

/// State of one addressable element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Inner markup
    pub html: String,
    /// Text last written with `SetText`
    pub text: Option<String>,
    /// Comment nodes kept across child replacement
    pub comments: Vec<String>,
    /// Attributes in write order
    pub attrs: IndexMap<&'static str, String>,
    /// Inline styles in write order
    pub styles: IndexMap<&'static str, String>,
    /// Markup inserted as following siblings
    pub after: Vec<String>,
    /// Appended script URLs
    pub scripts: Vec<String>,
    /// Number of commands applied to this element
    pub writes: usize,
}

impl Element {
    /// Whether the element is displayed (`display` is not `none`)
    #[must_use]
    pub fn is_displayed(&self) -> bool {
        self.styles.get("display").map_or(true, |d| d != "none")
    }
}

/// In-memory page: the set of elements that exist, keyed by selector
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    elements: IndexMap<Selector, Element>,
    ignored: usize,
}

impl MemoryPage {
    /// Page with no elements; every command is ignored
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Page containing every element of the site's contract
    #[must_use]
    pub fn with_contract() -> Self {
        selectors::contract()
            .into_iter()
            .fold(Self::new(), Self::with_element)
    }

    /// Add an empty element
    #[must_use]
    pub fn with_element(mut self, selector: Selector) -> Self {
        self.elements.entry(selector).or_default();
        self
    }

    /// Add a comment node to an element
    #[must_use]
    pub fn with_comment(mut self, selector: Selector, comment: impl Into<String>) -> Self {
        let element = self.elements.entry(selector).or_default();
        element.comments.push(comment.into());
        element.html = render_comments(&element.comments);
        self
    }

    /// Remove an element, as if the host page lacked it
    #[must_use]
    pub fn without_element(mut self, selector: Selector) -> Self {
        self.elements.shift_remove(&selector);
        self
    }

    /// Element state, if present
    #[must_use]
    pub fn element(&self, selector: Selector) -> Option<&Element> {
        self.elements.get(&selector)
    }

    /// Text written with `SetText`
    #[must_use]
    pub fn text(&self, selector: Selector) -> Option<&str> {
        self.element(selector).and_then(|e| e.text.as_deref())
    }

    /// Inner markup
    #[must_use]
    pub fn html(&self, selector: Selector) -> Option<&str> {
        self.element(selector).map(|e| e.html.as_str())
    }

    /// Attribute value
    #[must_use]
    pub fn attr(&self, selector: Selector, name: &str) -> Option<&str> {
        self.element(selector)
            .and_then(|e| e.attrs.get(name))
            .map(String::as_str)
    }

    /// Inline style value
    #[must_use]
    pub fn style(&self, selector: Selector, property: &str) -> Option<&str> {
        self.element(selector)
            .and_then(|e| e.styles.get(property))
            .map(String::as_str)
    }

    /// Whether the element exists and is displayed
    #[must_use]
    pub fn is_displayed(&self, selector: Selector) -> bool {
        self.element(selector).is_some_and(Element::is_displayed)
    }

    /// Number of commands applied to an element
    #[must_use]
    pub fn writes(&self, selector: Selector) -> usize {
        self.element(selector).map_or(0, |e| e.writes)
    }

    /// Number of commands whose target was missing
    #[must_use]
    pub fn ignored(&self) -> usize {
        self.ignored
    }
}

fn render_comments(comments: &[String]) -> String {
    comments.iter().map(|c| format!("<!--{c}-->")).collect()
}

impl PageSurface for MemoryPage {
    fn apply(&mut self, mutation: Mutation) {
        let Some(element) = self.elements.get_mut(&mutation.target()) else {
            trace!(target_selector = %mutation.target(), "Target not in page, ignoring");
            self.ignored += 1;
            return;
        };
        element.writes += 1;

        match mutation {
            Mutation::SetText { text, .. } => {
                element.html = escape(&text);
                element.text = Some(text);
            }
            Mutation::SetHtml { html, .. } => {
                element.comments.clear();
                element.text = None;
                element.html = html;
            }
            Mutation::ReplaceChildren { html, .. } => {
                element.text = None;
                element.html = render_comments(&element.comments) + &html;
            }
            Mutation::InsertAfter { html, .. } => element.after.push(html),
            Mutation::SetAttr { name, value, .. } => {
                element.attrs.insert(name, value);
            }
            Mutation::SetStyle {
                property, value, ..
            } => {
                element.styles.insert(property, value);
            }
            Mutation::AppendScript { src, .. } => element.scripts.push(src),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selectors::{detail, news};

    #[test]
    fn missing_targets_are_ignored() {
        let mut page = MemoryPage::new().with_element(detail::PAGE_TITLE);
        page.apply(Mutation::set_text(detail::ERROR_MESSAGE, "x"));
        page.apply(Mutation::set_text(detail::PAGE_TITLE, "T"));

        assert_eq!(page.ignored(), 1);
        assert_eq!(page.text(detail::PAGE_TITLE), Some("T"));
        assert_eq!(page.element(detail::ERROR_MESSAGE), None);
    }

    #[test]
    fn replace_children_keeps_comments() {
        let mut page = MemoryPage::new().with_comment(news::GRID, " posts ");
        page.apply(Mutation::replace_children(news::GRID, "<div>a</div>"));
        assert_eq!(page.html(news::GRID), Some("<!-- posts --><div>a</div>"));

        page.apply(Mutation::set_html(news::GRID, "<p>b</p>"));
        assert_eq!(page.html(news::GRID), Some("<p>b</p>"));
    }

    #[test]
    fn text_is_escaped_into_markup() {
        let mut page = MemoryPage::new().with_element(detail::PAGE_TITLE);
        page.apply(Mutation::set_text(detail::PAGE_TITLE, "a < b"));
        assert_eq!(page.html(detail::PAGE_TITLE), Some("a &lt; b"));
    }

    #[test]
    fn display_toggles() {
        let mut page = MemoryPage::with_contract();
        assert!(page.is_displayed(detail::MAIN));
        page.apply(Mutation::hide(detail::MAIN));
        assert!(!page.is_displayed(detail::MAIN));
        assert_eq!(page.writes(detail::MAIN), 1);
    }

    #[test]
    fn vec_records_commands() {
        let mut log: Vec<Mutation> = Vec::new();
        log.apply_all([Mutation::show(detail::MAIN), Mutation::hide(detail::ERROR)]);
        assert_eq!(log.len(), 2);
    }
}
