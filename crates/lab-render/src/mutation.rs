//! Mutation commands
//!
//! Projections never touch a page. They return a list of commands that an
//! adapter applies to whatever holds the page (a browser DOM, the in-memory
//! [`MemoryPage`](crate::surface::MemoryPage), a JSON dump for the CLI).
//! Commands addressing an element that is not in the page are no-ops.

use crate::selectors::Selector;
use serde::Serialize;

/// One write to the host page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    /// Replace the text content of the first match
    SetText {
        /// Target element
        target: Selector,
        /// New text, inserted as text, never parsed
        text: String,
    },
    /// Replace the inner markup of the first match
    SetHtml {
        /// Target element
        target: Selector,
        /// New markup
        html: String,
    },
    /// Replace the children of the first match, keeping its comment nodes
    ReplaceChildren {
        /// Target element
        target: Selector,
        /// Markup appended after the kept comments
        html: String,
    },
    /// Insert markup right after the first match
    InsertAfter {
        /// Target element
        target: Selector,
        /// Markup inserted as the next sibling
        html: String,
    },
    /// Set an attribute on the first match
    SetAttr {
        /// Target element
        target: Selector,
        /// Attribute name
        name: &'static str,
        /// Attribute value
        value: String,
    },
    /// Set an inline style property on every match
    SetStyle {
        /// Target elements
        target: Selector,
        /// CSS property
        property: &'static str,
        /// CSS value
        value: String,
    },
    /// Append a `<script src>` to the first match
    AppendScript {
        /// Parent element
        target: Selector,
        /// Script URL
        src: String,
    },
}

impl Mutation {
    /// Text content write
    #[inline]
    pub fn set_text(target: Selector, text: impl Into<String>) -> Self {
        Self::SetText {
            target,
            text: text.into(),
        }
    }

    /// Inner markup write
    #[inline]
    pub fn set_html(target: Selector, html: impl Into<String>) -> Self {
        Self::SetHtml {
            target,
            html: html.into(),
        }
    }

    /// Children replacement that keeps comments
    #[inline]
    pub fn replace_children(target: Selector, html: impl Into<String>) -> Self {
        Self::ReplaceChildren {
            target,
            html: html.into(),
        }
    }

    /// Sibling insertion
    #[inline]
    pub fn insert_after(target: Selector, html: impl Into<String>) -> Self {
        Self::InsertAfter {
            target,
            html: html.into(),
        }
    }

    /// Attribute write
    #[inline]
    pub fn set_attr(target: Selector, name: &'static str, value: impl Into<String>) -> Self {
        Self::SetAttr {
            target,
            name,
            value: value.into(),
        }
    }

    /// Inline style write
    #[inline]
    pub fn set_style(target: Selector, property: &'static str, value: impl Into<String>) -> Self {
        Self::SetStyle {
            target,
            property,
            value: value.into(),
        }
    }

    /// Script append
    #[inline]
    pub fn append_script(target: Selector, src: impl Into<String>) -> Self {
        Self::AppendScript {
            target,
            src: src.into(),
        }
    }

    /// `display: block`
    #[inline]
    #[must_use]
    pub fn show(target: Selector) -> Self {
        Self::set_style(target, "display", "block")
    }

    /// `display: none`
    #[inline]
    #[must_use]
    pub fn hide(target: Selector) -> Self {
        Self::set_style(target, "display", "none")
    }

    /// Element the command addresses
    #[must_use]
    pub fn target(&self) -> Selector {
        match self {
            Self::SetText { target, .. }
            | Self::SetHtml { target, .. }
            | Self::ReplaceChildren { target, .. }
            | Self::InsertAfter { target, .. }
            | Self::SetAttr { target, .. }
            | Self::SetStyle { target, .. }
            | Self::AppendScript { target, .. } => *target,
        }
    }
}
