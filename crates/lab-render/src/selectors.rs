//! DOM contract
//!
//! Every element the projections write to, named once. The host pages are
//! exported from the page builder, so most anchors are the builder's node ids;
//! when a layout is re-exported and a node id changes, this table is the only
//! place to update.

use serde::Serialize;
use std::fmt;

/// CSS selector of a pre-existing element in the host page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Selector(&'static str);

impl Selector {
    /// Wrap a selector literal
    #[inline]
    #[must_use]
    pub const fn new(selector: &'static str) -> Self {
        Self(selector)
    }

    /// The selector text
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Document `<head>`, where layout scripts are appended
pub const HEAD: Selector = Selector::new("head");

/// Regions and metadata shared by both detail pages
#[allow(missing_docs)]
pub mod detail {
    use super::Selector;

    pub const PAGE_TITLE: Selector = Selector::new("#page-title");
    pub const LOADING: Selector = Selector::new("#loading-state");
    pub const ERROR: Selector = Selector::new("#error-state");
    pub const MAIN: Selector = Selector::new("#main-content");
    pub const ERROR_MESSAGE: Selector = Selector::new("#error-message");

    pub const MAIN_ENTITY_META: Selector = Selector::new("#main-entity-meta");
    pub const DATE_PUBLISHED_META: Selector = Selector::new("#date-published-meta");
    pub const DATE_MODIFIED_META: Selector = Selector::new("#date-modified-meta");
    pub const AUTHOR_META: Selector = Selector::new("#author-meta");
    pub const AUTHOR_URL_META: Selector = Selector::new("#author-url-meta");
    pub const IMAGE_URL_META: Selector = Selector::new("#image-url-meta");
    pub const IMAGE_WIDTH_META: Selector = Selector::new("#image-width-meta");
    pub const IMAGE_HEIGHT_META: Selector = Selector::new("#image-height-meta");
}

/// Project detail page
#[allow(missing_docs)]
pub mod project {
    use super::Selector;

    pub const TITLE: Selector = Selector::new("#project-title");
    pub const DATE: Selector = Selector::new("#project-date");
    pub const AUTHORS: Selector = Selector::new("#project-authors");
    pub const ABSTRACT: Selector = Selector::new("#project-abstract");
    pub const FULLTEXT: Selector = Selector::new("#project-fulltext");
    pub const IMAGE: Selector = Selector::new("#project-image");
    pub const IMAGE_SECTION: Selector = Selector::new("#project-image-section");
}

/// News article page
#[allow(missing_docs)]
pub mod article {
    use super::Selector;

    pub const TITLE: Selector = Selector::new("#news-title");
    pub const DATE: Selector = Selector::new("#news-date");
    pub const CONTENT: Selector = Selector::new("#news-content");
}

/// News listing section
#[allow(missing_docs)]
pub mod news {
    use super::Selector;

    pub const GRID: Selector = Selector::new(".fl-node-5d68615b96237 .fl-post-grid");
    pub const POSTS: Selector =
        Selector::new(".fl-node-5d68615b96237 .fl-post-grid .fl-post-grid-post");
    pub const HEADING: Selector = Selector::new("#news-title, .news-section-title");
}

/// Research listing page
#[allow(missing_docs)]
pub mod research {
    use super::Selector;

    pub const HEADING: Selector = Selector::new(".fl-node-5d6c49696d531 .fl-heading-text");
}

/// Anchors of one research category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryAnchor {
    /// Category id in `research.json`
    pub key: &'static str,
    /// Post grid container
    pub grid: Selector,
    /// Cards inside the grid
    pub posts: Selector,
    /// Category heading text
    pub title: Selector,
}

/// The agreed set of research categories
pub const CATEGORY_ANCHORS: &[CategoryAnchor] = &[
    CategoryAnchor {
        key: "machine_learning",
        grid: Selector::new(".fl-node-5d55c1e3d3a9c .fl-post-grid"),
        posts: Selector::new(".fl-node-5d55c1e3d3a9c .fl-post-grid .fl-post-grid-post"),
        title: Selector::new(".fl-node-5d6c492487edc .fl-heading-text"),
    },
    CategoryAnchor {
        key: "ctrl_games",
        grid: Selector::new(".fl-node-5d6c4e0ddbda3 .fl-post-grid"),
        posts: Selector::new(".fl-node-5d6c4e0ddbda3 .fl-post-grid .fl-post-grid-post"),
        title: Selector::new(".fl-node-5d6c523caa7e0 .fl-heading-text"),
    },
    CategoryAnchor {
        key: "finance",
        grid: Selector::new(".fl-node-5d6c53f38b1af .fl-post-grid"),
        posts: Selector::new(".fl-node-5d6c53f38b1af .fl-post-grid .fl-post-grid-post"),
        title: Selector::new(".fl-node-5d6c54435012d .fl-heading-text"),
    },
    CategoryAnchor {
        key: "health",
        grid: Selector::new(".fl-node-5d6c549969f71 .fl-post-grid"),
        posts: Selector::new(".fl-node-5d6c549969f71 .fl-post-grid .fl-post-grid-post"),
        title: Selector::new(".fl-node-5d6c54c961eba .fl-heading-text"),
    },
    CategoryAnchor {
        key: "blockchain",
        grid: Selector::new(".fl-node-5d6c56de4208a .fl-post-grid"),
        posts: Selector::new(".fl-node-5d6c56de4208a .fl-post-grid .fl-post-grid-post"),
        title: Selector::new(".fl-node-5d6c571bcad33 .fl-heading-text"),
    },
];

/// Look up a category's anchors by id
#[must_use]
pub fn category_anchor(key: &str) -> Option<&'static CategoryAnchor> {
    CATEGORY_ANCHORS.iter().find(|a| a.key == key)
}

/// People page containers
#[allow(missing_docs)]
pub mod people {
    use super::Selector;

    pub const LEADING_FACULTY: Selector = Selector::new(".fl-node-5d6823bfb5bb7 .fl-col-content");
    pub const CURRENT_PHD_FIRST: Selector = Selector::new(".fl-node-5ca6426b8352a");
    pub const CURRENT_PHD_SECOND: Selector = Selector::new(".fl-node-5d681d93d07fe");
    pub const CURRENT_POSTDOCS: Selector = Selector::new(".fl-node-5ca645e27d590");
    pub const PAST_PHD_FIRST: Selector = Selector::new(".fl-node-5ca646bd746c5");
    pub const PAST_PHD_SECOND: Selector = Selector::new(".fl-node-5ca648c1e6966");
    pub const PAST_POSTDOCS: Selector = Selector::new(".fl-node-5da4b42b5aec3");
    pub const PAST_VISITORS: Selector = Selector::new(".fl-node-5ca64a1d102f1 .fl-rich-text ul");
}

/// Every selector of the contract, category anchors included
#[must_use]
pub fn contract() -> Vec<Selector> {
    let mut all = vec![
        HEAD,
        detail::PAGE_TITLE,
        detail::LOADING,
        detail::ERROR,
        detail::MAIN,
        detail::ERROR_MESSAGE,
        detail::MAIN_ENTITY_META,
        detail::DATE_PUBLISHED_META,
        detail::DATE_MODIFIED_META,
        detail::AUTHOR_META,
        detail::AUTHOR_URL_META,
        detail::IMAGE_URL_META,
        detail::IMAGE_WIDTH_META,
        detail::IMAGE_HEIGHT_META,
        project::TITLE,
        project::DATE,
        project::AUTHORS,
        project::ABSTRACT,
        project::FULLTEXT,
        project::IMAGE,
        project::IMAGE_SECTION,
        article::TITLE,
        article::DATE,
        article::CONTENT,
        news::GRID,
        news::POSTS,
        news::HEADING,
        research::HEADING,
        people::LEADING_FACULTY,
        people::CURRENT_PHD_FIRST,
        people::CURRENT_PHD_SECOND,
        people::CURRENT_POSTDOCS,
        people::PAST_PHD_FIRST,
        people::PAST_PHD_SECOND,
        people::PAST_POSTDOCS,
        people::PAST_VISITORS,
    ];
    for anchor in CATEGORY_ANCHORS {
        all.extend([anchor.grid, anchor.posts, anchor.title]);
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_unique() {
        for (i, a) in CATEGORY_ANCHORS.iter().enumerate() {
            for b in &CATEGORY_ANCHORS[i + 1..] {
                assert_ne!(a.key, b.key);
                assert_ne!(a.grid, b.grid);
                assert_ne!(a.title, b.title);
            }
        }
    }

    #[test]
    fn posts_live_inside_their_grid() {
        for anchor in CATEGORY_ANCHORS {
            assert!(anchor.posts.as_str().starts_with(anchor.grid.as_str()));
        }
        assert!(news::POSTS.as_str().starts_with(news::GRID.as_str()));
    }

    #[test]
    fn contract_has_no_duplicates() {
        let all = contract();
        let mut sorted = all.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), all.len());
    }

    #[test]
    fn lookup() {
        assert_eq!(
            category_anchor("finance").map(|a| a.grid.as_str()),
            Some(".fl-node-5d6c53f38b1af .fl-post-grid")
        );
        assert!(category_anchor("quantum").is_none());
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&detail::PAGE_TITLE).unwrap();
        assert_eq!(json, "\"#page-title\"");
    }
}
