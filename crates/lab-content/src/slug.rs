//! Identity resolution
//!
//! Records rarely carry an explicit id. The listing pages link to detail pages
//! with a slug computed from the title, and the detail pages recompute the
//! same slug to find the record again. There is no stored foreign key, so the
//! slug rule here is the only join key between the two pages.
//!
//! The rule is ASCII-only: lowercase, drop everything outside `[a-z0-9]`,
//! whitespace and `-`, turn whitespace runs into `-`, collapse `-` runs, trim
//! `-` from both ends.

use crate::model::{Article, Project};
use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").expect("slug character class is valid"));
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static HYPHENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("hyphen pattern is valid"));
static AUTHORS_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Authors:\s*").expect("authors prefix pattern is valid"));

/// Derive the URL-safe slug for a title or name
///
/// # Examples
/// - `"Deep Hedging: A Survey"` → `deep-hedging-a-survey`
/// - `"  --Mean_Field  Games-- "` → `meanfield-games`
#[must_use]
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped = DISALLOWED.replace_all(&lower, "");
    let hyphenated = WHITESPACE.replace_all(&stripped, "-");
    let collapsed = HYPHENS.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

/// Records addressable from a page's `id` query parameter
pub trait Identified {
    /// Explicit id field, if the record has one
    fn explicit_id(&self) -> Option<&str>;

    /// Human-readable title the slug is derived from
    fn title(&self) -> &str;

    /// Slug computed from the title
    #[inline]
    fn slug(&self) -> String {
        slugify(self.title())
    }

    /// Id used in generated links: explicit id first, slug otherwise
    #[inline]
    fn link_id(&self) -> String {
        self.explicit_id()
            .filter(|id| !id.is_empty())
            .map_or_else(|| self.slug(), str::to_string)
    }
}

impl Identified for Project {
    fn explicit_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn title(&self) -> &str {
        &self.display.title
    }
}

impl Identified for Article {
    fn explicit_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// Find the record a query id refers to
///
/// Exact explicit-id matches are tried across all records first; only then is
/// the query compared against every record's computed slug. The first match
/// wins. An empty query never matches.
pub fn resolve<'a, T, I>(records: I, query: &str) -> Option<&'a T>
where
    T: Identified + 'a,
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: Clone,
{
    if query.is_empty() {
        return None;
    }

    let records = records.into_iter();
    records
        .clone()
        .find(|r| r.explicit_id() == Some(query))
        .or_else(|| records.clone().find(|r| r.slug() == query))
}

/// First author of an author line such as `Authors: Jane Doe, John Roe`
#[must_use]
pub fn first_author(authors: &str) -> String {
    let clean = AUTHORS_PREFIX.replace(authors, "");
    clean.split(',').next().unwrap_or_default().trim().to_string()
}

/// Author line without its `Authors:` prefix
#[must_use]
pub fn strip_authors_prefix(authors: &str) -> String {
    AUTHORS_PREFIX.replace(authors, "").into_owned()
}

/// Detail page link for a research project id
#[must_use]
pub fn project_link(id: &str) -> String {
    format!("projects/project.html?id={id}")
}

/// Detail page link for a news article id
#[must_use]
pub fn news_link(id: &str) -> String {
    format!("news/news.html?id={id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectDisplay;
    use proptest::prelude::*;

    fn project(id: Option<&str>, title: &str) -> Project {
        Project {
            id: id.map(str::to_string),
            visible: None,
            display: ProjectDisplay {
                title: title.to_string(),
                ..ProjectDisplay::default()
            },
            metadata: None,
            details: None,
        }
    }

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("Alpha Project"), "alpha-project");
        assert_eq!(slugify("Deep Hedging: A Survey"), "deep-hedging-a-survey");
        assert_eq!(slugify("  Leading and trailing  "), "leading-and-trailing");
    }

    #[test]
    fn slugify_collapses_hyphens() {
        assert_eq!(slugify("a -- b"), "a-b");
        assert_eq!(slugify("--x--"), "x");
        assert_eq!(slugify("a - - b"), "a-b");
    }

    #[test]
    fn slugify_drops_underscores_and_accents() {
        assert_eq!(slugify("mean_field games"), "meanfield-games");
        assert_eq!(slugify("Café Résumé"), "caf-rsum");
    }

    #[test]
    fn slugify_empty_and_symbols() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("2021: Year 1"), "2021-year-1");
    }

    #[test]
    fn resolve_prefers_explicit_id() {
        let records = [
            project(None, "alpha"),
            project(Some("alpha"), "Something Else"),
        ];

        let found = resolve(&records, "alpha").unwrap();
        assert_eq!(found.display.title, "Something Else");
    }

    #[test]
    fn resolve_falls_back_to_slug() {
        let records = [project(Some("p-1"), "Other"), project(None, "Alpha Project")];

        let found = resolve(&records, "alpha-project").unwrap();
        assert_eq!(found.display.title, "Alpha Project");
        assert!(resolve(&records, "p-1").is_some());
    }

    #[test]
    fn resolve_missing_and_empty() {
        let records = [project(None, "Alpha")];
        assert!(resolve(&records, "beta").is_none());
        assert!(resolve(&records, "").is_none());
    }

    #[test]
    fn link_id_uses_explicit_id_when_present() {
        assert_eq!(project(Some("custom"), "Alpha Beta").link_id(), "custom");
        assert_eq!(project(Some(""), "Alpha Beta").link_id(), "alpha-beta");
        assert_eq!(project(None, "Alpha Beta").link_id(), "alpha-beta");
    }

    #[test]
    fn first_author_strips_prefix() {
        assert_eq!(first_author("Authors: Jane Doe, John Roe"), "Jane Doe");
        assert_eq!(first_author("Authors:Jane Doe"), "Jane Doe");
        assert_eq!(first_author("Solo Author"), "Solo Author");
        assert_eq!(first_author(""), "");
    }

    #[test]
    fn links() {
        assert_eq!(project_link("x"), "projects/project.html?id=x");
        assert_eq!(news_link("y"), "news/news.html?id=y");
    }

    proptest! {
        #[test]
        fn prop_slugify_is_idempotent(title in "\\PC{0,40}") {
            let once = slugify(&title);
            prop_assert_eq!(slugify(&once), once.clone());
        }

        #[test]
        fn prop_slug_alphabet(title in "\\PC{0,40}") {
            let slug = slugify(&title);
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
        }
    }
}
