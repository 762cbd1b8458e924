//! Content documents
//!
//! One type per JSON document the site reads. Records are loaded fresh for
//! every page view and never mutated. Field names follow the fixtures, so the
//! serde renames here are the data contract.

use serde::{Deserialize, Serialize};

/// Records that carry the optional `visible` flag
///
/// Filtering fails open: only an explicit `false` hides a record.
pub trait Visibility {
    /// Raw flag as stored in the document
    fn visible_flag(&self) -> Option<bool>;

    /// Whether the record should be rendered
    #[inline]
    fn is_visible(&self) -> bool {
        self.visible_flag() != Some(false)
    }
}

/// Keep only visible records, preserving order
#[must_use]
pub fn visible<T: Visibility>(records: &[T]) -> Vec<&T> {
    records.iter().filter(|r| r.is_visible()).collect()
}

/// Treat empty strings like absent values, as the page scripts always did
#[inline]
#[must_use]
pub fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// `research.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResearchDocument {
    /// Page heading
    #[serde(default)]
    pub title: Option<String>,
    /// Research areas in display order
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl ResearchDocument {
    /// All projects across categories, in document order
    pub fn projects(&self) -> impl Iterator<Item = &Project> + Clone {
        self.categories.iter().flat_map(|c| c.projects.iter())
    }
}

/// One research area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Anchor key; must match the page's category anchor table
    pub id: String,
    /// Display name
    pub name: String,
    /// Projects in display order
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Category {
    /// Visible projects only
    #[must_use]
    pub fn visible_projects(&self) -> Vec<&Project> {
        visible(&self.projects)
    }
}

/// Research project record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Explicit id; usually absent and derived from the title
    #[serde(default)]
    pub id: Option<String>,
    /// Visibility flag
    #[serde(default)]
    pub visible: Option<bool>,
    /// Listing card fields
    pub display: ProjectDisplay,
    /// Schema.org overrides for the listing card
    #[serde(default)]
    pub metadata: Option<ProjectMetadata>,
    /// Detail page payload
    #[serde(default)]
    pub details: Option<ProjectDetails>,
}

impl Visibility for Project {
    fn visible_flag(&self) -> Option<bool> {
        self.visible
    }
}

/// Listing card fields of a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDisplay {
    /// Title, also the identity source
    pub title: String,
    /// Free-text date
    #[serde(default)]
    pub date: String,
    /// Author line, usually prefixed with `Authors:`
    #[serde(default)]
    pub authors: String,
    /// Thumbnail path
    #[serde(default)]
    pub image: String,
    /// Explicit link overriding the detail page link
    #[serde(default)]
    pub link: Option<String>,
}

/// Schema.org overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetadata {
    /// `datePublished` value
    #[serde(default)]
    pub date_published: Option<String>,
    /// `dateModified` value
    #[serde(default)]
    pub date_modified: Option<String>,
    /// Author profile URL
    #[serde(default)]
    pub author_url: Option<String>,
}

/// Detail page payload of a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetails {
    /// Structured author list (markup allowed)
    #[serde(default)]
    pub authors: Option<String>,
    /// Abstract (markup allowed)
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
    /// Full-size image path
    #[serde(default)]
    pub image: Option<String>,
    /// Full-text citation text
    #[serde(default)]
    pub paper_text: Option<String>,
    /// Full-text URL; `#` means none
    #[serde(default)]
    pub paper_url: Option<String>,
    /// Label for the full-text line
    #[serde(default)]
    pub paper_label: Option<String>,
}

/// `news.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsDocument {
    /// Articles, newest first
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// News article record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Explicit id; normally absent
    #[serde(default)]
    pub id: Option<String>,
    /// Headline, also the identity source
    pub title: String,
    /// Free-text date
    #[serde(default)]
    pub date: String,
    /// Author display name
    #[serde(default)]
    pub author: Option<String>,
    /// Body (markup allowed)
    #[serde(default)]
    pub content: Option<String>,
    /// Visibility flag
    #[serde(default)]
    pub visible: Option<bool>,
}

impl Visibility for Article {
    fn visible_flag(&self) -> Option<bool> {
        self.visible
    }
}

/// `people.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeopleDocument {
    /// Leading faculty
    #[serde(default)]
    pub leading_faculty: Vec<Person>,
    /// Current PhD students
    #[serde(default, rename = "currentPhDStudents")]
    pub current_phd_students: Vec<Person>,
    /// Current postdocs
    #[serde(default)]
    pub current_postdocs: Vec<Person>,
    /// Past PhD students
    #[serde(default, rename = "pastPhDStudents")]
    pub past_phd_students: Vec<Person>,
    /// Past postdocs
    #[serde(default)]
    pub past_postdocs: Vec<Person>,
    /// Past visitors (names only)
    #[serde(default)]
    pub past_visitors: Vec<Visitor>,
}

/// A photo card on the people page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Display name
    pub name: String,
    /// Photo path
    #[serde(default)]
    pub image: String,
    /// Personal page
    #[serde(default)]
    pub link: Option<String>,
    /// Visibility flag
    #[serde(default)]
    pub visible: Option<bool>,
}

impl Visibility for Person {
    fn visible_flag(&self) -> Option<bool> {
        self.visible
    }
}

/// A past visitor list entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    /// Display name
    pub name: String,
    /// Personal page
    #[serde(default)]
    pub link: Option<String>,
    /// Link target, `_new` when absent
    #[serde(default)]
    pub link_target: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn research_document_from_fixture_shape() {
        let json = r##"{
            "title": "Research",
            "categories": [{
                "id": "finance",
                "name": "Financial Engineering",
                "projects": [{
                    "visible": false,
                    "display": {"title": "Fintech", "date": "May 1, 2020", "authors": "Authors: A, B", "image": "x.png"},
                    "metadata": {"datePublished": "2020-05-01"},
                    "details": {"abstract": "text", "paper_url": "#"}
                }]
            }]
        }"##;

        let doc: ResearchDocument = serde_json::from_str(json).unwrap();
        let project = &doc.categories[0].projects[0];
        assert!(!project.is_visible());
        assert_eq!(
            project.metadata.as_ref().unwrap().date_published.as_deref(),
            Some("2020-05-01")
        );
        assert_eq!(
            project.details.as_ref().unwrap().abstract_text.as_deref(),
            Some("text")
        );
    }

    #[test]
    fn people_document_keys() {
        let json = r#"{
            "leadingFaculty": [{"name": "A", "image": "a.png"}],
            "currentPhDStudents": [{"name": "B", "image": "b.png", "link": "https://b"}],
            "pastVisitors": [{"name": "C", "linkTarget": "_blank"}]
        }"#;

        let doc: PeopleDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.leading_faculty.len(), 1);
        assert_eq!(doc.current_phd_students[0].link.as_deref(), Some("https://b"));
        assert!(doc.past_postdocs.is_empty());
        assert_eq!(doc.past_visitors[0].link_target.as_deref(), Some("_blank"));
    }

    #[test]
    fn visibility_fails_open() {
        let shown = Article {
            title: "shown".into(),
            ..Article::default()
        };
        let explicit = Article {
            title: "explicit".into(),
            visible: Some(true),
            ..Article::default()
        };
        let hidden = Article {
            title: "hidden".into(),
            visible: Some(false),
            ..Article::default()
        };

        let all = [shown, explicit, hidden];
        let titles: Vec<_> = visible(&all).iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["shown", "explicit"]);
    }

    #[test]
    fn present_skips_empty() {
        assert_eq!(present(Some(&String::new())), None);
        assert_eq!(present(Some(&"x".to_string())), Some("x"));
        assert_eq!(present(None), None);
    }
}
