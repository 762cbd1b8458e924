//! Detail page projections
//!
//! A detail page has three regions (loading, error, main) and a set of
//! fixed slots. Projection writes each slot at most once; optional slots
//! (author, image, full text) are skipped, not blanked, so the page's
//! default metadata stays intact.

use crate::html::{escape, labelled};
use crate::mutation::Mutation;
use crate::options::RenderOptions;
use crate::selectors::{article, detail, project};
use lab_content::body::format_body;
use lab_content::date::normalize;
use lab_content::image::ImageCatalog;
use lab_content::model::{present, Article, Project, ProjectDetails};
use lab_content::slug::{first_author, news_link, strip_authors_prefix, Identified};

/// Label of the full-text line when the record has none
pub const DEFAULT_FULLTEXT_LABEL: &str = "Full-text";

/// Where the page is being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailContext<'a> {
    /// Full address of the page, used as the schema.org entity id
    pub page_href: &'a str,
    /// Prefix turning document-relative asset paths into page-relative ones
    pub asset_prefix: &'a str,
}

impl Default for DetailContext<'_> {
    fn default() -> Self {
        Self {
            page_href: "",
            asset_prefix: "../",
        }
    }
}

/// Region toggles for the error state, followed by the message
#[must_use]
pub fn error_state(message: &str) -> Vec<Mutation> {
    vec![
        Mutation::hide(detail::LOADING),
        Mutation::show(detail::ERROR),
        Mutation::hide(detail::MAIN),
        Mutation::set_text(detail::ERROR_MESSAGE, message),
    ]
}

/// Region toggles for the ready state
#[must_use]
pub fn ready_state() -> Vec<Mutation> {
    vec![
        Mutation::hide(detail::LOADING),
        Mutation::hide(detail::ERROR),
        Mutation::show(detail::MAIN),
    ]
}

fn page_title(title: &str, options: &RenderOptions) -> Mutation {
    Mutation::set_text(detail::PAGE_TITLE, format!("{title} - {}", options.lab_name))
}

fn date_meta(date: &str, out: &mut Vec<Mutation>) {
    let iso = normalize(date);
    if iso.is_empty() {
        return;
    }
    out.push(Mutation::set_attr(detail::DATE_PUBLISHED_META, "content", iso.clone()));
    out.push(Mutation::set_attr(detail::DATE_MODIFIED_META, "content", iso));
}

/// Slot writes for a research project page
#[must_use]
pub fn project_detail(
    record: &Project,
    details: &ProjectDetails,
    ctx: &DetailContext<'_>,
    options: &RenderOptions,
) -> Vec<Mutation> {
    let display = &record.display;
    let mut out = vec![
        page_title(&display.title, options),
        Mutation::set_text(project::TITLE, &display.title),
    ];

    let authors = present(details.authors.as_ref())
        .map_or_else(|| escape(&strip_authors_prefix(&display.authors)), str::to_string);
    out.push(Mutation::set_html(project::AUTHORS, labelled("Authors", &authors)));
    out.push(Mutation::set_text(project::DATE, &display.date));

    out.push(Mutation::set_attr(detail::MAIN_ENTITY_META, "itemid", ctx.page_href));
    out.push(Mutation::set_attr(detail::MAIN_ENTITY_META, "content", &display.title));
    date_meta(&display.date, &mut out);
    let author = first_author(&display.authors);
    if !author.is_empty() {
        out.push(Mutation::set_attr(detail::AUTHOR_META, "content", author));
    }

    if let Some(image) = present(details.image.as_ref()) {
        let src = format!("{}{image}", ctx.asset_prefix);
        out.push(Mutation::set_attr(project::IMAGE, "src", src.clone()));
        out.push(Mutation::set_attr(project::IMAGE, "alt", &display.title));
        out.push(Mutation::set_attr(detail::IMAGE_URL_META, "content", src));

        let info = ImageCatalog::research().resolve(image);
        if info.is_catalogued() {
            out.push(Mutation::set_attr(
                detail::IMAGE_WIDTH_META,
                "content",
                info.original_width.to_string(),
            ));
            out.push(Mutation::set_attr(
                detail::IMAGE_HEIGHT_META,
                "content",
                info.original_height.to_string(),
            ));
        }
        out.push(Mutation::show(project::IMAGE_SECTION));
    }

    if let Some(abstract_text) = present(details.abstract_text.as_ref()) {
        out.push(Mutation::set_html(project::ABSTRACT, labelled("Abstract", abstract_text)));
    }

    if let Some(text) = present(details.paper_text.as_ref()) {
        let label = escape(present(details.paper_label.as_ref()).unwrap_or(DEFAULT_FULLTEXT_LABEL));
        let html = match present(details.paper_url.as_ref()).filter(|url| *url != "#") {
            Some(url) => labelled(
                &label,
                &format!(r#"<a href="{}" target="_blank">{text}</a>"#, escape(url)),
            ),
            None => labelled(&label, text),
        };
        out.push(Mutation::set_html(project::FULLTEXT, html));
    }

    out
}

/// Slot writes for a news article page
#[must_use]
pub fn news_detail(record: &Article, content: &str, options: &RenderOptions) -> Vec<Mutation> {
    let mut out = vec![
        page_title(&record.title, options),
        Mutation::set_text(article::TITLE, &record.title),
        Mutation::set_text(article::DATE, &record.date),
        Mutation::set_attr(detail::MAIN_ENTITY_META, "itemid", news_link(&record.link_id())),
        Mutation::set_attr(detail::MAIN_ENTITY_META, "content", &record.title),
    ];
    date_meta(&record.date, &mut out);

    if let Some(author) = present(record.author.as_ref()) {
        out.push(Mutation::set_attr(detail::AUTHOR_META, "content", author));
        out.push(Mutation::set_attr(
            detail::AUTHOR_URL_META,
            "content",
            &options.news_author_url,
        ));
    }

    out.push(Mutation::set_html(article::CONTENT, format_body(content)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selectors::Selector;
    use lab_content::model::ProjectDisplay;
    use pretty_assertions::assert_eq;

    fn record(details: ProjectDetails) -> Project {
        Project {
            id: None,
            visible: None,
            display: ProjectDisplay {
                title: "Alpha Project".into(),
                date: "March 3, 2021".into(),
                authors: "Authors: Jane Doe, John Roe".into(),
                image: "img/alpha-300x200.png".into(),
                link: None,
            },
            metadata: None,
            details: Some(details),
        }
    }

    fn targets(mutations: &[Mutation]) -> Vec<Selector> {
        mutations.iter().map(Mutation::target).collect()
    }

    #[test]
    fn minimal_project_skips_optional_slots() {
        let details = ProjectDetails::default();
        let ctx = DetailContext {
            page_href: "https://lab.example/projects/project.html?id=alpha-project",
            ..DetailContext::default()
        };
        let out = project_detail(&record(details.clone()), &details, &ctx, &RenderOptions::default());

        let touched = targets(&out);
        assert!(!touched.contains(&project::IMAGE));
        assert!(!touched.contains(&project::IMAGE_SECTION));
        assert!(!touched.contains(&project::ABSTRACT));
        assert!(!touched.contains(&project::FULLTEXT));

        assert_eq!(
            out[0],
            Mutation::set_text(detail::PAGE_TITLE, "Alpha Project - RADAResearch Lab")
        );
        assert!(out.contains(&Mutation::set_html(
            project::AUTHORS,
            "<strong>Authors: </strong>Jane Doe, John Roe"
        )));
        assert!(out.contains(&Mutation::set_attr(
            detail::DATE_PUBLISHED_META,
            "content",
            "2021-03-03"
        )));
        assert!(out.contains(&Mutation::set_attr(detail::AUTHOR_META, "content", "Jane Doe")));
    }

    #[test]
    fn full_project() {
        let details = ProjectDetails {
            authors: Some("<a href=\"#jane\">Jane Doe</a>".into()),
            abstract_text: Some("We <em>study</em> things.".into()),
            image: Some("img/pgdot-300x224.png".into()),
            paper_text: Some("Doe (2021)".into()),
            paper_url: Some("https://doi.org/x".into()),
            paper_label: None,
        };
        let out = project_detail(
            &record(details.clone()),
            &details,
            &DetailContext::default(),
            &RenderOptions::default(),
        );

        assert!(out.contains(&Mutation::set_html(
            project::AUTHORS,
            "<strong>Authors: </strong><a href=\"#jane\">Jane Doe</a>"
        )));
        assert!(out.contains(&Mutation::set_attr(project::IMAGE, "src", "../img/pgdot-300x224.png")));
        assert!(out.contains(&Mutation::set_attr(detail::IMAGE_WIDTH_META, "content", "800")));
        assert!(out.contains(&Mutation::show(project::IMAGE_SECTION)));
        assert!(out.contains(&Mutation::set_html(
            project::ABSTRACT,
            "<strong>Abstract: </strong>We <em>study</em> things."
        )));
        assert!(out.contains(&Mutation::set_html(
            project::FULLTEXT,
            "<strong>Full-text: </strong><a href=\"https://doi.org/x\" target=\"_blank\">Doe (2021)</a>"
        )));
    }

    #[test]
    fn uncatalogued_image_skips_dimensions() {
        let details = ProjectDetails {
            image: Some("img/full.png".into()),
            ..ProjectDetails::default()
        };
        let out = project_detail(
            &record(details.clone()),
            &details,
            &DetailContext::default(),
            &RenderOptions::default(),
        );
        let touched = targets(&out);
        assert!(touched.contains(&detail::IMAGE_URL_META));
        assert!(!touched.contains(&detail::IMAGE_WIDTH_META));
        assert!(!touched.contains(&detail::IMAGE_HEIGHT_META));
    }

    #[test]
    fn placeholder_paper_url_is_not_linked() {
        let details = ProjectDetails {
            paper_text: Some("Working paper".into()),
            paper_url: Some("#".into()),
            paper_label: Some("Preprint".into()),
            ..ProjectDetails::default()
        };
        let out = project_detail(
            &record(details.clone()),
            &details,
            &DetailContext::default(),
            &RenderOptions::default(),
        );
        assert!(out.contains(&Mutation::set_html(
            project::FULLTEXT,
            "<strong>Preprint: </strong>Working paper"
        )));
    }

    #[test]
    fn news_detail_slots_written_once() {
        let record = Article {
            title: "Lab Wins Award".into(),
            date: "March 3, 2021".into(),
            content: Some("First.\n\nSecond".into()),
            ..Article::default()
        };
        let out = news_detail(&record, "First.\n\nSecond", &RenderOptions::default());

        for slot in [article::TITLE, article::DATE, article::CONTENT] {
            assert_eq!(targets(&out).iter().filter(|t| **t == slot).count(), 1);
        }
        assert!(out.contains(&Mutation::set_html(article::CONTENT, "<p>First.</p><p>Second</p>")));
        assert!(out.contains(&Mutation::set_attr(
            detail::MAIN_ENTITY_META,
            "itemid",
            "news/news.html?id=lab-wins-award"
        )));
        assert!(!targets(&out).contains(&detail::AUTHOR_META));
        assert!(!targets(&out).contains(&detail::AUTHOR_URL_META));
    }

    #[test]
    fn news_author_meta_when_present() {
        let record = Article {
            title: "T".into(),
            author: Some("Jane".into()),
            ..Article::default()
        };
        let out = news_detail(&record, "x", &RenderOptions::default());
        assert!(out.contains(&Mutation::set_attr(detail::AUTHOR_META, "content", "Jane")));
        assert!(out.contains(&Mutation::set_attr(
            detail::AUTHOR_URL_META,
            "content",
            "https://coerisklab.wpengine.com/?author=6"
        )));
        // Empty date: no date metadata at all.
        assert!(!targets(&out).contains(&detail::DATE_PUBLISHED_META));
    }

    #[test]
    fn error_state_shows_message() {
        let out = error_state("Project \"x\" not found");
        assert_eq!(out.last(), Some(&Mutation::set_text(detail::ERROR_MESSAGE, "Project \"x\" not found")));
        assert!(out.contains(&Mutation::hide(detail::MAIN)));
        assert!(ready_state().contains(&Mutation::show(detail::MAIN)));
    }
}
