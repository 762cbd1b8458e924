//! Research listing projection
//!
//! Each known category gets its post grid rebuilt from the visible projects.
//! Cards reproduce the page builder's post-grid markup, including the
//! schema.org block the theme emits, because the masonry script and the
//! stylesheet key off those classes.

use crate::html::escape;
use crate::mutation::Mutation;
use crate::options::RenderOptions;
use crate::selectors::{self, CategoryAnchor};
use lab_content::date::normalize;
use lab_content::grid::LoadPriority;
use lab_content::image::ImageCatalog;
use lab_content::model::{present, Category, Project, ResearchDocument};
use lab_content::slug::{first_author, project_link, Identified};
use tracing::{debug, warn};

/// Category whose cards are forced visible instead of waiting for masonry
const FORCED_VISIBLE: &str = "machine_learning";

const SIZER: &str = r#"<div class="fl-post-grid-sizer"></div>"#;
const EMPTY: &str = r#"<div class="fl-post-grid-empty"></div>"#;
const CLEAR: &str = r#"<div class="fl-clear"></div>"#;

/// WordPress post ids of the exported cards, by category and position
const POST_IDS: &[(&str, &[u32])] = &[
    ("machine_learning", &[127, 128, 129, 126, 125, 91, 87, 106]),
    ("ctrl_games", &[93, 95]),
    ("finance", &[118]),
    ("health", &[104, 102]),
    ("blockchain", &[]),
];

/// Post id for the card at `index` of a category; `100 + index` when unknown
#[must_use]
pub fn post_id(category: &str, index: usize) -> u64 {
    POST_IDS
        .iter()
        .find(|(key, _)| *key == category)
        .and_then(|(_, ids)| ids.get(index))
        .map_or(100 + index as u64, |id| u64::from(*id))
}

/// Mutations for the research listing page
///
/// Page heading, category headings, then one grid per known category.
/// Categories without an anchor are skipped.
#[must_use]
pub fn research_listing(doc: &ResearchDocument, options: &RenderOptions) -> Vec<Mutation> {
    let mut out = Vec::new();

    if let Some(title) = present(doc.title.as_ref()) {
        out.push(Mutation::set_text(selectors::research::HEADING, title));
    }

    for category in &doc.categories {
        if let Some(anchor) = selectors::category_anchor(&category.id) {
            out.push(Mutation::set_text(anchor.title, &category.name));
        }
    }

    for category in &doc.categories {
        let Some(anchor) = selectors::category_anchor(&category.id) else {
            warn!(category = %category.id, "No anchor for research category, skipping");
            continue;
        };
        let visible = category.visible_projects();
        debug!(
            category = %category.id,
            visible = visible.len(),
            total = category.projects.len(),
            "Rendering research category"
        );
        out.extend(category_grid(category, anchor, &visible, options));
    }

    out
}

fn category_grid(
    category: &Category,
    anchor: &CategoryAnchor,
    visible: &[&Project],
    options: &RenderOptions,
) -> Vec<Mutation> {
    if visible.is_empty() {
        return vec![Mutation::replace_children(anchor.grid, format!("{EMPTY}{SIZER}"))];
    }

    let mut cards: String = visible
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let priority = if index == 0 {
                LoadPriority::High
            } else {
                LoadPriority::Lazy
            };
            project_card(project, &category.id, index, priority, options)
        })
        .collect();
    cards.push_str(SIZER);

    let mut out = vec![
        Mutation::replace_children(anchor.grid, cards),
        Mutation::insert_after(anchor.grid, CLEAR),
    ];
    if category.id == FORCED_VISIBLE {
        out.push(Mutation::set_style(anchor.posts, "visibility", "visible"));
        out.push(Mutation::set_style(anchor.posts, "opacity", "1"));
    }
    out
}

/// Markup of one research card
#[must_use]
pub fn project_card(
    project: &Project,
    category: &str,
    index: usize,
    priority: LoadPriority,
    options: &RenderOptions,
) -> String {
    let display = &project.display;
    let metadata = project.metadata.as_ref();

    let link = present(display.link.as_ref())
        .map_or_else(|| project_link(&project.link_id()), str::to_string);
    let image = ImageCatalog::research().resolve(&display.image);
    let srcset = image.srcset();
    let tag = if category == FORCED_VISIBLE {
        "article"
    } else {
        "div"
    };

    let display_iso = normalize(&display.date);
    let published = metadata
        .and_then(|m| present(m.date_published.as_ref()))
        .map_or_else(|| display_iso.clone(), str::to_string);
    let modified = metadata
        .and_then(|m| present(m.date_modified.as_ref()))
        .map_or(display_iso, str::to_string);
    let author_url = metadata
        .and_then(|m| present(m.author_url.as_ref()))
        .unwrap_or(options.research_author_url.as_str());

    let responsive = if srcset.is_empty() {
        String::new()
    } else {
        format!(r#" srcset="{}" sizes="{}""#, escape(&srcset), image.sizes())
    };

    let title = escape(&display.title);
    let link = escape(&link);
    let post = post_id(category, index);

    format!(
        r#"<{tag} class="fl-post-grid-post fl-post-grid-image-above-title fl-post-align-default post-{post} {category} type-{category} status-publish has-post-thumbnail hentry masonry-brick" itemscope itemtype="https://schema.org/CreativeWork">
<meta itemscope itemprop="mainEntityOfPage" itemtype="https://schema.org/WebPage" itemid="{link}" content="{title}" />
<meta itemprop="datePublished" content="{published}" />
<meta itemprop="dateModified" content="{modified}" />
<div itemprop="publisher" itemscope itemtype="https://schema.org/Organization"><meta itemprop="name" content="{lab}"></div>
<div itemscope itemprop="author" itemtype="https://schema.org/Person"><meta itemprop="url" content="{author_url}" /><meta itemprop="name" content="{author}" /></div>
<div itemscope itemprop="image" itemtype="https://schema.org/ImageObject"><meta itemprop="url" content="{original}" /><meta itemprop="width" content="{original_width}" /><meta itemprop="height" content="{original_height}" /></div>
<div itemprop="interactionStatistic" itemscope itemtype="https://schema.org/InteractionCounter"><meta itemprop="interactionType" content="https://schema.org/CommentAction" /><meta itemprop="userInteractionCount" content="0" /></div>
<div class="fl-post-grid-image"><a href="{link}" rel="bookmark" title="{title}"><img {loading} decoding="async" width="{thumb_width}" height="{thumb_height}" src="{src}" class="attachment-medium size-medium wp-post-image" alt=""{responsive} /></a></div>
<div class="fl-post-grid-text">
<h2 class="fl-post-grid-title" itemprop="headline"><a href="{link}" title="{title}">{title}</a></h2>
<div class="fl-post-grid-meta"><span class="fl-post-grid-date">{date}</span></div>
<div class="fl-post-grid-content"><p>{authors}</p></div>
</div>
</{tag}>"#,
        published = escape(&published),
        modified = escape(&modified),
        lab = escape(&options.lab_name),
        author_url = escape(author_url),
        author = escape(&first_author(&display.authors)),
        original = escape(&image.original_path),
        original_width = image.original_width,
        original_height = image.original_height,
        loading = priority.attribute(),
        thumb_width = image.thumbnail_width,
        thumb_height = image.thumbnail_height,
        src = escape(&display.image),
        date = escape(&display.date),
        authors = escape(&display.authors),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_content::model::{ProjectDisplay, ProjectMetadata};

    fn project(title: &str, image: &str) -> Project {
        Project {
            id: None,
            visible: None,
            display: ProjectDisplay {
                title: title.to_string(),
                date: "March 3, 2021".to_string(),
                authors: "Authors: Jane Doe, John Roe".to_string(),
                image: image.to_string(),
                link: None,
            },
            metadata: None,
            details: None,
        }
    }

    #[test]
    fn post_ids_from_table_then_fallback() {
        assert_eq!(post_id("machine_learning", 0), 127);
        assert_eq!(post_id("machine_learning", 7), 106);
        assert_eq!(post_id("machine_learning", 8), 108);
        assert_eq!(post_id("blockchain", 0), 100);
        assert_eq!(post_id("unknown", 3), 103);
    }

    #[test]
    fn card_links_to_detail_page_by_slug() {
        let card = project_card(
            &project("Alpha Project", "img/x.png"),
            "finance",
            0,
            LoadPriority::High,
            &RenderOptions::default(),
        );

        assert!(card.starts_with("<div class=\"fl-post-grid-post"));
        assert!(card.contains(r#"href="projects/project.html?id=alpha-project""#));
        assert!(card.contains(r#"fetchpriority="high""#));
        assert!(card.contains(r#"post-118 finance type-finance"#));
        assert!(card.contains(r#"<meta itemprop="name" content="Jane Doe" />"#));
        assert!(card.contains(r#"content="2021-03-03""#));
        assert!(card.contains("https://coerisklab.wpengine.com/?author=7"));
    }

    #[test]
    fn card_uses_catalogue_dimensions() {
        let card = project_card(
            &project("Pg", "img/pgdot-300x224.png"),
            "machine_learning",
            1,
            LoadPriority::Lazy,
            &RenderOptions::default(),
        );

        assert!(card.starts_with("<article "));
        assert!(card.ends_with("</article>"));
        assert!(card.contains(r#"loading="lazy""#));
        assert!(card.contains(r#"width="300" height="224""#));
        assert!(card.contains(r#"<meta itemprop="width" content="800" />"#));
        assert!(card.contains(r#"<meta itemprop="url" content="img/pgdot.png" />"#));
        assert!(card.contains(r#"sizes="auto, (max-width: 300px) 100vw, 300px""#));
    }

    #[test]
    fn uncatalogued_image_has_no_srcset() {
        let card = project_card(
            &project("X", "img/photo.png"),
            "health",
            0,
            LoadPriority::High,
            &RenderOptions::default(),
        );
        assert!(!card.contains("srcset"));
        assert!(card.contains(r#"width="300" height="200""#));
    }

    #[test]
    fn metadata_and_explicit_link_win() {
        let mut p = project("Beta", "img/x.png");
        p.display.link = Some("https://example.org/beta".to_string());
        p.metadata = Some(ProjectMetadata {
            date_published: Some("2019-01-01".to_string()),
            date_modified: None,
            author_url: Some("https://example.org/jane".to_string()),
        });

        let card = project_card(&p, "finance", 0, LoadPriority::High, &RenderOptions::default());
        assert!(card.contains(r#"itemid="https://example.org/beta""#));
        assert!(card.contains(r#"<meta itemprop="datePublished" content="2019-01-01" />"#));
        assert!(card.contains(r#"<meta itemprop="dateModified" content="2021-03-03" />"#));
        assert!(card.contains(r#"content="https://example.org/jane""#));
    }

    #[test]
    fn titles_are_escaped() {
        let card = project_card(
            &project("A <b> & \"c\"", "img/x.png"),
            "finance",
            0,
            LoadPriority::High,
            &RenderOptions::default(),
        );
        assert!(card.contains("A &lt;b&gt; &amp; &quot;c&quot;"));
        assert!(!card.contains("<b>"));
    }
}
