//! News listing projection

use crate::html::escape;
use crate::mutation::Mutation;
use crate::options::RenderOptions;
use crate::selectors::news;
use lab_content::body::excerpt;
use lab_content::date::normalize;
use lab_content::model::{present, visible, Article, NewsDocument};
use lab_content::slug::{news_link, Identified};
use tracing::debug;

/// Heading of the news section
pub const SECTION_TITLE: &str = "News and Featured Events";

/// Fixed card height; the masonry layout is not run on this page
const CARD_HEIGHT: &str = "222px";

/// Mutations for the news section
#[must_use]
pub fn news_listing(doc: &NewsDocument, options: &RenderOptions) -> Vec<Mutation> {
    let mut out = vec![Mutation::set_text(news::HEADING, SECTION_TITLE)];

    let articles = visible(&doc.articles);
    debug!(
        visible = articles.len(),
        total = doc.articles.len(),
        "Rendering news section"
    );
    if articles.is_empty() {
        out.push(Mutation::replace_children(news::GRID, ""));
        return out;
    }

    let cards: String = articles
        .iter()
        .enumerate()
        .map(|(index, article)| article_card(article, index, options))
        .collect();

    out.push(Mutation::replace_children(news::GRID, cards));
    out.push(Mutation::set_style(news::POSTS, "visibility", "visible"));
    out.push(Mutation::set_style(news::POSTS, "opacity", "1"));
    out.push(Mutation::set_style(news::POSTS, "height", CARD_HEIGHT));
    out
}

/// Markup of one news card
#[must_use]
pub fn article_card(article: &Article, index: usize, options: &RenderOptions) -> String {
    let post = format!("news-{}-{index}", options.generated_at_millis);
    let link = escape(&news_link(&article.link_id()));
    let title = escape(&article.title);
    let iso = escape(&normalize(&article.date));
    let summary = excerpt(article.content.as_deref().unwrap_or_default(), options.excerpt_chars);
    let author_url = escape(&options.news_author_url);

    let (author_meta, author_line) = match present(article.author.as_ref()) {
        Some(author) => {
            let author = escape(author);
            (
                format!(
                    r#"<div itemscope itemprop="author" itemtype="https://schema.org/Person"><meta itemprop="url" content="{author_url}" /><meta itemprop="name" content="{author}" /></div>"#
                ),
                format!(
                    r#"<span class="fl-post-grid-author">By <a href="{author_url}"><span>{author}</span></a></span><span class="fl-sep"> | </span>"#
                ),
            )
        }
        None => (String::new(), String::new()),
    };

    format!(
        r#"<div class="fl-post-column">
<div class="fl-post-grid-post fl-post-align-default post-{post} post type-post status-publish format-standard hentry category-research" itemscope itemtype="https://schema.org/BlogPosting">
<meta itemscope itemprop="mainEntityOfPage" itemtype="https://schema.org/WebPage" itemid="{link}" content="{title}" />
<meta itemprop="datePublished" content="{iso}" />
<meta itemprop="dateModified" content="{iso}" />
<div itemprop="publisher" itemscope itemtype="https://schema.org/Organization"><meta itemprop="name" content="{lab}"></div>
{author_meta}
<div class="fl-post-grid-text">
<h2 class="fl-post-grid-title" itemprop="headline"><a href="{link}" title="{title}" rel="bookmark" itemprop="url">{title}</a></h2>
<div class="fl-post-grid-meta">{author_line}<span class="fl-post-grid-date">{date}</span></div>
<div class="fl-post-grid-content" itemprop="text"><p>{summary}</p></div>
</div>
</div>
</div>"#,
        lab = escape(&options.lab_name),
        date = escape(&article.date),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, author: Option<&str>, content: &str) -> Article {
        Article {
            title: title.to_string(),
            date: "March 3, 2021".to_string(),
            author: author.map(str::to_string),
            content: Some(content.to_string()),
            ..Article::default()
        }
    }

    #[test]
    fn card_without_author_has_no_author_block() {
        let card = article_card(
            &article("Lab Wins Award", None, "<p>Body</p>"),
            2,
            &RenderOptions::default().with_generated_at(1_700_000_000_000),
        );

        assert!(card.contains("post-news-1700000000000-2"));
        assert!(card.contains(r#"href="news/news.html?id=lab-wins-award""#));
        assert!(card.contains(r#"content="2021-03-03""#));
        assert!(card.contains("<p>Body</p>"));
        assert!(!card.contains("fl-post-grid-author"));
        assert!(!card.contains("schema.org/Person"));
    }

    #[test]
    fn card_with_author() {
        let card = article_card(
            &article("T", Some("Jane"), "x"),
            0,
            &RenderOptions::default(),
        );
        assert!(card.contains("By <a href=\"https://coerisklab.wpengine.com/?author=6\"><span>Jane</span></a>"));
        assert!(card.contains(r#"<meta itemprop="name" content="Jane" />"#));
    }

    #[test]
    fn excerpt_is_truncated() {
        let long = "a".repeat(200);
        let card = article_card(&article("T", None, &long), 0, &RenderOptions::default());
        assert!(card.contains(&format!("<p>{}...</p>", "a".repeat(150))));
    }

    #[test]
    fn hidden_articles_are_not_rendered() {
        let mut hidden = article("Hidden", None, "x");
        hidden.visible = Some(false);
        let doc = NewsDocument {
            articles: vec![hidden],
        };

        let mutations = news_listing(&doc, &RenderOptions::default());
        assert_eq!(
            mutations,
            vec![
                Mutation::set_text(news::HEADING, SECTION_TITLE),
                Mutation::replace_children(news::GRID, ""),
            ]
        );
    }

    #[test]
    fn cards_are_forced_visible() {
        let doc = NewsDocument {
            articles: vec![article("A", None, "x"), article("B", None, "y")],
        };

        let mutations = news_listing(&doc, &RenderOptions::default());
        assert_eq!(mutations.len(), 5);
        assert_eq!(
            mutations[4],
            Mutation::set_style(news::POSTS, "height", "222px")
        );
    }
}
