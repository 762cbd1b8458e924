//! People page projection
//!
//! Six sections, each with its own builder nodes, photo frame size and
//! padding rule. The photo sections are described by [`PhotoSection`] rows;
//! the past visitors list is plain list items.

use crate::html::escape;
use crate::mutation::Mutation;
use crate::options::RenderOptions;
use crate::selectors::{people, Selector};
use lab_content::grid::{layout, single_row, wrapped_rows, Group, LoadPriority, Slot};
use lab_content::image::ImageCatalog;
use lab_content::model::{present, visible, PeopleDocument, Person, Visitor};
use tracing::debug;

/// Displayed `<img>` size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    width: u32,
    height: u32,
    /// Whether `srcset`/`sizes` are rendered when the catalogue has candidates
    responsive: bool,
}

const fn frame(width: u32, height: u32, responsive: bool) -> Frame {
    Frame {
        width,
        height,
        responsive,
    }
}

/// How a section pads its cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Padding {
    /// One container padded to a multiple of the column count
    Wrapped,
    /// One container padded up to the column count
    Row,
    /// Two containers, see [`layout`]
    TwoGroups {
        second: Selector,
        eager_first: bool,
    },
}

/// Static description of a photo section
#[derive(Debug, Clone, Copy)]
struct PhotoSection {
    name: &'static str,
    container: Selector,
    column_node: &'static str,
    module_node: &'static str,
    placeholder_node: &'static str,
    image_kind: &'static str,
    linked: Frame,
    unlinked: Frame,
    sizes: &'static str,
    padding: Padding,
}

const LEADING_FACULTY: PhotoSection = PhotoSection {
    name: "leading faculty",
    container: people::LEADING_FACULTY,
    column_node: "5ca6426b8362a",
    module_node: "5ca64434113dc",
    placeholder_node: "5ca642924006f",
    image_kind: "png",
    linked: frame(160, 210, false),
    unlinked: frame(160, 210, false),
    sizes: "",
    padding: Padding::Wrapped,
};

const CURRENT_PHD: PhotoSection = PhotoSection {
    name: "current PhD students",
    container: people::CURRENT_PHD_FIRST,
    column_node: "5ca6426b8362a",
    module_node: "5ca64434113dc",
    placeholder_node: "5ca642924006f",
    image_kind: "png",
    linked: frame(922, 1146, true),
    unlinked: frame(922, 1146, true),
    sizes: "(max-width: 922px) 100vw, 922px",
    padding: Padding::TwoGroups {
        second: people::CURRENT_PHD_SECOND,
        eager_first: true,
    },
};

const CURRENT_POSTDOCS: PhotoSection = PhotoSection {
    name: "current postdocs",
    container: people::CURRENT_POSTDOCS,
    column_node: "5ca645e27d800",
    module_node: "5d6d8e1b522f7",
    placeholder_node: "5ca645e27d80c",
    image_kind: "jpg",
    linked: frame(2048, 1536, true),
    unlinked: frame(3456, 4608, true),
    sizes: "auto, (max-width: 2048px) 100vw, 2048px",
    padding: Padding::Row,
};

const PAST_PHD: PhotoSection = PhotoSection {
    name: "past PhD students",
    container: people::PAST_PHD_FIRST,
    column_node: "5ca646bd7482b",
    module_node: "5ca646dfded30",
    placeholder_node: "5ca648c1e6a9f",
    image_kind: "jpg",
    linked: frame(788, 982, true),
    unlinked: frame(160, 200, false),
    sizes: "auto, (max-width: 788px) 100vw, 788px",
    padding: Padding::TwoGroups {
        second: people::PAST_PHD_SECOND,
        eager_first: false,
    },
};

const PAST_POSTDOCS: PhotoSection = PhotoSection {
    name: "past postdocs",
    container: people::PAST_POSTDOCS,
    column_node: "5da4b42b5b089",
    module_node: "5da4b436a3688",
    placeholder_node: "5da4b42b5b08f",
    image_kind: "png",
    linked: frame(160, 200, false),
    unlinked: frame(160, 200, false),
    sizes: "",
    padding: Padding::Row,
};

/// Numeric id the theme puts in `wp-image-N` classes
///
/// 32-bit string hash over UTF-16 code units (`h = h * 31 + c`, wrapping),
/// absolute value.
#[must_use]
pub fn wp_image_id(path: &str) -> i64 {
    let hash = path.encode_utf16().fold(0i32, |h, unit| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
    });
    i64::from(hash).abs()
}

/// Mutations for the people page
///
/// Empty sections produce nothing; their containers keep the exported markup.
#[must_use]
pub fn people_page(doc: &PeopleDocument, options: &RenderOptions) -> Vec<Mutation> {
    let mut out = Vec::new();
    photo_section(&LEADING_FACULTY, &doc.leading_faculty, options, &mut out);
    photo_section(&CURRENT_PHD, &doc.current_phd_students, options, &mut out);
    photo_section(&CURRENT_POSTDOCS, &doc.current_postdocs, options, &mut out);
    photo_section(&PAST_PHD, &doc.past_phd_students, options, &mut out);
    photo_section(&PAST_POSTDOCS, &doc.past_postdocs, options, &mut out);

    if !doc.past_visitors.is_empty() {
        let items: String = doc.past_visitors.iter().map(visitor_item).collect();
        out.push(Mutation::set_html(people::PAST_VISITORS, items));
        debug!(count = doc.past_visitors.len(), "Rendered past visitors");
    }
    out
}

fn photo_section(
    section: &PhotoSection,
    members: &[Person],
    options: &RenderOptions,
    out: &mut Vec<Mutation>,
) {
    let members = visible(members);
    if members.is_empty() {
        return;
    }
    debug!(section = section.name, count = members.len(), "Rendering people section");

    match section.padding {
        Padding::Wrapped => {
            let group = wrapped_rows(&members, options.columns);
            out.push(Mutation::set_html(section.container, render_group(section, &group, false)));
        }
        Padding::Row => {
            let group = single_row(&members, options.columns);
            out.push(Mutation::set_html(section.container, render_group(section, &group, false)));
        }
        Padding::TwoGroups {
            second,
            eager_first,
        } => {
            let groups = layout(&members, options.columns);
            let mut groups = groups.iter();
            if let Some(first) = groups.next() {
                out.push(Mutation::set_html(
                    section.container,
                    render_group(section, first, eager_first),
                ));
            }
            let rest = groups
                .next()
                .map(|g| render_group(section, g, false))
                .unwrap_or_default();
            out.push(Mutation::set_html(second, rest));
        }
    }
}

fn render_group(section: &PhotoSection, group: &Group<'_, Person>, eager: bool) -> String {
    group
        .slots()
        .iter()
        .map(|slot| match slot {
            Slot::Filled { item, priority } => {
                let priority = if eager {
                    *priority
                } else {
                    LoadPriority::Lazy
                };
                photo_card(section, item, priority)
            }
            Slot::Placeholder => placeholder(section.placeholder_node),
        })
        .collect()
}

fn placeholder(node: &str) -> String {
    format!(
        r#"<div class="fl-col fl-node-{node} fl-col-bg-color fl-col-small" data-node="{node}"><div class="fl-col-content fl-node-content"></div></div>"#
    )
}

fn photo_card(section: &PhotoSection, person: &Person, priority: LoadPriority) -> String {
    let link = present(person.link.as_ref());
    let frame = if link.is_some() {
        section.linked
    } else {
        section.unlinked
    };

    let mut responsive = String::new();
    if frame.responsive {
        let info = ImageCatalog::people().resolve(&person.image);
        if !info.candidates.is_empty() {
            responsive = format!(
                r#" srcset="{}" sizes="{}""#,
                escape(&info.srcset()),
                section.sizes
            );
        }
    }

    let name = escape(&person.name);
    let img = format!(
        r#"<img {loading} decoding="async" width="{width}" height="{height}" class="fl-photo-img wp-image-{id}" src="{src}" alt="{name}" itemprop="image" title="{name}"{responsive}>"#,
        loading = priority.attribute(),
        width = frame.width,
        height = frame.height,
        id = wp_image_id(&person.image),
        src = escape(&person.image),
    );
    let photo = match link {
        Some(href) => format!(
            r#"<a href="{}" target="_blank" rel="noopener" itemprop="url">{img}</a>"#,
            escape(href)
        ),
        None => img,
    };

    format!(
        r#"<div class="fl-col fl-node-{col} fl-col-bg-color fl-col-small" data-node="{col}"><div class="fl-col-content fl-node-content"><div class="fl-module fl-module-photo fl-node-{module}" data-node="{module}"><div class="fl-module-content fl-node-content"><div class="fl-photo fl-photo-align-center" itemscope="" itemtype="https://schema.org/ImageObject"><div class="fl-photo-content fl-photo-img-{kind}">{photo}</div><div class="fl-photo-caption fl-photo-caption-below" itemprop="caption">{name}</div></div></div></div></div></div>"#,
        col = section.column_node,
        module = section.module_node,
        kind = section.image_kind,
    )
}

fn visitor_item(visitor: &Visitor) -> String {
    let name = escape(&visitor.name);
    match present(visitor.link.as_ref()) {
        Some(link) => format!(
            r#"<li><strong><a href="{}" target="{}" xlink="href">{name}</a></strong></li>"#,
            escape(link),
            escape(present(visitor.link_target.as_ref()).unwrap_or("_new")),
        ),
        None => format!("<li><strong>{name}</strong></li>"),
    }
}
