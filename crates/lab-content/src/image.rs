//! Image metadata catalogue
//!
//! Thumbnail and avatar files follow the upload tool's naming scheme
//! (`name-300x181.png` next to `name.png`), but only the files listed here are
//! known to exist in each size. The catalogue is hand-maintained: a path is
//! matched against entry patterns by substring, first match wins, and the
//! entry decides original dimensions and responsive candidates. Paths that
//! match nothing get a guessed fallback size and no candidates.

use serde::Serialize;

/// How a candidate path is derived from the matched path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rewrite {
    /// Use the path as is
    Keep,
    /// Remove the first occurrence of a size suffix
    Strip(&'static str),
    /// Replace the first occurrence of a fragment
    Replace(&'static str, &'static str),
}

impl Rewrite {
    fn apply(self, path: &str) -> String {
        match self {
            Self::Keep => path.to_string(),
            Self::Strip(fragment) => path.replacen(fragment, "", 1),
            Self::Replace(from, to) => path.replacen(from, to, 1),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Variant {
    rewrite: Rewrite,
    width: u32,
}

const fn variant(rewrite: Rewrite, width: u32) -> Variant {
    Variant { rewrite, width }
}

/// One catalogue row
#[derive(Debug, Clone, Copy)]
struct Entry {
    pattern: &'static str,
    original: Rewrite,
    original_size: (u32, u32),
    thumbnail_size: (u32, u32),
    variants: &'static [Variant],
    dimensions_known: bool,
}

/// Responsive image candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Resource path
    pub path: String,
    /// Intrinsic width in pixels
    pub width: u32,
}

/// Resolved metadata for one image path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    /// Full-resolution path
    pub original_path: String,
    /// Full-resolution width
    pub original_width: u32,
    /// Full-resolution height
    pub original_height: u32,
    /// Width of the referenced (thumbnail) file
    pub thumbnail_width: u32,
    /// Height of the referenced (thumbnail) file
    pub thumbnail_height: u32,
    /// Responsive candidates, in `srcset` order
    pub candidates: Vec<Candidate>,
    catalogued: bool,
}

impl ImageInfo {
    /// Whether the dimensions come from a catalogue entry rather than a guess
    #[inline]
    #[must_use]
    pub fn is_catalogued(&self) -> bool {
        self.catalogued
    }

    /// `srcset` attribute value; empty when there are no candidates
    #[must_use]
    pub fn srcset(&self) -> String {
        self.candidates
            .iter()
            .map(|c| format!("{} {}w", c.path, c.width))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `sizes` attribute value sized to the thumbnail width
    #[must_use]
    pub fn sizes(&self) -> String {
        let w = self.thumbnail_width;
        format!("auto, (max-width: {w}px) 100vw, {w}px")
    }
}

/// Ordered, closed image catalogue
#[derive(Debug, Clone, Copy)]
pub struct ImageCatalog {
    entries: &'static [Entry],
    fallback: (u32, u32),
}

/// Size assumed for paths nobody catalogued
pub const FALLBACK_SIZE: (u32, u32) = (300, 200);

use Rewrite::{Keep, Replace, Strip};

const RESEARCH: &[Entry] = &[
    Entry {
        pattern: "sde-300x181",
        original: Strip("-300x181"),
        original_size: (360, 217),
        thumbnail_size: (300, 181),
        variants: &[variant(Keep, 300), variant(Strip("-300x181"), 360)],
        dimensions_known: true,
    },
    Entry {
        pattern: "pgdot-300x224",
        original: Strip("-300x224"),
        original_size: (800, 596),
        thumbnail_size: (300, 224),
        variants: &[
            variant(Keep, 300),
            variant(Replace("-300x224", "-768x572"), 768),
            variant(Strip("-300x224"), 800),
        ],
        dimensions_known: true,
    },
    Entry {
        pattern: "learning-mfc-300x171",
        original: Strip("-300x171"),
        original_size: (1758, 1002),
        thumbnail_size: (300, 171),
        variants: &[
            variant(Keep, 300),
            variant(Replace("-300x171", "-1024x584"), 1024),
            variant(Replace("-300x171", "-768x438"), 768),
            variant(Replace("-300x171", "-1536x875"), 1536),
            variant(Strip("-300x171"), 1758),
        ],
        dimensions_known: true,
    },
    Entry {
        pattern: "Gans-300x179",
        original: Strip("-300x179"),
        original_size: (2014, 1202),
        thumbnail_size: (300, 179),
        variants: &[
            variant(Keep, 300),
            variant(Replace("-300x179", "-1024x611"), 1024),
            variant(Replace("-300x179", "-768x458"), 768),
            variant(Replace("-300x179", "-1536x917"), 1536),
            variant(Strip("-300x179"), 2014),
        ],
        dimensions_known: true,
    },
    Entry {
        pattern: "hpam-300x169",
        original: Strip("-300x169"),
        original_size: (1280, 720),
        thumbnail_size: (300, 169),
        variants: &[
            variant(Keep, 300),
            variant(Replace("-300x169", "-1024x576"), 1024),
            variant(Replace("-300x169", "-768x432"), 768),
            variant(Strip("-300x169"), 1280),
        ],
        dimensions_known: true,
    },
    Entry {
        pattern: "lmfg_figure-300x143",
        original: Strip("-300x143"),
        original_size: (14851, 7067),
        thumbnail_size: (300, 143),
        variants: &[variant(Keep, 300)],
        dimensions_known: true,
    },
    Entry {
        pattern: "mhp_mle_figure-300x117",
        original: Strip("-300x117"),
        original_size: (15465, 6043),
        thumbnail_size: (300, 117),
        variants: &[variant(Keep, 300)],
        dimensions_known: true,
    },
    Entry {
        pattern: "nan-rwgan-300x136",
        original: Strip("-300x136"),
        original_size: (2279, 1036),
        thumbnail_size: (300, 136),
        variants: &[
            variant(Keep, 300),
            variant(Replace("-300x136", "-768x349"), 768),
            variant(Replace("-300x136", "-1024x465"), 1024),
        ],
        dimensions_known: true,
    },
    Entry {
        pattern: "par-inv-300x169",
        original: Strip("-300x169"),
        original_size: (800, 450),
        thumbnail_size: (300, 169),
        variants: &[variant(Keep, 300)],
        dimensions_known: true,
    },
    Entry {
        pattern: "imp-grph.jpg",
        original: Keep,
        original_size: (14292, 6031),
        thumbnail_size: (300, 127),
        variants: &[],
        dimensions_known: true,
    },
    Entry {
        pattern: "fintech_book-198x300",
        original: Strip("-198x300"),
        original_size: (330, 499),
        thumbnail_size: (198, 300),
        variants: &[variant(Keep, 198), variant(Strip("-198x300"), 330)],
        dimensions_known: true,
    },
    Entry {
        pattern: "SVM_lung_cancer-300x225",
        original: Strip("-300x225"),
        original_size: (960, 720),
        thumbnail_size: (300, 225),
        variants: &[
            variant(Keep, 300),
            variant(Replace("-300x225", "-768x576"), 768),
            variant(Strip("-300x225"), 960),
        ],
        dimensions_known: true,
    },
    Entry {
        pattern: "DR-300x225",
        original: Strip("-300x225"),
        original_size: (960, 720),
        thumbnail_size: (300, 225),
        variants: &[
            variant(Keep, 300),
            variant(Replace("-300x225", "-768x576"), 768),
            variant(Strip("-300x225"), 960),
        ],
        dimensions_known: true,
    },
    // Any other 300px-wide upload: the thumbnail itself is the only size we know.
    Entry {
        pattern: "-300x",
        original: Keep,
        original_size: FALLBACK_SIZE,
        thumbnail_size: FALLBACK_SIZE,
        variants: &[variant(Keep, 300)],
        dimensions_known: false,
    },
];

const PEOPLE: &[Entry] = &[
    Entry {
        pattern: "anran_avatar.png",
        original: Keep,
        original_size: (922, 1153),
        thumbnail_size: (922, 1153),
        variants: &[
            variant(Keep, 922),
            variant(Replace(".png", "-768x960.png"), 768),
        ],
        dimensions_known: true,
    },
    Entry {
        pattern: "joon_avatar.jpg",
        original: Keep,
        original_size: (922, 1153),
        thumbnail_size: (922, 1153),
        variants: &[
            variant(Keep, 922),
            variant(Replace(".jpg", "-768x960.jpg"), 768),
        ],
        dimensions_known: true,
    },
    Entry {
        pattern: "renyuan_avatar-1.png",
        original: Keep,
        original_size: (922, 1149),
        thumbnail_size: (922, 1149),
        variants: &[
            variant(Keep, 922),
            variant(Replace(".png", "-768x957.png"), 768),
        ],
        dimensions_known: true,
    },
    Entry {
        pattern: "chengju.jpg",
        original: Keep,
        original_size: (922, 1097),
        thumbnail_size: (922, 1097),
        variants: &[
            variant(Keep, 922),
            variant(Replace(".jpg", "-768x914.jpg"), 768),
        ],
        dimensions_known: true,
    },
    Entry {
        pattern: "wenpin.jpg",
        original: Keep,
        original_size: (922, 692),
        thumbnail_size: (922, 692),
        variants: &[
            variant(Keep, 922),
            variant(Replace(".jpg", "-768x576.jpg"), 768),
        ],
        dimensions_known: true,
    },
    Entry {
        pattern: "xiaoli.jpg",
        original: Keep,
        original_size: (922, 1229),
        thumbnail_size: (922, 1229),
        variants: &[
            variant(Keep, 922),
            variant(Replace(".jpg", "-768x1024.jpg"), 768),
        ],
        dimensions_known: true,
    },
];

impl ImageCatalog {
    /// Research thumbnails (listing cards and project pages)
    #[inline]
    #[must_use]
    pub const fn research() -> Self {
        Self {
            entries: RESEARCH,
            fallback: FALLBACK_SIZE,
        }
    }

    /// People page avatars
    #[inline]
    #[must_use]
    pub const fn people() -> Self {
        Self {
            entries: PEOPLE,
            fallback: FALLBACK_SIZE,
        }
    }

    /// Number of catalogue rows
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalogue has no rows
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve metadata for an image path
    #[must_use]
    pub fn resolve(&self, path: &str) -> ImageInfo {
        match self.entries.iter().find(|e| path.contains(e.pattern)) {
            Some(entry) => ImageInfo {
                original_path: entry.original.apply(path),
                original_width: entry.original_size.0,
                original_height: entry.original_size.1,
                thumbnail_width: entry.thumbnail_size.0,
                thumbnail_height: entry.thumbnail_size.1,
                candidates: entry
                    .variants
                    .iter()
                    .map(|v| Candidate {
                        path: v.rewrite.apply(path),
                        width: v.width,
                    })
                    .collect(),
                catalogued: entry.dimensions_known,
            },
            None => ImageInfo {
                original_path: path.to_string(),
                original_width: self.fallback.0,
                original_height: self.fallback.1,
                thumbnail_width: self.fallback.0,
                thumbnail_height: self.fallback.1,
                candidates: Vec::new(),
                catalogued: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn thumbnail_resolves_original() {
        let info = ImageCatalog::research().resolve("images/pgdot-300x224.png");
        assert_eq!(info.original_path, "images/pgdot.png");
        assert_eq!((info.original_width, info.original_height), (800, 596));
        assert_eq!((info.thumbnail_width, info.thumbnail_height), (300, 224));
        assert!(info.is_catalogued());
        assert_eq!(
            info.srcset(),
            "images/pgdot-300x224.png 300w, images/pgdot-768x572.png 768w, images/pgdot.png 800w"
        );
    }

    #[test]
    fn portrait_thumbnail_sizes() {
        let info = ImageCatalog::research().resolve("img/fintech_book-198x300.jpg");
        assert_eq!(info.original_path, "img/fintech_book.jpg");
        assert_eq!(info.sizes(), "auto, (max-width: 198px) 100vw, 198px");
        assert_eq!(
            info.srcset(),
            "img/fintech_book-198x300.jpg 198w, img/fintech_book.jpg 330w"
        );
    }

    #[test]
    fn original_without_size_suffix() {
        let info = ImageCatalog::research().resolve("img/imp-grph.jpg");
        assert_eq!(info.original_path, "img/imp-grph.jpg");
        assert_eq!(info.thumbnail_height, 127);
        assert!(info.candidates.is_empty());
        assert_eq!(info.srcset(), "");
    }

    #[test]
    fn generic_thumbnail_offers_itself() {
        let info = ImageCatalog::research().resolve("img/new-figure-300x200.png");
        assert!(!info.is_catalogued());
        assert_eq!(info.srcset(), "img/new-figure-300x200.png 300w");
        assert_eq!(info.original_path, "img/new-figure-300x200.png");
    }

    #[test]
    fn unknown_path_falls_back() {
        let info = ImageCatalog::research().resolve("img/unknown.png");
        assert_eq!(info.original_path, "img/unknown.png");
        assert_eq!((info.original_width, info.original_height), FALLBACK_SIZE);
        assert_eq!((info.thumbnail_width, info.thumbnail_height), FALLBACK_SIZE);
        assert!(info.candidates.is_empty());
        assert!(!info.is_catalogued());
        assert_eq!(info.sizes(), "auto, (max-width: 300px) 100vw, 300px");
    }

    #[test]
    fn first_match_wins() {
        // Both "DR-300x225" and the generic "-300x" match; the specific row is earlier.
        let info = ImageCatalog::research().resolve("x/DR-300x225.png");
        assert_eq!(info.original_width, 960);
        assert_eq!(info.candidates.len(), 3);
    }

    #[test]
    fn avatar_candidates() {
        let info = ImageCatalog::people().resolve("people/chengju.jpg");
        assert_eq!(
            info.srcset(),
            "people/chengju.jpg 922w, people/chengju-768x914.jpg 768w"
        );

        let unknown = ImageCatalog::people().resolve("people/someone.jpg");
        assert!(unknown.candidates.is_empty());
    }
}
