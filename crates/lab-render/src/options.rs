//! Render options

use lab_content::grid::DEFAULT_COLUMNS;

/// Site-wide values the templates need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Publisher name in page titles and schema.org metadata
    pub lab_name: String,
    /// Grid width of the people page
    pub columns: usize,
    /// News card excerpt length in characters
    pub excerpt_chars: usize,
    /// Author profile linked from news cards and articles
    pub news_author_url: String,
    /// Author profile used by research cards without metadata
    pub research_author_url: String,
    /// Timestamp embedded in generated news post ids
    pub generated_at_millis: i64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            lab_name: "RADAResearch Lab".to_string(),
            columns: DEFAULT_COLUMNS,
            excerpt_chars: 150,
            news_author_url: "https://coerisklab.wpengine.com/?author=6".to_string(),
            research_author_url: "https://coerisklab.wpengine.com/?author=7".to_string(),
            generated_at_millis: 0,
        }
    }
}

impl RenderOptions {
    /// Default options
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lab name
    #[inline]
    #[must_use]
    pub fn with_lab_name(mut self, name: impl Into<String>) -> Self {
        self.lab_name = name.into();
        self
    }

    /// Set the grid width
    #[inline]
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Set the news excerpt length
    #[inline]
    #[must_use]
    pub fn with_excerpt_chars(mut self, chars: usize) -> Self {
        self.excerpt_chars = chars;
        self
    }

    /// Set the generation timestamp
    #[inline]
    #[must_use]
    pub fn with_generated_at(mut self, millis: i64) -> Self {
        self.generated_at_millis = millis;
        self
    }
}
