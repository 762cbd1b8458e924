//! Site configuration
//!
//! Loaded from an optional TOML file; every field has a default matching
//! the deployed site, so an empty file is a valid configuration.

use crate::error::ConfigError;
use lab_render::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Locations of the content documents, relative to the site root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    /// Research projects
    pub research: String,
    /// News articles
    pub news: String,
    /// People
    pub people: String,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            research: "data/research.json".to_string(),
            news: "data/news.json".to_string(),
            people: "data/people.json".to_string(),
        }
    }
}

/// Site configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Publisher name in page titles
    pub lab_name: String,
    /// Document locations
    pub data: DataPaths,
    /// Grid width of the people page
    pub columns: usize,
    /// News card excerpt length in characters
    pub excerpt_chars: usize,
    /// Author profile linked from news
    pub news_author_url: String,
    /// Author profile used by research cards without metadata
    pub research_author_url: String,
    /// Prefix for asset paths on detail pages, which live one level down
    pub detail_asset_prefix: String,
    /// Layout scripts appended to the research page, in load order
    pub research_scripts: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let render = RenderOptions::default();
        Self {
            lab_name: render.lab_name,
            data: DataPaths::default(),
            columns: render.columns,
            excerpt_chars: render.excerpt_chars,
            news_author_url: render.news_author_url,
            research_author_url: render.research_author_url,
            detail_asset_prefix: "../".to_string(),
            research_scripts: [
                "js/jquery.imagesloaded.min.js",
                "js/masonry.min.js",
                "js/jquery/jquery.masonry.min.js",
                "js/2-layout.js",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl SiteConfig {
    /// Default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML and
    /// [`ConfigError::Invalid`] when values fail validation.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, otherwise
    /// as [`SiteConfig::from_toml`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Check values are usable
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::Invalid("columns must be at least 1".into()));
        }
        if self.lab_name.trim().is_empty() {
            return Err(ConfigError::Invalid("lab_name must not be empty".into()));
        }
        for (name, path) in [
            ("data.research", &self.data.research),
            ("data.news", &self.data.news),
            ("data.people", &self.data.people),
        ] {
            if path.is_empty() {
                return Err(ConfigError::Invalid(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }

    /// Set the lab name
    #[inline]
    #[must_use]
    pub fn with_lab_name(mut self, name: impl Into<String>) -> Self {
        self.lab_name = name.into();
        self
    }

    /// Set the document locations
    #[inline]
    #[must_use]
    pub fn with_data(mut self, data: DataPaths) -> Self {
        self.data = data;
        self
    }

    /// Set the research layout scripts
    #[inline]
    #[must_use]
    pub fn with_research_scripts(mut self, scripts: Vec<String>) -> Self {
        self.research_scripts = scripts;
        self
    }

    /// Render options stamped with the current time
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        self.render_options_at(chrono::Utc::now().timestamp_millis())
    }

    /// Render options stamped with `millis`
    #[must_use]
    pub fn render_options_at(&self, millis: i64) -> RenderOptions {
        RenderOptions {
            lab_name: self.lab_name.clone(),
            columns: self.columns,
            excerpt_chars: self.excerpt_chars,
            news_author_url: self.news_author_url.clone(),
            research_author_url: self.research_author_url.clone(),
            generated_at_millis: millis,
        }
    }
}
