//! Listing page controllers
//!
//! Listing pages have no error region: a document that fails to load is
//! logged and the page keeps its static content.

use crate::config::DataPaths;
use crate::error::SiteResult;
use crate::scripts::{ScriptLoader, ScriptPipeline, ScriptReport};
use crate::source::{load_document, DocumentSource};
use lab_content::model::{NewsDocument, PeopleDocument, ResearchDocument};
use lab_render::{news_listing, people_page, research_listing, PageSurface, RenderOptions};
use serde::Serialize;
use tracing::{error, info};

/// What a listing run did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListingReport {
    /// Commands applied for the content
    pub mutations: usize,
    /// Layout scripts, research page only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scripts: Option<ScriptReport>,
}

/// Renders the listing pages from one source
#[derive(Debug, Clone)]
pub struct ListingController<S> {
    source: S,
    paths: DataPaths,
    options: RenderOptions,
}

impl<S: DocumentSource> ListingController<S> {
    /// Controller reading `paths` from `source`
    pub fn new(source: S, paths: DataPaths, options: RenderOptions) -> Self {
        Self {
            source,
            paths,
            options,
        }
    }

    /// Research page, then its layout scripts
    ///
    /// # Errors
    ///
    /// Returns the load error when the document cannot be read; nothing is
    /// applied and no script is appended in that case.
    pub async fn research<L, P>(
        &self,
        pipeline: &ScriptPipeline,
        loader: &L,
        surface: &mut P,
    ) -> SiteResult<ListingReport>
    where
        L: ScriptLoader + ?Sized,
        P: PageSurface,
    {
        let doc: ResearchDocument = self.load(&self.paths.research).await?;
        let mutations = research_listing(&doc, &self.options);
        let count = mutations.len();
        surface.apply_all(mutations);
        info!(categories = doc.categories.len(), mutations = count, "Research page rendered");

        let scripts = pipeline.run(loader, surface).await;
        Ok(ListingReport {
            mutations: count,
            scripts: Some(scripts),
        })
    }

    /// News listing page
    ///
    /// # Errors
    ///
    /// Returns the load error when the document cannot be read.
    pub async fn news<P: PageSurface>(&self, surface: &mut P) -> SiteResult<ListingReport> {
        let doc: NewsDocument = self.load(&self.paths.news).await?;
        let mutations = news_listing(&doc, &self.options);
        let count = mutations.len();
        surface.apply_all(mutations);
        info!(articles = doc.articles.len(), mutations = count, "News page rendered");
        Ok(ListingReport {
            mutations: count,
            scripts: None,
        })
    }

    /// People page
    ///
    /// # Errors
    ///
    /// Returns the load error when the document cannot be read.
    pub async fn people<P: PageSurface>(&self, surface: &mut P) -> SiteResult<ListingReport> {
        let doc: PeopleDocument = self.load(&self.paths.people).await?;
        let mutations = people_page(&doc, &self.options);
        let count = mutations.len();
        surface.apply_all(mutations);
        info!(mutations = count, "People page rendered");
        Ok(ListingReport {
            mutations: count,
            scripts: None,
        })
    }

    async fn load<T: serde::de::DeserializeOwned>(&self, path: &str) -> SiteResult<T> {
        load_document(&self.source, path).await.map_err(|e| {
            error!(path, error = %e, "Error loading content data");
            e.into()
        })
    }
}
