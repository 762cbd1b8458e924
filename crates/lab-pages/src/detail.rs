//! Detail page controllers
//!
//! Flow for both detail pages: read the id from the address, load the
//! document, resolve the record by explicit id then slug, check it carries
//! its detail payload, project it. Any failure leaves the page in the
//! error state with a message naming what went wrong.

use crate::address::PageAddress;
use crate::error::{PageError, PageKind, SiteResult};
use crate::source::{load_document, DocumentSource};
use crate::state::{PageLifecycle, PageState};
use lab_content::model::{NewsDocument, ResearchDocument};
use lab_content::slug::resolve;
use lab_render::{
    error_state, news_detail, project_detail, ready_state, DetailContext, Mutation, PageSurface,
    RenderOptions,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info};

/// One flavour of detail page
pub trait DetailPage: Send + Sync {
    /// Document the page reads
    type Document: DeserializeOwned + Send;

    /// Message wording
    fn kind(&self) -> PageKind;

    /// Site-relative document location
    fn data_path(&self) -> &str;

    /// Resolve `id` and project the record's slots
    ///
    /// # Errors
    ///
    /// [`PageError::NotFound`] when no record matches and
    /// [`PageError::NoContent`] when the record lacks its detail payload.
    fn project(
        &self,
        document: &Self::Document,
        id: &str,
        ctx: &DetailContext<'_>,
        options: &RenderOptions,
    ) -> Result<Vec<Mutation>, PageError>;
}

/// `projects/project.html`
#[derive(Debug, Clone)]
pub struct ProjectPage {
    data_path: String,
}

impl ProjectPage {
    /// Page reading research projects from `data_path`
    pub fn new(data_path: impl Into<String>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }
}

impl DetailPage for ProjectPage {
    type Document = ResearchDocument;

    fn kind(&self) -> PageKind {
        PageKind::PROJECT
    }

    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn project(
        &self,
        document: &ResearchDocument,
        id: &str,
        ctx: &DetailContext<'_>,
        options: &RenderOptions,
    ) -> Result<Vec<Mutation>, PageError> {
        let record =
            resolve(document.projects(), id).ok_or_else(|| PageError::not_found(self.kind(), id))?;
        let details = record
            .details
            .as_ref()
            .ok_or_else(|| PageError::no_content(self.kind(), id))?;
        Ok(project_detail(record, details, ctx, options))
    }
}

/// `news/news.html`
#[derive(Debug, Clone)]
pub struct NewsPage {
    data_path: String,
}

impl NewsPage {
    /// Page reading news articles from `data_path`
    pub fn new(data_path: impl Into<String>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }
}

impl DetailPage for NewsPage {
    type Document = NewsDocument;

    fn kind(&self) -> PageKind {
        PageKind::NEWS
    }

    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn project(
        &self,
        document: &NewsDocument,
        id: &str,
        _ctx: &DetailContext<'_>,
        options: &RenderOptions,
    ) -> Result<Vec<Mutation>, PageError> {
        let record =
            resolve(&document.articles, id).ok_or_else(|| PageError::not_found(self.kind(), id))?;
        let content = record
            .content
            .as_deref()
            .filter(|c| !c.is_empty())
            .ok_or_else(|| PageError::no_content(self.kind(), id))?;
        Ok(news_detail(record, content, options))
    }
}

/// Result of running a detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageOutcome {
    /// Final state
    pub state: PageState,
    /// Commands, in application order
    pub mutations: Vec<Mutation>,
}

/// Drives one detail page from address to final state
#[derive(Debug, Clone)]
pub struct DetailController<S, P> {
    source: S,
    page: P,
    options: RenderOptions,
    asset_prefix: String,
}

impl<S, P> DetailController<S, P>
where
    S: DocumentSource,
    P: DetailPage,
{
    /// Controller reading from `source`
    pub fn new(source: S, page: P, options: RenderOptions) -> Self {
        Self {
            source,
            page,
            options,
            asset_prefix: DetailContext::default().asset_prefix.to_string(),
        }
    }

    /// Override the asset prefix
    #[must_use]
    pub fn with_asset_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.asset_prefix = prefix.into();
        self
    }

    /// Compute the page's commands and final state
    ///
    /// # Errors
    ///
    /// Only lifecycle violations are returned; page failures end in
    /// [`PageState::Error`].
    pub async fn run(&self, address: &PageAddress) -> SiteResult<PageOutcome> {
        let mut lifecycle = PageLifecycle::new();
        let mutations = match self.render(address).await {
            Ok(mut slots) => {
                lifecycle.ready()?;
                slots.extend(ready_state());
                slots
            }
            Err(e) => {
                error!(
                    page = self.page.kind().noun,
                    category = e.category(),
                    error = %e,
                    "Detail page failed"
                );
                let message = e.to_string();
                lifecycle.fail(message.clone())?;
                error_state(&message)
            }
        };
        Ok(PageOutcome {
            state: lifecycle.into_state(),
            mutations,
        })
    }

    /// Run and apply the commands to `surface`
    ///
    /// # Errors
    ///
    /// As [`DetailController::run`].
    pub async fn run_on<T: PageSurface>(
        &self,
        address: &PageAddress,
        surface: &mut T,
    ) -> SiteResult<PageState> {
        let outcome = self.run(address).await?;
        surface.apply_all(outcome.mutations);
        Ok(outcome.state)
    }

    async fn render(&self, address: &PageAddress) -> Result<Vec<Mutation>, PageError> {
        let kind = self.page.kind();
        let id = address.id().ok_or_else(|| PageError::missing_id(kind))?;
        info!(page = kind.noun, id = %id, "Loading detail page");

        let document: P::Document = load_document(&self.source, self.page.data_path())
            .await
            .map_err(|e| PageError::load_failed(kind, e))?;

        let ctx = DetailContext {
            page_href: address.href(),
            asset_prefix: &self.asset_prefix,
        };
        self.page.project(&document, &id, &ctx, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use async_trait::async_trait;
    use lab_render::selectors::{detail, project};

    struct Static(&'static str);

    #[async_trait]
    impl DocumentSource for Static {
        async fn fetch(&self, _path: &str) -> Result<Vec<u8>, LoadError> {
            Ok(self.0.as_bytes().to_vec())
        }
    }

    const RESEARCH: &str = r#"{
        "categories": [{
            "id": "machine_learning",
            "name": "Machine Learning",
            "projects": [
                {"id": "p1", "display": {"title": "Alpha Project", "date": "March 3, 2021",
                 "authors": "Authors: Jane Doe", "image": "img/a.png"},
                 "details": {"abstract": "Text"}},
                {"display": {"title": "Beta Study", "date": "", "authors": "", "image": ""}}
            ]
        }]
    }"#;

    fn controller() -> DetailController<Static, ProjectPage> {
        DetailController::new(
            Static(RESEARCH),
            ProjectPage::new("data/research.json"),
            RenderOptions::default(),
        )
    }

    #[tokio::test]
    async fn resolves_by_slug() {
        let address = PageAddress::parse("project.html?id=alpha-project").unwrap();
        let outcome = controller().run(&address).await.unwrap();
        assert_eq!(outcome.state, PageState::Ready);
        assert!(outcome
            .mutations
            .contains(&Mutation::set_text(project::TITLE, "Alpha Project")));
        assert_eq!(outcome.mutations.last(), Some(&Mutation::show(detail::MAIN)));
    }

    #[tokio::test]
    async fn missing_details_is_no_content() {
        let address = PageAddress::parse("project.html?id=beta-study").unwrap();
        let outcome = controller().run(&address).await.unwrap();
        assert_eq!(
            outcome.state,
            PageState::Error("Project \"beta-study\" has no content".into())
        );
        assert!(outcome.mutations.contains(&Mutation::hide(detail::MAIN)));
    }

    #[tokio::test]
    async fn missing_id() {
        let address = PageAddress::parse("project.html").unwrap();
        let outcome = controller().run(&address).await.unwrap();
        assert_eq!(
            outcome.state.message(),
            Some("No project ID specified in URL")
        );
    }

    #[tokio::test]
    async fn unparsable_document_is_load_failure() {
        let controller = DetailController::new(
            Static("{not json"),
            NewsPage::new("data/news.json"),
            RenderOptions::default(),
        );
        let address = PageAddress::parse("news.html?id=x").unwrap();
        let outcome = controller.run(&address).await.unwrap();
        assert_eq!(outcome.state.message(), Some("Failed to load news data"));
    }
}
