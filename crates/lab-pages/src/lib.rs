//! Lab Pages
//!
//! Page controllers for the lab site: load a content document, project it
//! with [`lab_render`], and apply the result to a page surface.
//!
//! - **source**: where documents come from (disk or HTTP)
//! - **detail**: project and news article pages with their lifecycle
//! - **listing**: research, news and people listings
//! - **scripts**: sequential layout script loading
//! - **config**: TOML site configuration
//!
//! # Example
//!
//! ```rust,no_run
//! use lab_pages::prelude::*;
//! use lab_render::MemoryPage;
//!
//! # async fn demo() -> Result<(), SiteError> {
//! let config = SiteConfig::default();
//! let controller = DetailController::new(
//!     FsSource::new("site"),
//!     ProjectPage::new(config.data.research.clone()),
//!     config.render_options(),
//! );
//! let address = PageAddress::parse("projects/project.html?id=alpha-project")?;
//! let mut page = MemoryPage::with_contract();
//! let state = controller.run_on(&address, &mut page).await?;
//! println!("{state:?}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod address;
pub mod config;
pub mod detail;
pub mod error;
pub mod listing;
pub mod logging;
pub mod scripts;
pub mod source;
pub mod state;

// Re-exports
pub use address::PageAddress;
pub use config::{DataPaths, SiteConfig};
pub use detail::{DetailController, DetailPage, NewsPage, PageOutcome, ProjectPage};
pub use error::{LoadError, PageError, PageKind, SiteError, SiteResult};
pub use listing::{ListingController, ListingReport};
pub use scripts::{AssetScriptLoader, ScriptLoader, ScriptPipeline, ScriptReport};
pub use source::{load_document, DocumentSource, FsSource, HttpSource};
pub use state::{PageLifecycle, PageState, PageStatus};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for running pages
    pub use crate::address::PageAddress;
    pub use crate::config::{DataPaths, SiteConfig};
    pub use crate::detail::{DetailController, DetailPage, NewsPage, PageOutcome, ProjectPage};
    pub use crate::error::{LoadError, PageError, SiteError, SiteResult};
    pub use crate::listing::ListingController;
    pub use crate::scripts::{AssetScriptLoader, ScriptLoader, ScriptPipeline};
    pub use crate::source::{DocumentSource, FsSource, HttpSource};
    pub use crate::state::PageState;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
