//! Lab Render
//!
//! Projection of lab content onto the host pages as mutation commands.
//!
//! # Overview
//!
//! Every page is a static export from the page builder with the content
//! regions left in place. Rendering a page means computing a list of
//! [`Mutation`]s against the selectors in [`selectors`], then handing the
//! list to a [`PageSurface`]. Projections are pure functions of the loaded
//! document and [`RenderOptions`]; nothing here performs I/O.
//!
//! - **selectors**: the DOM contract
//! - **mutation**: command model
//! - **research**, **news**, **people**: listing pages
//! - **detail**: project and news article pages, error and ready regions
//! - **surface**: adapters applying commands
//!
//! # Example
//!
//! ```rust
//! use lab_content::model::NewsDocument;
//! use lab_render::prelude::*;
//!
//! let doc = NewsDocument::default();
//! let mut page = MemoryPage::with_contract();
//! page.apply_all(news_listing(&doc, &RenderOptions::default()));
//!
//! assert_eq!(
//!     page.text(selectors::news::HEADING),
//!     Some("News and Featured Events")
//! );
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod detail;
pub mod html;
pub mod mutation;
pub mod news;
pub mod options;
pub mod people;
pub mod research;
pub mod selectors;
pub mod surface;

// Re-exports
pub use detail::{error_state, news_detail, project_detail, ready_state, DetailContext};
pub use mutation::Mutation;
pub use news::news_listing;
pub use options::RenderOptions;
pub use people::people_page;
pub use research::research_listing;
pub use selectors::Selector;
pub use surface::{MemoryPage, PageSurface};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for rendering pages
    pub use crate::detail::{error_state, news_detail, project_detail, ready_state, DetailContext};
    pub use crate::mutation::Mutation;
    pub use crate::news::news_listing;
    pub use crate::options::RenderOptions;
    pub use crate::people::people_page;
    pub use crate::research::research_listing;
    pub use crate::selectors::{self, Selector};
    pub use crate::surface::{MemoryPage, PageSurface};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
