//! Lab Content
//!
//! Read-only content model for the lab site and the pure rules that turn it
//! into presentation data.
//!
//! # Overview
//!
//! - **model**: the research, news and people documents as loaded from JSON
//! - **slug**: identity resolution by explicit id or title slug
//! - **date**: machine-readable date normalization
//! - **body**: paragraph/bullet body formatting and excerpts
//! - **image**: catalogue-driven image metadata
//! - **grid**: fixed-column grouping with placeholder padding
//!
//! # Example
//!
//! ```rust
//! use lab_content::slug::slugify;
//! use lab_content::date::normalize;
//!
//! assert_eq!(slugify("Deep Hedging: A Survey"), "deep-hedging-a-survey");
//! assert_eq!(normalize("March 3, 2021"), "2021-03-03");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod body;
pub mod date;
pub mod grid;
pub mod image;
pub mod model;
pub mod slug;

// Re-exports
pub use grid::{Group, LoadPriority, Slot};
pub use image::{Candidate, ImageCatalog, ImageInfo};
pub use model::{
    Article, Category, NewsDocument, PeopleDocument, Person, Project, ProjectDetails,
    ProjectDisplay, ProjectMetadata, ResearchDocument, Visibility, Visitor,
};
pub use slug::{slugify, Identified};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with lab content
    pub use crate::body::{excerpt, format_body};
    pub use crate::date::normalize;
    pub use crate::grid::{layout, Group, LoadPriority, Slot};
    pub use crate::image::{ImageCatalog, ImageInfo};
    pub use crate::model::*;
    pub use crate::slug::{resolve, slugify, Identified};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
