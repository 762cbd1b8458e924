//! Error types for lab pages
//!
//! - Document loading failures (filesystem, HTTP, JSON)
//! - User-facing detail page errors, whose `Display` text is the message
//!   shown in the page's error region
//! - Optional script load failures
//! - Configuration and page address errors

use crate::state::PageStatus;
use std::path::PathBuf;

/// Combined error type
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Document could not be loaded
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// Detail page ended in its error state
    #[error("page error: {0}")]
    Page(#[from] PageError),

    /// Layout script failed
    #[error("script error: {0}")]
    Script(#[from] ScriptError),

    /// Configuration rejected
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Page address could not be parsed
    #[error("address error: {0}")]
    Address(#[from] AddressError),

    /// Page lifecycle violated
    #[error("state error: {0}")]
    State(#[from] StateError),
}

/// Result alias used across the crate
pub type SiteResult<T> = Result<T, SiteError>;

/// Document loading errors
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Filesystem read failed
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed before a response arrived
    #[error("request to {url} failed: {source}")]
    Http {
        /// Requested URL
        url: String,
        /// Underlying error
        #[source]
        source: reqwest::Error,
    },

    /// HTTP response was not a success
    #[error("request to {url} returned status {status}")]
    Status {
        /// Requested URL
        url: String,
        /// Response status code
        status: u16,
    },

    /// Body was not the expected JSON document
    #[error("invalid JSON in {location}: {source}")]
    Json {
        /// Where the body came from
        location: String,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// Document path rejected before loading
    #[error("invalid document path: {0}")]
    InvalidPath(String),
}

impl LoadError {
    /// Create an I/O error
    #[inline]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a JSON error
    #[inline]
    pub fn json(location: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            location: location.into(),
            source,
        }
    }

    /// Create an invalid path error
    #[inline]
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath(path.into())
    }
}

/// Detail page flavour, used to word its messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageKind {
    /// Capitalised record label, e.g. `Project`
    pub label: &'static str,
    /// Lowercase noun used in generic messages, e.g. `project`
    pub noun: &'static str,
}

impl PageKind {
    /// Research project page
    pub const PROJECT: Self = Self {
        label: "Project",
        noun: "project",
    };

    /// News article page
    pub const NEWS: Self = Self {
        label: "News article",
        noun: "news",
    };
}

/// User-facing detail page errors
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// No `id` in the page address
    #[error("No {} ID specified in URL", .kind.noun)]
    MissingId {
        /// Page flavour
        kind: PageKind,
    },

    /// Document could not be loaded or parsed
    #[error("Failed to load {} data", .kind.noun)]
    LoadFailed {
        /// Page flavour
        kind: PageKind,
        /// Underlying error
        #[source]
        source: LoadError,
    },

    /// No record matches the id
    #[error("{} \"{id}\" not found", .kind.label)]
    NotFound {
        /// Page flavour
        kind: PageKind,
        /// Attempted id
        id: String,
    },

    /// Record found without its detail payload
    #[error("{} \"{id}\" has no content", .kind.label)]
    NoContent {
        /// Page flavour
        kind: PageKind,
        /// Attempted id
        id: String,
    },
}

impl PageError {
    /// Create a missing id error
    #[inline]
    #[must_use]
    pub fn missing_id(kind: PageKind) -> Self {
        Self::MissingId { kind }
    }

    /// Create a load failure
    #[inline]
    #[must_use]
    pub fn load_failed(kind: PageKind, source: LoadError) -> Self {
        Self::LoadFailed { kind, source }
    }

    /// Create a not found error
    #[inline]
    pub fn not_found(kind: PageKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Create a no content error
    #[inline]
    pub fn no_content(kind: PageKind, id: impl Into<String>) -> Self {
        Self::NoContent {
            kind,
            id: id.into(),
        }
    }

    /// Short machine-readable category, used in logs
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::MissingId { .. } => "missing id",
            Self::LoadFailed { .. } => "load failed",
            Self::NotFound { .. } => "not found",
            Self::NoContent { .. } => "no content",
        }
    }
}

/// Layout script errors
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// Script resource missing or unreadable
    #[error("script {src} failed to load: {reason}")]
    Failed {
        /// Script URL
        src: String,
        /// Why it failed
        reason: String,
    },
}

impl ScriptError {
    /// Create a load failure
    #[inline]
    pub fn failed(src: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Failed {
            src: src.into(),
            reason: reason.into(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for the config
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values are out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Page address errors
#[derive(Debug, thiserror::Error)]
#[error("invalid page address {href:?}: {reason}")]
pub struct AddressError {
    /// Address as given
    pub href: String,
    /// Parser message
    pub reason: String,
}

/// Page lifecycle errors
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Transition not allowed from the current state
    #[error("illegal page transition {from:?} -> {to:?}")]
    IllegalTransition {
        /// Current status
        from: PageStatus,
        /// Requested status
        to: PageStatus,
    },
}
