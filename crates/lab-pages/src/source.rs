//! Document sources
//!
//! Content documents are fetched by relative path (`data/research.json`)
//! either from a directory on disk or from the deployed site over HTTP.

use crate::error::LoadError;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Fetches raw document bytes by site-relative path
#[async_trait::async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the document at `path`
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError>;
}

#[async_trait::async_trait]
impl<S: DocumentSource + ?Sized> DocumentSource for Box<S> {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        (**self).fetch(path).await
    }
}

/// Fetch and parse a JSON document
///
/// # Errors
///
/// Returns the source's error, or [`LoadError::Json`] when the body does
/// not parse as `T`.
pub async fn load_document<T, S>(source: &S, path: &str) -> Result<T, LoadError>
where
    T: DeserializeOwned,
    S: DocumentSource + ?Sized,
{
    let bytes = source.fetch(path).await?;
    debug!(path, bytes = bytes.len(), "Fetched document");
    serde_json::from_slice(&bytes).map_err(|e| LoadError::json(path, e))
}

/// Reads documents from a site root on disk
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Source rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Site root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, LoadError> {
        let relative = Path::new(path);
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(LoadError::invalid_path(path));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait::async_trait]
impl DocumentSource for FsSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        let full = self.resolve(path)?;
        tokio::fs::read(&full)
            .await
            .map_err(|e| LoadError::io(full, e))
    }
}

/// Fetches documents from a deployed site
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base: Url,
}

impl HttpSource {
    /// Source resolving paths against `base`
    ///
    /// A trailing slash is added to the base so paths resolve beneath it.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidPath`] when `base` is not an absolute URL.
    pub fn new(base: &str) -> Result<Self, LoadError> {
        let normalized = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };
        let base = Url::parse(&normalized).map_err(|e| LoadError::invalid_path(format!("{base}: {e}")))?;
        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    /// Use a preconfigured client
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// URL a path resolves to
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidPath`] when the path cannot be joined.
    pub fn url_for(&self, path: &str) -> Result<Url, LoadError> {
        self.base
            .join(path)
            .map_err(|e| LoadError::invalid_path(format!("{path}: {e}")))
    }
}

#[async_trait::async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        let url = self.url_for(path)?;
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| LoadError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| LoadError::Http {
            url: url.to_string(),
            source,
        })?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_content::model::NewsDocument;

    #[tokio::test]
    async fn reads_documents_under_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("data")).unwrap();
        std::fs::write(
            dir.path().join("data/news.json"),
            r#"{"articles":[{"title":"Hello","date":"May 1, 2020"}]}"#,
        )
        .unwrap();

        let source = FsSource::new(dir.path());
        let doc: NewsDocument = load_document(&source, "data/news.json").await.unwrap();
        assert_eq!(doc.articles.len(), 1);
        assert_eq!(doc.articles[0].title, "Hello");
    }

    #[tokio::test]
    async fn rejects_escaping_paths() {
        let source = FsSource::new("/srv/site");
        let err = source.fetch("../secrets.json").await.unwrap_err();
        assert!(matches!(err, LoadError::InvalidPath(_)));
        let err = source.fetch("/etc/passwd").await.unwrap_err();
        assert!(matches!(err, LoadError::InvalidPath(_)));
    }

    #[tokio::test]
    async fn missing_and_malformed_documents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), "{not json").unwrap();
        let source = FsSource::new(dir.path());

        let err = source.fetch("missing.json").await.unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));

        let err = load_document::<NewsDocument, _>(&source, "bad.json")
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
    }

    #[test]
    fn http_paths_resolve_under_base() {
        let source = HttpSource::new("https://lab.example/site").unwrap();
        assert_eq!(
            source.url_for("data/news.json").unwrap().as_str(),
            "https://lab.example/site/data/news.json"
        );
        assert!(HttpSource::new("not a url").is_err());
    }
}
