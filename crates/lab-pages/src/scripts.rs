//! Layout script pipeline
//!
//! The research page appends its masonry scripts to the document head one
//! at a time, each after the previous one finished. A script that fails is
//! logged and skipped; the page content is already in place by then.

use crate::error::ScriptError;
use lab_render::selectors::HEAD;
use lab_render::{Mutation, PageSurface};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Loads one script and reports completion
#[async_trait::async_trait]
pub trait ScriptLoader: Send + Sync {
    /// Resolve once `src` has loaded
    async fn load(&self, src: &str) -> Result<(), ScriptError>;
}

/// Checks scripts exist under the site root
#[derive(Debug, Clone)]
pub struct AssetScriptLoader {
    root: PathBuf,
}

impl AssetScriptLoader {
    /// Loader rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait::async_trait]
impl ScriptLoader for AssetScriptLoader {
    async fn load(&self, src: &str) -> Result<(), ScriptError> {
        let path = self.root.join(src);
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Ok(()),
            Ok(_) => Err(ScriptError::failed(src, "not a file")),
            Err(e) => Err(ScriptError::failed(src, e.to_string())),
        }
    }
}

/// Outcome of a pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScriptReport {
    /// Scripts that loaded, in order
    pub loaded: Vec<String>,
    /// Scripts that failed, in order
    pub failed: Vec<String>,
}

/// Ordered script list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptPipeline {
    scripts: Vec<String>,
}

impl ScriptPipeline {
    /// Pipeline over `scripts`
    pub fn new<I, S>(scripts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scripts: scripts.into_iter().map(Into::into).collect(),
        }
    }

    /// Scripts in load order
    #[must_use]
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    /// Append and await each script in turn
    pub async fn run<L, P>(&self, loader: &L, surface: &mut P) -> ScriptReport
    where
        L: ScriptLoader + ?Sized,
        P: PageSurface,
    {
        let mut report = ScriptReport::default();
        for src in &self.scripts {
            surface.apply(Mutation::append_script(HEAD, src.as_str()));
            match loader.load(src).await {
                Ok(()) => {
                    info!(src = %src, "Layout script loaded");
                    report.loaded.push(src.clone());
                }
                Err(e) => {
                    warn!(src = %src, error = %e, "Layout script failed, continuing");
                    report.failed.push(src.clone());
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn appends_in_order_and_skips_failures() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("js")).unwrap();
        std::fs::write(dir.path().join("js/a.js"), "").unwrap();
        std::fs::write(dir.path().join("js/c.js"), "").unwrap();

        let pipeline = ScriptPipeline::new(["js/a.js", "js/b.js", "js/c.js"]);
        let mut log: Vec<Mutation> = Vec::new();
        let report = pipeline
            .run(&AssetScriptLoader::new(dir.path()), &mut log)
            .await;

        assert_eq!(report.loaded, vec!["js/a.js", "js/c.js"]);
        assert_eq!(report.failed, vec!["js/b.js"]);
        assert_eq!(
            log,
            vec![
                Mutation::append_script(HEAD, "js/a.js"),
                Mutation::append_script(HEAD, "js/b.js"),
                Mutation::append_script(HEAD, "js/c.js"),
            ]
        );
    }
}
