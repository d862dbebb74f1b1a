//! Data source boundary
//!
//! The layout engine never talks to the document database directly. A
//! [`DataSource`] delivers one [`TimelineData`] per fetch, or a single error
//! that the render adapters turn into their error presentation.
//!
//! # Example
//!
//! ```rust,no_run
//! use roadmap_timeline::source::{DataSource, JsonFileSource};
//!
//! # async fn example() -> roadmap_timeline::Result<()> {
//! let source = JsonFileSource::new("timeline.json");
//! let data = source.fetch().await?;
//! println!("{} experiments", data.experiments.len());
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "fetch")]
mod http;
#[cfg(feature = "fetch")]
pub mod retry;

#[cfg(feature = "fetch")]
pub use http::HttpSource;

use std::future::Future;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::records::TimelineData;
use crate::Result;

/// Something that can produce timeline records.
pub trait DataSource: Send + Sync {
    /// Fetch experiments, releases and (optionally) the window start.
    fn fetch(&self) -> impl Future<Output = Result<TimelineData>> + Send;
}

/// Reads a JSON snapshot from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading `path`.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the snapshot.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Synchronous load, for callers without an async runtime.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be read and
    /// [`crate::Error::Json`] if it is not a valid payload.
    pub fn load(&self) -> Result<TimelineData> {
        let raw = std::fs::read_to_string(&self.path)?;
        self.parse(&raw)
    }

    fn parse(&self, raw: &str) -> Result<TimelineData> {
        let data: TimelineData = serde_json::from_str(raw)?;
        debug!(
            path = %self.path.display(),
            experiments = data.experiments.len(),
            releases = data.releases.len(),
            "loaded timeline snapshot"
        );
        Ok(data)
    }
}

impl DataSource for JsonFileSource {
    #[cfg(feature = "tokio")]
    fn fetch(&self) -> impl Future<Output = Result<TimelineData>> + Send {
        async move {
            let raw = tokio::fs::read_to_string(&self.path).await?;
            self.parse(&raw)
        }
    }

    #[cfg(not(feature = "tokio"))]
    fn fetch(&self) -> impl Future<Output = Result<TimelineData>> + Send {
        async move { self.load() }
    }
}

/// Fixed in-memory data, mostly for tests and previews.
#[derive(Debug, Clone)]
pub struct StaticSource {
    data: TimelineData,
}

impl StaticSource {
    /// Wrap already loaded data.
    #[must_use]
    pub const fn new(data: TimelineData) -> Self {
        Self { data }
    }
}

impl DataSource for StaticSource {
    fn fetch(&self) -> impl Future<Output = Result<TimelineData>> + Send {
        async move { Ok(self.data.clone()) }
    }
}
