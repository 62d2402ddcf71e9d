//! Sources of API documentation.
//!
//! The generator only needs "something that yields an
//! [`ApiDocumentation`]". [`ServiceSource`] talks to a running OpenSpace
//! instance; [`FileSource`] reads a dump saved earlier with
//! `openspace-typegen introspect --save`, which allows regenerating
//! declarations without the application running.

use crate::client::DocumentationClient;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use typegen_core::{ApiDocumentation, Error, Result, ServerSettings};

/// Provider of the scripting API documentation.
#[async_trait]
pub trait DocumentationSource: Send {
    /// Retrieves the documentation.
    ///
    /// # Errors
    ///
    /// Returns an error if the documentation cannot be obtained or decoded.
    async fn fetch(&mut self) -> Result<ApiDocumentation>;

    /// Human-readable origin, used in logs and command output.
    fn describe(&self) -> String;
}

/// Documentation fetched from a running OpenSpace server module.
///
/// Each [`fetch`](DocumentationSource::fetch) opens a connection,
/// authenticates when a password is configured, requests the
/// documentation, and disconnects.
#[derive(Debug, Clone)]
pub struct ServiceSource {
    settings: ServerSettings,
}

impl ServiceSource {
    /// Creates a source for the given server settings.
    #[must_use]
    pub const fn new(settings: ServerSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl DocumentationSource for ServiceSource {
    async fn fetch(&mut self) -> Result<ApiDocumentation> {
        let mut client = DocumentationClient::connect(
            &self.settings.address(),
            self.settings.connect_timeout(),
            self.settings.request_timeout(),
        )
        .await?;

        if let Some(password) = &self.settings.password {
            client.authenticate(password).await?;
        }

        let docs = client.get_documentation(&self.settings.documentation).await?;

        if let Err(e) = client.disconnect().await {
            tracing::warn!("Failed to close connection cleanly: {e}");
        }

        Ok(docs)
    }

    fn describe(&self) -> String {
        format!("service at {}", self.settings.address())
    }
}

/// Documentation loaded from a JSON dump on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the dump path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DocumentationSource for FileSource {
    async fn fetch(&mut self) -> Result<ApiDocumentation> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::Io {
                path: self.path.clone(),
                source: e,
            })?;

        let docs = ApiDocumentation::from_json_str(&text)?;
        tracing::info!(
            "Loaded documentation dump {}: {} libraries",
            self.path.display(),
            docs.library_count()
        );
        Ok(docs)
    }

    fn describe(&self) -> String {
        format!("dump {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let mut source = FileSource::new("/nonexistent/docs.json");
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[tokio::test]
    async fn test_file_source_reads_dump() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("docs.json");
        std::fs::write(
            &path,
            r#"[{"library":"time","functions":[{"name":"UTC","help":"","arguments":[],"returnType":"String"}]}]"#,
        )
        .unwrap();

        let mut source = FileSource::new(&path);
        let docs = source.fetch().await.unwrap();
        assert_eq!(docs.function_count(), 1);
        assert!(source.describe().contains("docs.json"));
    }

    #[test]
    fn test_service_source_describe() {
        let source = ServiceSource::new(ServerSettings::default());
        assert_eq!(source.describe(), "service at localhost:4681");
    }
}
