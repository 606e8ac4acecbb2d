//! Filesystem discovery and document reads for platform documentation trees.
//!
//! The documentation root holds one directory per platform:
//!
//! ```text
//! <root>/<platform>/schema.md
//! <root>/<platform>/workflows/<workflow>.md
//! <root>/<platform>/microservices/<service>/README.md
//! ```
//!
//! Listing operations are total: a missing or unreadable directory yields an
//! empty list, with no distinction between the two. Document reads are
//! single-attempt and surface `io::Error` to the caller.

use std::io;
use std::path::PathBuf;

use tokio::fs;

/// Filename of a platform's primary reference document.
const SCHEMA_FILE: &str = "schema.md";

/// Subdirectory of workflow documents.
const WORKFLOWS_DIR: &str = "workflows";

/// Subdirectory of microservice directories.
const MICROSERVICES_DIR: &str = "microservices";

/// Filename of a microservice's document.
const README_FILE: &str = "README.md";

/// Read-only view over the documentation tree. Cheap to clone into handlers;
/// holds no open handles and no cached state.
#[derive(Clone, Debug)]
pub struct DocLibrary {
    root: PathBuf,
}

impl DocLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn platform_dir(&self, platform: &str) -> PathBuf {
        self.root.join(platform)
    }

    /// List a platform's microservice directories, sorted by name.
    pub async fn list_microservices(&self, platform: &str) -> Vec<String> {
        let dir = self.platform_dir(platform).join(MICROSERVICES_DIR);
        let mut names = Vec::new();

        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!(path = %dir.display(), %err, "microservices directory not readable");
                return names;
            }
        };

        while let Ok(Some(entry)) = entries.next_entry().await {
            let is_dir = entry.file_type().await.map(|t| t.is_dir()).unwrap_or(false);
            if !is_dir {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }

        names.sort();
        names
    }

    /// List a platform's workflow documents (filename stems of `.md` files),
    /// sorted by name.
    pub async fn list_workflows(&self, platform: &str) -> Vec<String> {
        let dir = self.platform_dir(platform).join(WORKFLOWS_DIR);
        let mut names = Vec::new();

        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!(path = %dir.display(), %err, "workflows directory not readable");
                return names;
            }
        };

        while let Ok(Some(entry)) = entries.next_entry().await {
            let is_file = entry.file_type().await.map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(stem) = name.strip_suffix(".md") {
                names.push(stem.to_string());
            }
        }

        names.sort();
        names
    }

    /// Read a platform's schema document.
    pub async fn read_schema(&self, platform: &str) -> io::Result<String> {
        fs::read_to_string(self.platform_dir(platform).join(SCHEMA_FILE)).await
    }

    /// Read a workflow document by its filename stem.
    pub async fn read_workflow(&self, platform: &str, workflow: &str) -> io::Result<String> {
        let name = checked_component(workflow)?;
        let path = self
            .platform_dir(platform)
            .join(WORKFLOWS_DIR)
            .join(format!("{name}.md"));
        fs::read_to_string(path).await
    }

    /// Read a microservice's README document.
    pub async fn read_microservice_readme(
        &self,
        platform: &str,
        service: &str,
    ) -> io::Result<String> {
        let name = checked_component(service)?;
        let path = self
            .platform_dir(platform)
            .join(MICROSERVICES_DIR)
            .join(name)
            .join(README_FILE);
        fs::read_to_string(path).await
    }
}

/// Sub-identifiers come straight from the URL; only a single plain path
/// component may ever be joined onto the tree.
fn checked_component(name: &str) -> io::Result<&str> {
    let plain =
        !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\']);
    if plain {
        Ok(name)
    } else {
        Err(io::Error::new(io::ErrorKind::NotFound, "invalid document name"))
    }
}
