//! Project Materializer Module
//!
//! Writes a parsed file set to persistent storage under a fresh, uniquely
//! named project directory with a fixed layout:
//!
//! ```text
//! <root>/<id>/index.html
//! <root>/<id>/css/styles.css
//! <root>/<id>/js/main.js
//! ```
//!
//! Materialization is not atomic: if any step fails the operation aborts and
//! a partially written directory may remain on disk. Cleanup of such
//! orphans is an external concern.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::fs;
use tracing::debug;

use crate::cache::current_timestamp_ms;
use crate::error::Result;
use crate::generator::FileSet;

// == Project ==
/// A materialized generation: identifier, directory and creation time.
///
/// Created once per successful generation and immutable thereafter.
#[derive(Debug, Clone)]
pub struct Project {
    /// Time-derived, collision-free identifier (also the directory name)
    pub id: String,
    /// Absolute or root-relative path of the project directory
    pub path: PathBuf,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

// == Project Materializer ==
/// Allocates unique project directories and writes file sets into them.
#[derive(Debug)]
pub struct ProjectMaterializer {
    /// Directory all projects are created under
    root: PathBuf,
    /// Monotonic suffix distinguishing projects created in the same clock tick
    sequence: AtomicU64,
}

impl ProjectMaterializer {
    // == Constructor ==
    /// Creates a materializer writing projects under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sequence: AtomicU64::new(0),
        }
    }

    /// Returns the root directory projects are written under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    // == Identifier Allocation ==
    /// Allocates a fresh project identifier.
    ///
    /// Wall-clock milliseconds alone collide when two generations land in
    /// the same tick; the atomic counter suffix keeps identifiers distinct
    /// without a lock.
    fn next_project_id(&self) -> String {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("site_{}_{}", current_timestamp_ms(), sequence)
    }

    // == Materialize ==
    /// Writes a file set into a fresh project directory.
    ///
    /// Returns the created [`Project`]. Directory-creation and write
    /// failures both abort with a materialization error; no rollback is
    /// attempted.
    pub async fn materialize(&self, files: &FileSet) -> Result<Project> {
        let id = self.next_project_id();
        let dir = self.root.join(&id);

        fs::create_dir_all(&dir).await?;
        fs::create_dir(dir.join("css")).await?;
        fs::create_dir(dir.join("js")).await?;

        fs::write(dir.join("index.html"), &files.html).await?;
        fs::write(dir.join("css").join("styles.css"), &files.css).await?;
        fs::write(dir.join("js").join("main.js"), &files.js).await?;

        debug!("Materialized project {} at {}", id, dir.display());

        Ok(Project {
            id,
            path: dir,
            created_at: Utc::now(),
        })
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_files() -> FileSet {
        FileSet {
            html: "<h1>Test Page</h1>".to_string(),
            css: "h1 { color: blue; }".to_string(),
            js: "console.log(\"Test\");".to_string(),
        }
    }

    #[tokio::test]
    async fn test_materialize_writes_fixed_layout() {
        let root = tempdir().unwrap();
        let materializer = ProjectMaterializer::new(root.path());

        let project = materializer.materialize(&sample_files()).await.unwrap();

        let html = tokio::fs::read_to_string(project.path.join("index.html"))
            .await
            .unwrap();
        let css = tokio::fs::read_to_string(project.path.join("css/styles.css"))
            .await
            .unwrap();
        let js = tokio::fs::read_to_string(project.path.join("js/main.js"))
            .await
            .unwrap();

        assert_eq!(html, "<h1>Test Page</h1>");
        assert_eq!(css, "h1 { color: blue; }");
        assert_eq!(js, "console.log(\"Test\");");
        assert!(project.path.starts_with(root.path()));
        assert!(project.path.ends_with(&project.id));
    }

    #[tokio::test]
    async fn test_materialize_empty_sections() {
        let root = tempdir().unwrap();
        let materializer = ProjectMaterializer::new(root.path());

        let project = materializer.materialize(&FileSet::default()).await.unwrap();

        // Absent sections still produce their files, just empty
        let css = tokio::fs::read_to_string(project.path.join("css/styles.css"))
            .await
            .unwrap();
        assert_eq!(css, "");
    }

    #[tokio::test]
    async fn test_concurrent_materializations_never_collide() {
        let root = tempdir().unwrap();
        let materializer = std::sync::Arc::new(ProjectMaterializer::new(root.path()));
        let files = sample_files();

        // Both calls race within the same clock tick
        let (a, b) = tokio::join!(materializer.materialize(&files), materializer.materialize(&files));
        let (a, b) = (a.unwrap(), b.unwrap());

        assert_ne!(a.id, b.id);
        assert_ne!(a.path, b.path);
        assert!(a.path.exists());
        assert!(b.path.exists());
    }

    #[tokio::test]
    async fn test_materialize_failure_surfaces_error() {
        let root = tempdir().unwrap();
        // A file where the root directory should be makes create_dir_all fail
        let blocked = root.path().join("blocked");
        tokio::fs::write(&blocked, "not a directory").await.unwrap();

        let materializer = ProjectMaterializer::new(&blocked);
        let result = materializer.materialize(&sample_files()).await;

        assert!(matches!(
            result,
            Err(crate::error::GeneratorError::Materialization(_))
        ));
    }
}
