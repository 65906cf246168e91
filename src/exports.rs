//! On-disk store for generated deck artifacts.
//!
//! Lookup is strictly read-only: a missing artifact is reported as
//! [`FramedeckError::ArtifactNotFound`], never regenerated.

use std::path::{Path, PathBuf};

use crate::error::{FramedeckError, FramedeckResult};

#[derive(Debug, Clone)]
pub struct ExportStore {
    root: PathBuf,
}

impl ExportStore {
    /// Open (creating if needed) an export store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> FramedeckResult<Self> {
        let root = root.into();
        use anyhow::Context as _;
        std::fs::create_dir_all(&root)
            .with_context(|| format!("create export dir '{}'", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Mint a fresh export id: `{project_id}-{8 hex chars}`.
    pub fn new_export_id(&self, project_id: &str) -> String {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        format!("{project_id}-{}", &suffix[..8])
    }

    /// Path an artifact with this id and extension would live at.
    pub fn path_for(&self, export_id: &str, ext: &str) -> FramedeckResult<PathBuf> {
        // Export ids are path components, never paths.
        if export_id.is_empty()
            || export_id.contains(['/', '\\'])
            || export_id.contains("..")
        {
            return Err(FramedeckError::validation(format!(
                "invalid export id '{export_id}'"
            )));
        }
        Ok(self.root.join(format!("{export_id}.{ext}")))
    }

    /// Resolve an existing artifact, or fail with `ArtifactNotFound`.
    pub fn resolve(&self, export_id: &str, ext: &str) -> FramedeckResult<PathBuf> {
        let path = self.path_for(export_id, ext)?;
        if !path.is_file() {
            return Err(FramedeckError::artifact_not_found(format!(
                "export '{export_id}' does not exist"
            )));
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> ExportStore {
        let root = std::env::temp_dir().join(format!(
            "framedeck_{name}_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        ExportStore::new(root).unwrap()
    }

    #[test]
    fn export_ids_carry_the_project_prefix() {
        let store = temp_store("ids");
        let id = store.new_export_id("demo");
        assert!(id.starts_with("demo-"));
        assert_eq!(id.len(), "demo-".len() + 8);

        let other = store.new_export_id("demo");
        assert_ne!(id, other);

        std::fs::remove_dir_all(store.root()).ok();
    }

    #[test]
    fn resolve_misses_with_artifact_not_found() {
        let store = temp_store("miss");
        let err = store.resolve("demo-deadbeef", "pptx").unwrap_err();
        assert!(matches!(err, FramedeckError::ArtifactNotFound(_)));
        std::fs::remove_dir_all(store.root()).ok();
    }

    #[test]
    fn resolve_finds_written_artifacts() {
        let store = temp_store("hit");
        let id = store.new_export_id("demo");
        let path = store.path_for(&id, "json").unwrap();
        std::fs::write(&path, b"{}").unwrap();

        assert_eq!(store.resolve(&id, "json").unwrap(), path);
        std::fs::remove_dir_all(store.root()).ok();
    }

    #[test]
    fn path_for_rejects_traversal() {
        let store = temp_store("traversal");
        assert!(store.path_for("../evil", "json").is_err());
        assert!(store.path_for("a/b", "json").is_err());
        assert!(store.path_for("", "json").is_err());
        std::fs::remove_dir_all(store.root()).ok();
    }
}
