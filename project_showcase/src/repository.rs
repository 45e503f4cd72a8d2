//! Project cache repository
//!
//! Typed access to the single `projects` key so callers never touch the
//! underlying storage directly. The collection is always written whole.

use crate::error::Result;
use crate::storage::KeyValueStorage;
use showcase_common::{parse_records, ProjectRecord};
use std::sync::Arc;

/// Storage key holding the serialized project list
pub const PROJECTS_KEY: &str = "projects";

/// Load/save the cached project collection
#[derive(Clone)]
pub struct ProjectRepository {
    storage: Arc<dyn KeyValueStorage>,
}

impl ProjectRepository {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Read the cached collection.
    ///
    /// Returns `Ok(None)` when nothing is stored (or the stored value is an
    /// empty string) and an error when the stored value is unreadable or not
    /// a valid collection.
    pub fn load(&self) -> Result<Option<Vec<ProjectRecord>>> {
        match self.raw()? {
            Some(json) => Ok(Some(parse_records(&json)?)),
            None => Ok(None),
        }
    }

    /// Replace the cached collection with `projects`
    pub fn save(&self, projects: &[ProjectRecord]) -> Result<()> {
        let json = serde_json::to_string(projects)?;
        self.storage.set_item(PROJECTS_KEY, &json)?;
        log::debug!("Saved {} projects to cache", projects.len());
        Ok(())
    }

    /// True when no collection is stored yet
    pub fn is_unset(&self) -> Result<bool> {
        Ok(self.raw()?.is_none())
    }

    /// Drop the cached collection
    pub fn clear(&self) -> Result<()> {
        self.storage.remove_item(PROJECTS_KEY)
    }

    fn raw(&self) -> Result<Option<String>> {
        Ok(self
            .storage
            .get_item(PROJECTS_KEY)?
            .filter(|value| !value.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShowcaseError;
    use crate::storage::MemoryStorage;

    fn repository() -> (ProjectRepository, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        (ProjectRepository::new(storage.clone()), storage)
    }

    #[test]
    fn test_load_absent() {
        let (repo, _storage) = repository();
        assert!(repo.load().unwrap().is_none());
        assert!(repo.is_unset().unwrap());
    }

    #[test]
    fn test_empty_string_counts_as_unset() {
        let (repo, storage) = repository();
        storage.set_item(PROJECTS_KEY, "").unwrap();

        assert!(repo.load().unwrap().is_none());
        assert!(repo.is_unset().unwrap());
    }

    #[test]
    fn test_save_then_load() {
        let (repo, _storage) = repository();
        let projects = vec![
            ProjectRecord::new("A", "a.png", "a", "first", "https://a"),
            ProjectRecord::new("B", "b.png", "b", "second", "https://b"),
        ];

        repo.save(&projects).unwrap();

        assert_eq!(repo.load().unwrap(), Some(projects));
        assert!(!repo.is_unset().unwrap());
    }

    #[test]
    fn test_save_replaces_whole_collection() {
        let (repo, _storage) = repository();
        repo.save(&[
            ProjectRecord::new("A", "a", "a", "a", "a"),
            ProjectRecord::new("B", "b", "b", "b", "b"),
        ])
        .unwrap();

        repo.save(&[ProjectRecord::new("C", "c", "c", "c", "c")])
            .unwrap();

        let loaded = repo.load().unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "C");
    }

    #[test]
    fn test_load_corrupted() {
        let (repo, storage) = repository();
        storage.set_item(PROJECTS_KEY, "{not json").unwrap();

        assert!(matches!(repo.load(), Err(ShowcaseError::Record(_))));
        // Corrupted data is still "set"
        assert!(!repo.is_unset().unwrap());
    }

    #[test]
    fn test_clear() {
        let (repo, _storage) = repository();
        repo.save(&[ProjectRecord::new("A", "a", "a", "a", "a")])
            .unwrap();

        repo.clear().unwrap();
        assert!(repo.is_unset().unwrap());
    }
}
