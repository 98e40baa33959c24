//! In-memory template storage

use dashmap::DashMap;

use super::types::{validate_path, TemplateError, TemplateResult};

/// In-memory template storage keyed by template path
pub struct TemplateStore {
    templates: DashMap<String, String>,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore {
    /// Create a new template store
    pub fn new() -> Self {
        Self {
            templates: DashMap::new(),
        }
    }

    /// Insert or replace the template source stored at `path`
    pub fn insert(&self, path: impl Into<String>, source: impl Into<String>) -> TemplateResult<()> {
        let path = path.into();
        validate_path(&path)?;

        self.templates.insert(path, source.into());
        Ok(())
    }

    /// Get the template source stored at `path`
    pub fn get(&self, path: &str) -> TemplateResult<String> {
        self.source(path)
            .ok_or_else(|| TemplateError::NotFound(path.to_string()))
    }

    /// Template source lookup that treats a missing path as `None`
    pub fn source(&self, path: &str) -> Option<String> {
        self.templates.get(path).map(|t| t.value().clone())
    }

    /// Sorted list of stored template paths
    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self
            .templates
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        paths.sort();
        paths
    }

    /// Delete the template stored at `path`
    pub fn remove(&self, path: &str) -> TemplateResult<()> {
        self.templates
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| TemplateError::NotFound(path.to_string()))
    }

    /// Check if a template exists
    pub fn exists(&self, path: &str) -> bool {
        self.templates.contains_key(path)
    }

    /// Get the number of templates
    pub fn count(&self) -> usize {
        self.templates.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_insert_and_get() {
        let store = TemplateStore::new();

        store
            .insert("courses/edx_ace/welcome/push/title.txt", "Welcome {{ name }}")
            .unwrap();

        assert_eq!(
            store.get("courses/edx_ace/welcome/push/title.txt").unwrap(),
            "Welcome {{ name }}"
        );
        assert!(store.exists("courses/edx_ace/welcome/push/title.txt"));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_store_insert_replaces() {
        let store = TemplateStore::new();

        store.insert("a/title.txt", "first").unwrap();
        store.insert("a/title.txt", "second").unwrap();

        assert_eq!(store.get("a/title.txt").unwrap(), "second");
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_store_rejects_invalid_path() {
        let store = TemplateStore::new();

        assert!(matches!(
            store.insert("../escape.txt", "x"),
            Err(TemplateError::InvalidPath(_))
        ));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_store_missing() {
        let store = TemplateStore::new();

        assert!(matches!(
            store.get("missing.txt"),
            Err(TemplateError::NotFound(_))
        ));
        assert!(store.source("missing.txt").is_none());
        assert!(matches!(
            store.remove("missing.txt"),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn test_store_remove() {
        let store = TemplateStore::new();

        store.insert("remove/body.txt", "x").unwrap();
        assert!(store.exists("remove/body.txt"));

        store.remove("remove/body.txt").unwrap();
        assert!(!store.exists("remove/body.txt"));
    }

    #[test]
    fn test_store_paths_sorted() {
        let store = TemplateStore::new();

        for name in ["c.txt", "a.txt", "b.txt"] {
            store.insert(name, "x").unwrap();
        }

        assert_eq!(store.paths(), vec!["a.txt", "b.txt", "c.txt"]);
    }
}
