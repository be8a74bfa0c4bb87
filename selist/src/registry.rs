//! Identifier to data mapping for registered items.

use std::collections::HashMap;

use crate::error::ListError;

/// Associates each registered item identifier with its opaque data.
///
/// Display order lives in the element tree, not here. Identifiers are unique:
/// a second `put` for the same id is rejected instead of shadowing the first.
#[derive(Debug, Clone)]
pub struct ItemRegistry<D> {
    entries: HashMap<String, D>,
}

impl<D> Default for ItemRegistry<D> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<D> ItemRegistry<D> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store data for an identifier.
    pub fn put(&mut self, id: impl Into<String>, data: D) -> Result<(), ListError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ListError::MissingId);
        }
        if self.entries.contains_key(&id) {
            return Err(ListError::DuplicateId(id));
        }
        self.entries.insert(id, data);
        Ok(())
    }

    /// Data stored for an identifier.
    pub fn get(&self, id: &str) -> Option<&D> {
        self.entries.get(id)
    }

    /// Remove an identifier, returning its data.
    pub fn remove(&mut self, id: &str) -> Option<D> {
        self.entries.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered identifiers (sorted for deterministic ordering).
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.entries.keys().cloned().collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_remove() {
        let mut registry = ItemRegistry::new();
        registry.put("a", 1).unwrap();
        registry.put("b", 2).unwrap();

        assert_eq!(registry.get("a"), Some(&1));
        assert_eq!(registry.remove("a"), Some(1));
        assert_eq!(registry.get("a"), None);
        assert_eq!(registry.remove("a"), None);
        assert_eq!(registry.ids(), vec!["b"]);
    }

    #[test]
    fn test_duplicate_rejected_and_first_kept() {
        let mut registry = ItemRegistry::new();
        registry.put("a", 1).unwrap();
        assert_eq!(registry.put("a", 2), Err(ListError::DuplicateId("a".into())));
        assert_eq!(registry.get("a"), Some(&1));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut registry = ItemRegistry::<()>::new();
        assert_eq!(registry.put("", ()), Err(ListError::MissingId));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut registry = ItemRegistry::new();
        registry.put("a", "x").unwrap();
        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.contains("a"));
    }
}
