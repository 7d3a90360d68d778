//! Known version names and their resolved values.

use std::collections::BTreeMap;

/// Mutable name → version-string mapping.
///
/// Seeded once from `gradle.properties`, then written to during the scan:
/// every literal version discovered is injected under its artifact name so a
/// later build file can reference it symbolically. The registry is never
/// persisted back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionRegistry {
    entries: BTreeMap<String, String>,
}

impl VersionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for VersionRegistry {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_get() {
        let mut registry = VersionRegistry::new();
        registry.insert("micronautVersion", "3.8.1");
        assert_eq!(registry.get("micronautVersion"), Some("3.8.1"));
        assert_eq!(registry.get("kotlinVersion"), None);
    }

    #[test]
    fn later_insert_wins() {
        let mut registry = VersionRegistry::new();
        registry.insert("lombok", "1.18.24");
        registry.insert("lombok", "1.18.30");
        assert_eq!(registry.get("lombok"), Some("1.18.30"));
        assert_eq!(registry.len(), 1);
    }
}
