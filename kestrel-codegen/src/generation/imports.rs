//! Import collection utilities.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Maintains package insertion order for deterministic output.
///
/// # Example
///
/// ```
/// use kestrel_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add_path("com.example.models.Pet");
/// imports.add_path("com.example.models.Category");
/// imports.add_path("java.util.UUID");
///
/// // Render for Kotlin
/// for path in imports.paths() {
///     println!("import {}", path);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Package -> set of symbols (sorted for deterministic output)
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a package.
    pub fn add(&mut self, package: &str, symbol: &str) {
        self.imports
            .entry(package.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Add a fully-qualified path (e.g., `java.util.UUID`).
    ///
    /// A path without a package is recorded as a package with no symbols.
    pub fn add_path(&mut self, path: &str) {
        match path.rsplit_once('.') {
            Some((package, symbol)) => self.add(package, symbol),
            None => {
                self.imports.entry(path.to_string()).or_default();
            }
        }
    }

    /// Check if a specific symbol is imported from a package.
    pub fn has_symbol(&self, package: &str, symbol: &str) -> bool {
        self.imports
            .get(package)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Fully-qualified import paths, packages in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = String> + '_ {
        self.imports.iter().flat_map(|(package, symbols)| {
            let bare = symbols.is_empty().then(|| package.clone());
            bare.into_iter().chain(
                symbols
                    .iter()
                    .map(move |symbol| format!("{}.{}", package, symbol)),
            )
        })
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of packages.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_collector_basic() {
        let mut imports = ImportCollector::new();
        imports.add("java.util", "UUID");
        imports.add("java.util", "Calendar");
        imports.add("com.example.models", "Pet");

        assert!(imports.has_symbol("java.util", "UUID"));
        assert!(!imports.has_symbol("java.util", "Date"));
        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn test_add_path() {
        let mut imports = ImportCollector::new();
        imports.add_path("com.example.models.Pet");
        imports.add_path("com.example.models.Pet");
        imports.add_path("Standalone");

        assert!(imports.has_symbol("com.example.models", "Pet"));
        assert_eq!(imports.paths().last().as_deref(), Some("Standalone"));
        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn test_paths_sorted_within_package() {
        let mut imports = ImportCollector::new();
        imports.add_path("com.example.models.Tag");
        imports.add_path("java.util.UUID");
        imports.add_path("com.example.models.Category");
        imports.add_path("Standalone");

        let paths: Vec<String> = imports.paths().collect();
        assert_eq!(
            paths,
            [
                "com.example.models.Category",
                "com.example.models.Tag",
                "java.util.UUID",
                "Standalone",
            ]
        );
    }

    #[test]
    fn test_empty() {
        let imports = ImportCollector::new();
        assert!(imports.is_empty());
        assert_eq!(imports.paths().count(), 0);
    }
}
