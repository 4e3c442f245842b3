/// Fixed catalog of orderable items
///
/// The catalog is compiled into the binary and never changes while the
/// application runs. Items carry no identifier besides their display name.

/// Item names in display order
pub const ITEMS: [&str; 6] = [
    "Pães",
    "Bolo",
    "Salgados",
    "Doces",
    "Sanduíches Naturais",
    "Refrigerantes",
];

/// Read-only view over the bakery catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Catalog;

impl Catalog {
    /// All item names in display order
    pub fn items(&self) -> &'static [&'static str] {
        &ITEMS
    }

    /// Number of items in the catalog
    pub fn len(&self) -> usize {
        ITEMS.len()
    }

    pub fn is_empty(&self) -> bool {
        ITEMS.is_empty()
    }

    /// Item at the given position, if any
    pub fn get(&self, index: usize) -> Option<&'static str> {
        ITEMS.get(index).copied()
    }

    /// Whether `name` is exactly one of the catalog entries
    pub fn contains(&self, name: &str) -> bool {
        ITEMS.iter().any(|item| *item == name)
    }

    /// Position of `name` in the catalog
    pub fn position(&self, name: &str) -> Option<usize> {
        ITEMS.iter().position(|item| *item == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let catalog = Catalog;
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get(0), Some("Pães"));
        assert_eq!(catalog.get(5), Some("Refrigerantes"));
        assert_eq!(catalog.get(6), None);
    }

    #[test]
    fn test_catalog_lookup_is_exact() {
        let catalog = Catalog;
        assert!(catalog.contains("Bolo"));
        assert!(!catalog.contains("bolo"));
        assert!(!catalog.contains(""));
        assert_eq!(catalog.position("Sanduíches Naturais"), Some(4));
        assert_eq!(catalog.position("Pizza"), None);
    }
}
