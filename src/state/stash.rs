// Stash (wishlist) membership.
// A set of saved product ids with a single toggle operation.

use std::collections::HashSet;

use crate::catalog::Product;

/// Result of toggling a product in the stash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StashChange {
    Added,
    Removed,
}

#[derive(Debug, Clone, Default)]
pub struct Stash {
    ids: HashSet<String>,
}

impl Stash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present.
    pub fn toggle(&mut self, id: &str) -> StashChange {
        if self.ids.remove(id) {
            StashChange::Removed
        } else {
            self.ids.insert(id.to_string());
            StashChange::Added
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Stashed products, in the order they appear in `products`.
    pub fn filter<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.contains(&p.id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_toggle_is_an_involution() {
        let mut stash = Stash::new();
        assert!(!stash.contains("3"));

        assert_eq!(stash.toggle("3"), StashChange::Added);
        assert!(stash.contains("3"));

        assert_eq!(stash.toggle("3"), StashChange::Removed);
        assert!(!stash.contains("3"));
        assert!(stash.is_empty());
    }

    #[test]
    fn test_filter_follows_catalog_order() {
        let catalog = Catalog::builtin();
        let mut stash = Stash::new();
        stash.toggle("15");
        stash.toggle("1");
        stash.toggle("unknown");

        let ids: Vec<&str> = stash
            .filter(catalog.products())
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "15"]);
        assert_eq!(stash.len(), 3);
    }
}
