// Home view state.
// Cursor over the trending row and the category and brand shortcut chips.

use crate::catalog::Catalog;

use super::list::SelectableList;

/// A shortcut chip that opens the catalog pre-filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Category(&'static str),
    Brand(&'static str),
}

impl Shortcut {
    pub fn label(&self) -> &'static str {
        match *self {
            Shortcut::Category(name) | Shortcut::Brand(name) => name,
        }
    }

    /// (category, brand) seed for the catalog.
    pub fn filter(&self) -> (Option<&'static str>, Option<&'static str>) {
        match *self {
            Shortcut::Category(name) => (Some(name), None),
            Shortcut::Brand(name) => (None, Some(name)),
        }
    }
}

/// Category chips followed by brand chips.
pub fn shortcuts() -> Vec<Shortcut> {
    Catalog::shop_categories()
        .map(Shortcut::Category)
        .chain(Catalog::shop_brands().map(Shortcut::Brand))
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub trending: SelectableList,
    /// Index into `shortcuts()`.
    pub shortcut: usize,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_shortcut(&mut self) {
        self.shortcut = (self.shortcut + 1) % shortcuts().len();
    }

    pub fn prev_shortcut(&mut self) {
        let len = shortcuts().len();
        self.shortcut = (self.shortcut + len - 1) % len;
    }

    pub fn current_shortcut(&self) -> Option<Shortcut> {
        shortcuts().get(self.shortcut).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts_skip_all_sentinel() {
        let chips = shortcuts();
        assert_eq!(chips.len(), 5 + 7);
        assert_eq!(chips[0], Shortcut::Category("Sneakers"));
        assert_eq!(chips[5], Shortcut::Brand("Nike"));
        assert!(chips.iter().all(|c| c.label() != "All"));
    }

    #[test]
    fn test_shortcut_cursor_wraps() {
        let mut home = HomeState::new();
        home.prev_shortcut();
        assert_eq!(home.current_shortcut(), Some(Shortcut::Brand("AICE")));
        home.next_shortcut();
        assert_eq!(home.current_shortcut(), Some(Shortcut::Category("Sneakers")));
        assert_eq!(
            home.current_shortcut().map(|s| s.filter()),
            Some((Some("Sneakers"), None))
        );
    }
}
