// Selection cursor for list views.
// Wraps ratatui's ListState and keeps the cursor inside the current item count.

use ratatui::widgets::ListState;

/// Keyboard-driven selection over a list whose items live elsewhere.
#[derive(Debug, Clone, Default)]
pub struct SelectableList {
    pub list_state: ListState,
}

impl SelectableList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently selected index.
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Select the next item in a list of `len` items.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    len - 1 // Stay at end
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Select the previous item in a list of `len` items.
    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Keep the selection valid after the list changed size.
    pub fn clamp(&mut self, len: usize) {
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            Some(_) => {}
        }
    }

    /// Reset selection to the first item.
    pub fn reset(&mut self, len: usize) {
        self.list_state = ListState::default();
        if len > 0 {
            self.list_state.select(Some(0));
        }
    }

    /// Pick the selected element out of a slice.
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.list_state.selected()?)
    }
}
