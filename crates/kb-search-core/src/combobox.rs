//! Combobox interaction state
//!
//! Tracks whether the dropdown is open, which item is highlighted, and the
//! text in the input. Callers pass the current item count into every
//! transition so the highlight always indexes into the live result list.

/// Keys the combobox reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboKey {
    ArrowDown,
    ArrowUp,
    Home,
    End,
    Enter,
    Escape,
}

/// Open/closed and highlight state for a searchable dropdown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboboxState {
    /// Whether the dropdown is shown
    pub is_open: bool,
    /// Highlighted item, always `< item_count` when set
    pub highlighted_index: Option<usize>,
    /// Current input text
    pub input_value: String,
    /// Display text of the last selected item, empty when nothing is selected
    pub selected_text: String,
}

impl ComboboxState {
    /// Create a closed, empty combobox
    pub fn new() -> Self {
        Self::default()
    }

    /// The user edited the input text.
    pub fn input_changed(&mut self, value: impl Into<String>) {
        self.input_value = value.into();
        self.is_open = true;
        self.highlighted_index = None;
    }

    /// Apply a key press. Returns the index to select, if the key selects one.
    pub fn key(&mut self, key: ComboKey, item_count: usize) -> Option<usize> {
        match key {
            ComboKey::ArrowDown => {
                self.is_open = true;
                self.highlighted_index = match (self.highlighted_index, item_count) {
                    (_, 0) => None,
                    (Some(index), n) if index + 1 < n => Some(index + 1),
                    _ => Some(0),
                };
                None
            }
            ComboKey::ArrowUp => {
                self.is_open = true;
                self.highlighted_index = match (self.highlighted_index, item_count) {
                    (_, 0) => None,
                    (Some(index), _) if index > 0 => Some(index - 1),
                    (_, n) => Some(n - 1),
                };
                None
            }
            ComboKey::Home if self.is_open && item_count > 0 => {
                self.highlighted_index = Some(0);
                None
            }
            ComboKey::End if self.is_open && item_count > 0 => {
                self.highlighted_index = Some(item_count - 1);
                None
            }
            ComboKey::Enter if self.is_open => {
                self.highlighted_index.filter(|index| *index < item_count)
            }
            ComboKey::Escape => {
                if self.is_open {
                    self.is_open = false;
                    self.highlighted_index = None;
                } else {
                    self.input_value.clear();
                    self.selected_text.clear();
                }
                None
            }
            ComboKey::Home | ComboKey::End | ComboKey::Enter => None,
        }
    }

    /// The pointer moved over an item.
    pub fn hover(&mut self, index: usize, item_count: usize) {
        if index < item_count {
            self.highlighted_index = Some(index);
        }
    }

    /// An item was chosen; `display_text` replaces the input value.
    pub fn select(&mut self, display_text: impl Into<String>) {
        self.selected_text = display_text.into();
        self.input_value.clone_from(&self.selected_text);
        self.is_open = false;
        self.highlighted_index = None;
    }

    /// Focus left the input; the text snaps back to the selected item.
    pub fn blur(&mut self) {
        self.is_open = false;
        self.highlighted_index = None;
        self.input_value.clone_from(&self.selected_text);
    }

    /// Drop a highlight that no longer points into `item_count` items.
    pub fn clamp(&mut self, item_count: usize) {
        if self.highlighted_index.is_some_and(|index| index >= item_count) {
            self.highlighted_index = None;
        }
    }
}
