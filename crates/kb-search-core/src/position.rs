//! Dropdown placement relative to the input box

use crate::config::LayoutConfig;

/// A measured bounding rectangle in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Viewport offsets for the fixed-position dropdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuPosition {
    pub top: f64,
    pub left: f64,
}

impl MenuPosition {
    /// Inline CSS for the offsets
    pub fn to_style(self) -> String {
        format!("top: {}px; left: {}px;", self.top, self.left)
    }
}

/// Where the dropdown goes for an input box measured at `anchor`.
///
/// Sits `menu_gap` below the box. In compact layout the left edge is pinned
/// to `compact_margin` instead of following the box. `None` until the box
/// has been measured.
pub fn menu_position(anchor: Option<Rect>, layout: &LayoutConfig) -> Option<MenuPosition> {
    let rect = anchor?;
    let left = if layout.compact {
        layout.compact_margin
    } else {
        rect.left
    };
    Some(MenuPosition {
        top: rect.top + rect.height + layout.menu_gap,
        left,
    })
}

/// Last measured dropdown position, forgotten whenever the dropdown closes
/// so a reopened menu never shows at an old offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MenuPlacement {
    position: Option<MenuPosition>,
}

impl MenuPlacement {
    /// Record a fresh measurement of the input box.
    pub fn measured(&mut self, anchor: Rect, layout: &LayoutConfig) {
        self.position = menu_position(Some(anchor), layout);
    }

    /// The dropdown closed.
    pub fn closed(&mut self) {
        self.position = None;
    }

    /// Offsets to render with, if measured since the last open
    pub const fn position(&self) -> Option<MenuPosition> {
        self.position
    }
}
