//! Scroll-spy: UI state derived from the vertical scroll offset.
//!
//! Every scroll event recomputes all three flags from scratch out of the
//! current offset and a [`Layout`] snapshot. Nothing is remembered between
//! events, so repeating an event reproduces the same state.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{HEADER_ALLOWANCE_PX, NAVBAR_SCROLLED_THRESHOLD_PX, SCROLL_TOP_THRESHOLD_PX, SECTION_ACTIVATION_OFFSET_PX};

/// A `section[id]` as laid out at the time of the check.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Whether offset `y` falls in this section's activation window.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        let start = self.top - SECTION_ACTIVATION_OFFSET_PX;
        y > start && y <= start + self.height
    }
}

/// Layout measurements needed by the scroll-spy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    /// Sections in document order.
    pub sections: Vec<SectionBox>,
    /// Top offset of the footer, if the page has one.
    pub footer_top: Option<f64>,
    pub viewport_height: f64,
}

impl Layout {
    /// Document offset of a section, if registered.
    #[must_use]
    pub fn section_top(&self, id: &str) -> Option<f64> {
        self.sections.iter().find(|s| s.id == id).map(|s| s.top)
    }
}

/// The three flags the scroll-spy drives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollState {
    pub navbar_scrolled: bool,
    pub active_section: Option<String>,
    pub scroll_top_visible: bool,
}

impl ScrollState {
    #[must_use]
    pub fn derive(y: f64, layout: &Layout) -> Self {
        Self {
            navbar_scrolled: navbar_scrolled(y),
            active_section: active_section(y, &layout.sections).map(str::to_owned),
            scroll_top_visible: scroll_top_visible(y, layout.viewport_height, layout.footer_top),
        }
    }
}

#[must_use]
pub fn navbar_scrolled(y: f64) -> bool {
    y > NAVBAR_SCROLLED_THRESHOLD_PX
}

/// Id of the section whose window contains `y`. Overlaps go to the last match.
#[must_use]
pub fn active_section(y: f64, sections: &[SectionBox]) -> Option<&str> {
    sections.iter().rev().find(|s| s.contains(y)).map(|s| s.id.as_str())
}

/// The floating button shows past the threshold until the viewport bottom reaches the footer.
#[must_use]
pub fn scroll_top_visible(y: f64, viewport_height: f64, footer_top: Option<f64>) -> bool {
    if y <= SCROLL_TOP_THRESHOLD_PX {
        return false;
    }
    footer_top.map_or(true, |footer| y + viewport_height < footer)
}

/// Scroll offset that puts `target_top` just below the fixed header.
#[must_use]
pub fn scroll_target(target_top: f64) -> f64 {
    target_top - HEADER_ALLOWANCE_PX
}
