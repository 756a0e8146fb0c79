//! Scroll tracking: reads the window's scroll offset and viewport, and owns
//! the thresholds the header, nav and back-to-top button react to.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config;

/// Current vertical scroll offset, never negative (overscroll bounce is clamped).
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
        .max(0.0)
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn is_header_scrolled(offset: f64) -> bool {
    offset >= config::HEADER_SCROLLED_AT
}

pub fn shows_back_to_top(offset: f64) -> bool {
    offset >= config::BACK_TO_TOP_AT
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    /// `[top - 100, top - 100 + height)`: the nav switches a little before
    /// the section reaches the top so the fixed header doesn't hide it.
    pub fn contains(&self, offset: f64) -> bool {
        let start = self.top - config::SECTION_TOP_OFFSET;
        offset >= start && offset < start + self.height
    }
}

/// First section, in document order, whose range holds `offset`.
pub fn section_at(sections: &[SectionBounds], offset: f64) -> Option<&str> {
    sections
        .iter()
        .find(|section| section.contains(offset))
        .map(|section| section.id.as_str())
}

/// Measures every `section[id]` on the page, in document order.
pub fn measure_sections() -> Vec<SectionBounds> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionBounds {
            id: section.id(),
            top: f64::from(section.offset_top()),
            height: f64::from(section.offset_height()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds { id: "home".into(), top: 0.0, height: 700.0 },
            SectionBounds { id: "services".into(), top: 700.0, height: 900.0 },
            SectionBounds { id: "products".into(), top: 1600.0, height: 800.0 },
        ]
    }

    #[test]
    fn header_flag_flips_at_fifty() {
        assert!(!is_header_scrolled(0.0));
        assert!(!is_header_scrolled(49.9));
        assert!(is_header_scrolled(50.0));
        assert!(is_header_scrolled(1200.0));
    }

    #[test]
    fn back_to_top_appears_at_350() {
        assert!(!shows_back_to_top(349.0));
        assert!(shows_back_to_top(350.0));
    }

    #[test]
    fn section_switches_a_hundred_pixels_early() {
        let sections = sections();
        assert_eq!(section_at(&sections, 0.0), Some("home"));
        assert_eq!(section_at(&sections, 599.0), Some("home"));
        assert_eq!(section_at(&sections, 600.0), Some("services"));
        assert_eq!(section_at(&sections, 1500.0), Some("products"));
    }

    #[test]
    fn offsets_outside_every_section_match_nothing() {
        let sections = sections();
        assert_eq!(section_at(&sections, 2300.0), None);
        assert_eq!(section_at(&sections, 10_000.0), None);
        assert_eq!(section_at(&[], 10.0), None);
    }

    #[test]
    fn a_gap_before_the_first_section_matches_nothing() {
        let sections = vec![SectionBounds { id: "about".into(), top: 900.0, height: 400.0 }];
        assert_eq!(section_at(&sections, 100.0), None);
        assert_eq!(section_at(&sections, 800.0), Some("about"));
    }
}
