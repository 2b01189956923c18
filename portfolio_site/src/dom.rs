// DOM adapters for the scroll tracker and navigation controller

use portfolio_core::{Section, SectionBounds, SectionGeometry, Viewport};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

fn section_element(section: Section) -> Option<web_sys::Element> {
    web_sys::window()?
        .document()?
        .get_element_by_id(section.anchor_id())
}

/// Reads section bounding boxes from the live document.
pub struct DomGeometry;

impl SectionGeometry for DomGeometry {
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        let rect = section_element(section)?.get_bounding_client_rect();
        Some(SectionBounds::new(rect.top(), rect.bottom()))
    }
}

/// Smooth-scrolls the window to section anchors.
pub struct DomViewport;

impl Viewport for DomViewport {
    fn scroll_into_view(&self, section: Section) -> bool {
        let Some(element) = section_element(section) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Vertical scroll offset of the window, 0 when unavailable.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}
