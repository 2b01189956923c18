//! Scroll-driven active-section tracking.
//!
//! On every scroll event the tracker walks the registry in order and picks
//! the first section whose bounding box straddles the marker line
//! [`MARKER_OFFSET`] units below the viewport top. When nothing straddles it
//! the previous answer stands.

use tracing::debug;

use crate::sections::{Section, SectionRegistry};

/// Distance of the marker line from the top of the viewport.
pub const MARKER_OFFSET: f64 = 100.0;

/// Scroll distance after which the header switches to its solid style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// Viewport-relative vertical extent of a rendered section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    /// Distance from viewport top to the element's top edge
    pub top: f64,
    /// Distance from viewport top to the element's bottom edge
    pub bottom: f64,
}

impl SectionBounds {
    /// Bounds from top and bottom edges.
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// `top <= marker && bottom >= marker`, both edges inclusive.
    pub fn straddles(&self, marker: f64) -> bool {
        self.top <= marker && self.bottom >= marker
    }
}

/// Source of section geometry, usually the live DOM.
///
/// `None` means the section has no rendered element and is skipped.
pub trait SectionGeometry {
    /// Current bounds of `section`.
    fn bounds(&self, section: Section) -> Option<SectionBounds>;
}

impl<F> SectionGeometry for F
where
    F: Fn(Section) -> Option<SectionBounds>,
{
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        self(section)
    }
}

/// First section in registry order whose bounds straddle `marker`.
pub fn section_at_marker(
    registry: &SectionRegistry,
    geometry: &impl SectionGeometry,
    marker: f64,
) -> Option<Section> {
    registry.iter().find(|section| {
        geometry
            .bounds(*section)
            .is_some_and(|bounds| bounds.straddles(marker))
    })
}

/// Holder of the active section.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    registry: SectionRegistry,
    active: Section,
    marker: f64,
}

impl ScrollTracker {
    /// Tracker over `registry`, starting on its first section (or `Hero`).
    pub fn new(registry: SectionRegistry) -> Self {
        let active = registry.first().unwrap_or(Section::Hero);
        Self {
            registry,
            active,
            marker: MARKER_OFFSET,
        }
    }

    /// Override the marker offset.
    pub fn with_marker(mut self, marker: f64) -> Self {
        self.marker = marker;
        self
    }

    /// The current active section.
    pub fn active(&self) -> Section {
        self.active
    }

    /// Registry the tracker walks.
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Recompute the active section from fresh geometry.
    ///
    /// Returns the new section only when it differs from the previous one.
    pub fn observe(&mut self, geometry: &impl SectionGeometry) -> Option<Section> {
        let found = section_at_marker(&self.registry, geometry, self.marker)?;
        if found == self.active {
            return None;
        }
        debug!(from = %self.active, to = %found, "active section changed");
        self.active = found;
        Some(found)
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(SectionRegistry::standard())
    }
}

/// Whether the header should render in its scrolled style.
pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Fixed geometry: sections stacked with the given heights, scrolled by `scroll_y`.
    fn stacked(heights: &[(Section, f64)], scroll_y: f64) -> HashMap<Section, SectionBounds> {
        let mut top = -scroll_y;
        heights
            .iter()
            .map(|(section, height)| {
                let bounds = SectionBounds::new(top, top + height);
                top += height;
                (*section, bounds)
            })
            .collect()
    }

    fn geometry(map: HashMap<Section, SectionBounds>) -> impl Fn(Section) -> Option<SectionBounds> {
        move |section| map.get(&section).copied()
    }

    fn full_page() -> Vec<(Section, f64)> {
        Section::ALL.iter().map(|s| (*s, 800.0)).collect()
    }

    #[test]
    fn starts_on_hero() {
        assert_eq!(ScrollTracker::default().active(), Section::Hero);
    }

    #[test]
    fn picks_section_under_marker() {
        let mut tracker = ScrollTracker::default();
        let changed = tracker.observe(&geometry(stacked(&full_page(), 1700.0)));
        assert_eq!(changed, Some(Section::Education));
        assert_eq!(tracker.active(), Section::Education);
    }

    #[test]
    fn marker_edges_are_inclusive() {
        assert!(SectionBounds::new(100.0, 500.0).straddles(MARKER_OFFSET));
        assert!(SectionBounds::new(-300.0, 100.0).straddles(MARKER_OFFSET));
        assert!(!SectionBounds::new(100.5, 500.0).straddles(MARKER_OFFSET));
    }

    #[test]
    fn overlap_resolves_to_first_in_registry_order() {
        let overlapping = |section: Section| match section {
            Section::About => Some(SectionBounds::new(0.0, 400.0)),
            Section::Projects => Some(SectionBounds::new(50.0, 900.0)),
            _ => None,
        };
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.observe(&overlapping), Some(Section::About));

        let reversed = SectionRegistry::new([Section::Projects, Section::About]);
        let mut tracker = ScrollTracker::new(reversed);
        assert_eq!(tracker.observe(&overlapping), None);
        assert_eq!(tracker.active(), Section::Projects);
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let mut tracker = ScrollTracker::default();
        tracker.observe(&geometry(stacked(&full_page(), 3300.0)));
        assert_eq!(tracker.active(), Section::Projects);

        let nothing = |_: Section| Some(SectionBounds::new(200.0, 300.0));
        assert_eq!(tracker.observe(&nothing), None);
        assert_eq!(tracker.active(), Section::Projects);
    }

    #[test]
    fn missing_elements_are_skipped() {
        let only_contact = |section: Section| match section {
            Section::Contact => Some(SectionBounds::new(-20.0, 600.0)),
            _ => None,
        };
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.observe(&only_contact), Some(Section::Contact));
    }

    #[test]
    fn unchanged_section_reports_nothing() {
        let mut tracker = ScrollTracker::default();
        let top = geometry(stacked(&full_page(), 0.0));
        assert_eq!(tracker.observe(&top), None);
        assert_eq!(tracker.active(), Section::Hero);
    }

    #[test]
    fn every_scroll_position_matches_first_straddling_entry() {
        let page = full_page();
        let registry = SectionRegistry::standard();
        for step in 0..60 {
            let scroll_y = f64::from(step) * 83.0;
            let map = stacked(&page, scroll_y);
            let expected = registry
                .iter()
                .find(|s| map[s].straddles(MARKER_OFFSET))
                .unwrap_or(Section::Hero);
            let mut tracker = ScrollTracker::new(registry.clone());
            tracker.observe(&geometry(map));
            assert_eq!(tracker.active(), expected, "scroll_y = {scroll_y}");
        }
    }

    #[test]
    fn header_threshold_is_strict() {
        assert!(!header_is_scrolled(0.0));
        assert!(!header_is_scrolled(50.0));
        assert!(header_is_scrolled(50.5));
    }
}
