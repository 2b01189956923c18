//! Smooth-scroll navigation and the mobile menu.

use tracing::debug;

use crate::sections::{Section, SectionRegistry};

/// Header navigation entries, in display order.
pub const NAV_ENTRIES: [Section; 5] = [
    Section::About,
    Section::Education,
    Section::Experience,
    Section::Projects,
    Section::Contact,
];

/// Something that can bring a section into view.
pub trait Viewport {
    /// Start a smooth scroll to the section's anchor.
    ///
    /// Returns `false` when the anchor element does not exist. A scroll
    /// already in flight is not cancelled; the latest request wins.
    fn scroll_into_view(&self, section: Section) -> bool;
}

/// Navigation state: which sections are reachable and whether the mobile
/// overlay menu is open.
#[derive(Clone, Debug, Default)]
pub struct NavigationController {
    registry: SectionRegistry,
    menu_open: bool,
}

impl NavigationController {
    /// Controller over `registry` with the menu closed.
    pub fn new(registry: SectionRegistry) -> Self {
        Self {
            registry,
            menu_open: false,
        }
    }

    /// Scroll to the section named `name`, then close the mobile menu.
    ///
    /// Unknown names and missing anchors are silently ignored; the menu stays
    /// as it was.
    pub fn navigate_to(&mut self, viewport: &impl Viewport, name: &str) {
        let Some(section) = self.registry.resolve(name) else {
            debug!(name, "ignoring navigation to unknown section");
            return;
        };
        self.navigate_to_section(viewport, section);
    }

    /// Typed variant of [`navigate_to`](Self::navigate_to).
    pub fn navigate_to_section(&mut self, viewport: &impl Viewport, section: Section) {
        if !self.registry.contains(section) || !viewport.scroll_into_view(section) {
            return;
        }
        self.menu_open = false;
    }

    /// Whether the mobile menu is open.
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Flip the mobile menu.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the mobile menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Registry this controller navigates.
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }
}
