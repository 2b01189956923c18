// Shared reactive state: active section, header style and the nav controller

use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use portfolio_core::{
    NavigationController, PortfolioData, ScrollTracker, Section, SectionRegistry,
    header_is_scrolled,
};

use crate::dom::{DomGeometry, DomViewport, scroll_y};

#[derive(Clone, Copy)]
pub struct SiteState {
    /// Section currently under the marker line
    pub active: RwSignal<Section>,
    /// Header switches to its opaque style past the threshold
    pub scrolled: RwSignal<bool>,
    pub nav: RwSignal<NavigationController>,
}

impl SiteState {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::Hero),
            scrolled: RwSignal::new(false),
            nav: RwSignal::new(NavigationController::new(SectionRegistry::standard())),
        }
    }

    /// Smooth-scroll to `name`; unknown names and missing anchors do nothing.
    pub fn navigate(&self, name: &str) {
        self.nav.update(|nav| nav.navigate_to(&DomViewport, name));
    }

    pub fn navigate_to(&self, section: Section) {
        self.nav
            .update(|nav| nav.navigate_to_section(&DomViewport, section));
    }

    pub fn menu_open(&self) -> bool {
        self.nav.with(|nav| nav.is_menu_open())
    }

    pub fn toggle_menu(&self) {
        self.nav.update(|nav| nav.toggle_menu());
    }

    /// Subscribe to window scroll events for the lifetime of the current owner.
    ///
    /// Every event re-evaluates the header flag and the active section; the
    /// listener is removed when the owner is cleaned up.
    pub fn track_scroll(&self) {
        let state = *self;
        let tracker = StoredValue::new(ScrollTracker::new(SectionRegistry::standard()));
        let handle = window_event_listener(ev::scroll, move |_| {
            let scrolled = header_is_scrolled(scroll_y());
            if state.scrolled.get_untracked() != scrolled {
                state.scrolled.set(scrolled);
            }
            tracker.update_value(|tracker| {
                if let Some(section) = tracker.observe(&DomGeometry) {
                    state.active.set(section);
                }
            });
        });
        on_cleanup(move || handle.remove());
    }
}

impl Default for SiteState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_site_state() -> SiteState {
    use_context::<SiteState>().unwrap_or_default()
}

pub fn use_portfolio() -> Arc<PortfolioData> {
    use_context::<Arc<PortfolioData>>().unwrap_or_default()
}
