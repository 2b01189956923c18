//! Section ids and the ordered section registry.
//!
//! The registry order matters: the scroll tracker walks it front to back and
//! the first section under the marker point wins.

use std::fmt;
use std::str::FromStr;

use crate::error::PortfolioError;

/// A named, anchorable region of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Landing banner
    Hero,
    /// Bio and skills
    About,
    /// Education history
    Education,
    /// Work experience
    Experience,
    /// Project showcase
    Projects,
    /// Contact form
    Contact,
}

impl Section {
    /// Every section, in page order.
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Education,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    /// DOM id of the section's anchor element.
    pub fn anchor_id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Education => "Education",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor_id())
    }
}

impl FromStr for Section {
    type Err = PortfolioError;

    /// Parses an anchor id, exactly as it appears in the document
    /// (`"about"`, never `"About"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.anchor_id() == s)
            .ok_or_else(|| PortfolioError::UnknownSection(s.to_string()))
    }
}

/// Ordered list of sections present on a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionRegistry {
    order: Vec<Section>,
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl SectionRegistry {
    /// Registry with the given order. Duplicates are dropped, first one kept.
    pub fn new(sections: impl IntoIterator<Item = Section>) -> Self {
        let mut order = Vec::new();
        for section in sections {
            if !order.contains(&section) {
                order.push(section);
            }
        }
        Self { order }
    }

    /// All six sections: hero, about, education, experience, projects, contact.
    pub fn standard() -> Self {
        Self::new(Section::ALL)
    }

    /// Sections in registry order.
    pub fn iter(&self) -> impl Iterator<Item = Section> + '_ {
        self.order.iter().copied()
    }

    /// Whether `section` is registered.
    pub fn contains(&self, section: Section) -> bool {
        self.order.contains(&section)
    }

    /// Resolve a section name, returning `None` for unknown or unregistered names.
    pub fn resolve(&self, name: &str) -> Option<Section> {
        name.parse::<Section>()
            .ok()
            .filter(|section| self.contains(*section))
    }

    /// First registered section.
    pub fn first(&self) -> Option<Section> {
        self.order.first().copied()
    }

    /// Number of registered sections.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no section is registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
