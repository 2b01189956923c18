//! # portfolio_core
//!
//! Everything in the portfolio that is not markup: the static data set, the
//! section registry, scroll-driven active-section tracking, smooth-scroll
//! navigation, the contact form state machine and the project filter.
//!
//! The crate has no DOM or network dependency. The site supplies geometry,
//! a viewport and a contact transport through small traits; the server shares
//! the wire types in [`api`].
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio_core::{CategoryFilter, PortfolioData, filter_projects};
//!
//! let data = PortfolioData::embedded().expect("embedded data parses");
//! let all = filter_projects(&data.projects, CategoryFilter::All);
//! assert_eq!(all.len(), data.projects.len());
//! ```
//!
//! ## Architecture
//!
//! - [`data`] - Data model types
//! - [`content`] - Embedded portfolio data
//! - [`sections`] - Section ids and the ordered registry
//! - [`scroll`] - Active-section tracker
//! - [`nav`] - Navigation controller and mobile menu
//! - [`contact`] - Contact form state and submission
//! - [`filter`] - Project category filtering
//! - [`links`] - `mailto:`/`tel:` and social link builders
//! - [`api`] - Contact API wire types

#![warn(missing_docs)]

pub mod api;
pub mod contact;
pub mod content;
pub mod data;
pub mod error;
pub mod filter;
pub mod links;
pub mod nav;
pub mod scroll;
pub mod sections;

pub use api::{ContactRequest, ContactResponse, ErrorBody};
pub use contact::{
    ContactForm, ContactTransport, Field, Notification, NotificationKind, SubmitError,
    SubmitPhase, submit,
};
pub use data::{
    Achievement, Certification, EducationEntry, ExperienceEntry, Grade, PersonalInfo,
    PortfolioData, ProjectCategory, ProjectEntry, ProjectStatus, Skills,
};
pub use error::PortfolioError;
pub use filter::{CategoryFilter, FILTER_CHOICES, TechBadges, filter_projects, visible_tech};
pub use nav::{NAV_ENTRIES, NavigationController, Viewport};
pub use scroll::{
    HEADER_SCROLL_THRESHOLD, MARKER_OFFSET, ScrollTracker, SectionBounds, SectionGeometry,
    header_is_scrolled,
};
pub use sections::{Section, SectionRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
