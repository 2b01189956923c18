// Portfolio page sections
// One component per anchor, plus the header, footer and console banner.

mod about;
mod banner;
mod contact;
mod education;
mod experience;
mod footer;
mod header;
mod hero;
mod projects;

pub use about::About;
pub use banner::ConsoleBanner;
pub use contact::Contact;
pub use education::Education;
pub use experience::Experience;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use projects::Projects;

use leptos::prelude::*;
use portfolio_core::links::{ContactLink, LinkIcon};

/// Glyph standing in for an icon font.
pub(crate) fn icon_glyph(icon: LinkIcon) -> &'static str {
    match icon {
        LinkIcon::Mail => "\u{2709}",
        LinkIcon::Phone => "\u{260E}",
        LinkIcon::Location => "\u{2316}",
        LinkIcon::Github => "GH",
        LinkIcon::Linkedin => "in",
        LinkIcon::Code => "</>",
    }
}

/// Anchor for a contact/social link; plain text when it has no target.
pub(crate) fn link_view(link: ContactLink, show_value: bool) -> AnyView {
    let text = if show_value {
        link.value.clone()
    } else {
        link.label.to_string()
    };
    let glyph = icon_glyph(link.icon);
    match link.href {
        Some(href) if link.external => view! {
            <a href=href target="_blank" rel="noopener noreferrer" class="link" title=link.label>
                <span class="icon">{glyph}</span>
                <span>{text}</span>
            </a>
        }
        .into_any(),
        Some(href) => view! {
            <a href=href class="link" title=link.label>
                <span class="icon">{glyph}</span>
                <span>{text}</span>
            </a>
        }
        .into_any(),
        None => view! {
            <span class="link">
                <span class="icon">{glyph}</span>
                <span>{text}</span>
            </span>
        }
        .into_any(),
    }
}
