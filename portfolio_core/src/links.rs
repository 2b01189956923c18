//! `mailto:`/`tel:` hrefs and the contact/social link lists.

use crate::data::PersonalInfo;

/// `mailto:` href for an address.
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

/// `tel:` href for a human-formatted phone number (whitespace removed).
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}

/// Icon shown next to a link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkIcon {
    /// Envelope
    Mail,
    /// Handset
    Phone,
    /// Map pin
    Location,
    /// GitHub mark
    Github,
    /// LinkedIn mark
    Linkedin,
    /// Code brackets, for coding-practice profiles
    Code,
}

/// One entry in the contact details or social link list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactLink {
    /// Icon
    pub icon: LinkIcon,
    /// Label, e.g. "Email"
    pub label: &'static str,
    /// Displayed value
    pub value: String,
    /// Target; `None` renders plain text
    pub href: Option<String>,
    /// Open in a new browsing context
    pub external: bool,
}

/// Email, phone and location rows of the contact section.
pub fn contact_details(personal: &PersonalInfo) -> Vec<ContactLink> {
    vec![
        ContactLink {
            icon: LinkIcon::Mail,
            label: "Email",
            value: personal.email.clone(),
            href: Some(mailto_href(&personal.email)),
            external: false,
        },
        ContactLink {
            icon: LinkIcon::Phone,
            label: "Phone",
            value: personal.phone.clone(),
            href: Some(tel_href(&personal.phone)),
            external: false,
        },
        ContactLink {
            icon: LinkIcon::Location,
            label: "Location",
            value: personal.location.clone(),
            href: None,
            external: false,
        },
    ]
}

/// Social profile links; optional profiles are skipped when absent.
pub fn social_links(personal: &PersonalInfo) -> Vec<ContactLink> {
    let mut links = vec![
        ContactLink {
            icon: LinkIcon::Github,
            label: "GitHub",
            value: personal.github.clone(),
            href: Some(personal.github.clone()),
            external: true,
        },
        ContactLink {
            icon: LinkIcon::Linkedin,
            label: "LinkedIn",
            value: personal.linkedin.clone(),
            href: Some(personal.linkedin.clone()),
            external: true,
        },
    ];
    let optional = [
        ("LeetCode", personal.leetcode.as_ref()),
        ("GeeksforGeeks", personal.geeksforgeeks.as_ref()),
    ];
    for (label, url) in optional {
        if let Some(url) = url {
            links.push(ContactLink {
                icon: LinkIcon::Code,
                label,
                value: url.clone(),
                href: Some(url.clone()),
                external: true,
            });
        }
    }
    links.push(ContactLink {
        icon: LinkIcon::Mail,
        label: "Email",
        value: personal.email.clone(),
        href: Some(mailto_href(&personal.email)),
        external: false,
    });
    links
}
