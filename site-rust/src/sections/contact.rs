use crate::content::ContentCatalog;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub name: &'static str,
    /// Shown text: the address for email, the handle for profiles.
    pub value: &'static str,
    pub href: String,
    pub description: &'static str,
    /// Brand color of the icon.
    pub color: &'static str,
    /// Email opens the mail client in place; profiles open a new tab.
    pub opens_new_tab: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub name: &'static str,
    pub home_anchor: &'static str,
    pub copyright: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSection {
    pub section_id: &'static str,
    pub links: Vec<SocialLink>,
    pub footer: Footer,
}

#[must_use]
pub fn contact_section(catalog: &'static ContentCatalog, current_year: i32) -> ContactSection {
    let contact = &catalog.contact;
    let profile = |name, url: &'static str, description, color| SocialLink {
        name,
        value: profile_handle(url),
        href: url.to_string(),
        description,
        color,
        opens_new_tab: true,
    };

    ContactSection {
        section_id: "contact",
        links: vec![
            SocialLink {
                name: "Email",
                value: contact.email,
                href: format!("mailto:{}", contact.email),
                description: "Send me an email to collaborate",
                color: "#EA4335",
                opens_new_tab: false,
            },
            profile(
                "GitHub",
                contact.github,
                "View my repositories & contributions",
                "#9ca3af",
            ),
            profile(
                "Instagram",
                contact.instagram,
                "Follow for the latest updates",
                "#E4405F",
            ),
            profile(
                "LinkedIn",
                contact.linkedin,
                "Connect for professional networking",
                "#0A66C2",
            ),
        ],
        footer: Footer {
            name: catalog.personal.name,
            home_anchor: "#home",
            copyright: format!(
                "Copyright © {current_year} {}. All rights reserved.",
                catalog.personal.name
            ),
        },
    }
}

/// Last path segment of a profile URL.
fn profile_handle(url: &'static str) -> &'static str {
    url.rsplit('/').next().unwrap_or(url)
}
