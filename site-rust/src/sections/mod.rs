//! View models for each page section.
//!
//! Section builders are pure functions of the catalog; [`landing_page`] adds
//! the active theme and scroll state. The UI layer turns the result into
//! markup.

mod about;
mod certificates;
mod contact;
mod hero;
mod navbar;
mod projects;

pub use about::{about_section, AboutSection};
pub use certificates::{
    certificates_section, format_certificate_date, CertificateCard, CertificatesSection,
};
pub use contact::{contact_section, ContactSection, Footer, SocialLink};
pub use hero::{hero_section, HeroSection};
pub use navbar::{navbar, NavItem, Navbar};
pub use projects::{projects_section, ProjectCard, ProjectsSection};

use crate::{content::ContentCatalog, scroll_spy::ScrollSpyState, theme::Palette, ThemeState};
use serde::Serialize;

/// Projects shown on the landing page before "view all".
pub const LANDING_PROJECT_LIMIT: usize = 3;
/// Certificates shown on the landing page before "view all".
pub const LANDING_CERTIFICATE_LIMIT: usize = 6;

/// An image with a fallback. Once loading fails the slot stays on the
/// placeholder; there is no retry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ImageSlot {
    Image {
        src: &'static str,
        alt: &'static str,
        placeholder: &'static str,
    },
    Placeholder {
        glyph: &'static str,
    },
}

impl ImageSlot {
    #[must_use]
    pub fn new(src: Option<&'static str>, alt: &'static str, placeholder: &'static str) -> Self {
        match src {
            Some(src) if !src.is_empty() => Self::Image {
                src,
                alt,
                placeholder,
            },
            _ => Self::Placeholder { glyph: placeholder },
        }
    }

    /// The element reported a load failure.
    pub fn on_load_error(&mut self) {
        if let Self::Image { placeholder, .. } = *self {
            *self = Self::Placeholder { glyph: placeholder };
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

/// A link to an external page holding the complete list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewAllLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Everything on the single page, in document order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub theme: ThemeState,
    pub palette: Palette,
    pub navbar: Navbar,
    pub hero: HeroSection,
    pub about: AboutSection,
    pub projects: ProjectsSection,
    pub certificates: CertificatesSection,
    pub contact: ContactSection,
}

#[must_use]
pub fn landing_page(
    catalog: &'static ContentCatalog,
    theme: ThemeState,
    scroll: &ScrollSpyState,
    current_year: i32,
) -> LandingPage {
    LandingPage {
        theme,
        palette: theme.palette(),
        navbar: navbar(catalog, scroll),
        hero: hero_section(catalog),
        about: about_section(catalog),
        projects: projects_section(catalog),
        certificates: certificates_section(catalog),
        contact: contact_section(catalog, current_year),
    }
}
