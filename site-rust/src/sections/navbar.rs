use crate::{
    content::{ContentCatalog, NavLink, NAV_LINKS},
    scroll_spy::ScrollSpyState,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub name: &'static str,
    pub href: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navbar {
    pub brand: &'static str,
    pub items: Vec<NavItem>,
    /// Solid background once the page is scrolled.
    pub is_scrolled: bool,
    pub resume_url: &'static str,
    /// Collapsed link list shown on narrow screens.
    pub is_mobile_open: bool,
}

impl Navbar {
    pub fn toggle_mobile(&mut self) -> bool {
        self.is_mobile_open = !self.is_mobile_open;
        self.is_mobile_open
    }

    /// Follow a link to `section_id`. The mobile menu always closes; the
    /// returned anchor is `None` for an unknown section.
    pub fn navigate(&mut self, section_id: &str) -> Option<String> {
        self.is_mobile_open = false;
        NAV_LINKS
            .iter()
            .find(|link| link.section_id == section_id)
            .map(NavLink::href)
    }
}

#[must_use]
pub fn navbar(catalog: &'static ContentCatalog, scroll: &ScrollSpyState) -> Navbar {
    Navbar {
        brand: catalog.personal.name,
        items: NAV_LINKS
            .iter()
            .map(|link| NavItem {
                name: link.name,
                href: link.href(),
                is_active: link.section_id == scroll.active_section,
            })
            .collect(),
        is_scrolled: scroll.is_scrolled,
        resume_url: catalog.personal.resume_url,
        is_mobile_open: false,
    }
}
