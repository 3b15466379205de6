//! Active-section tracking for the navigation bar.

use crate::content::NAV_LINKS;
use serde::Serialize;

/// A section counts as active once its top edge is at most this far below
/// the top of the viewport.
pub const ACTIVE_THRESHOLD_PX: f64 = 150.0;
/// Scroll offset past which the navbar switches to its solid background.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Pick the active section from `(id, top)` pairs in document order.
///
/// Sections are scanned bottom-up and the first one whose top is within
/// `threshold` wins, so the lowest qualifying section is active.
pub fn resolve_active_section<'a, S>(sections: &'a [(S, f64)], threshold: f64) -> Option<&'a str>
where
    S: AsRef<str>,
{
    sections
        .iter()
        .rev()
        .find(|(_, top)| *top <= threshold)
        .map(|(id, _)| id.as_ref())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollSpyState {
    pub active_section: String,
    pub is_scrolled: bool,
}

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    section_ids: Vec<String>,
    state: ScrollSpyState,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(NAV_LINKS.iter().map(|link| link.section_id))
    }
}

impl ScrollSpy {
    /// Track `section_ids` (document order). The first one starts active.
    pub fn new<I, S>(section_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let section_ids: Vec<String> = section_ids.into_iter().map(Into::into).collect();
        let active_section = section_ids.first().cloned().unwrap_or_default();
        Self {
            section_ids,
            state: ScrollSpyState {
                active_section,
                is_scrolled: false,
            },
        }
    }

    #[must_use]
    pub fn state(&self) -> &ScrollSpyState {
        &self.state
    }

    #[must_use]
    pub fn active_section(&self) -> &str {
        &self.state.active_section
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.state.is_scrolled
    }

    /// Handle a scroll event (or the initial measurement on mount).
    ///
    /// `section_top` reports a section's current top offset relative to the
    /// viewport, or `None` if it is not in the document. When no section
    /// qualifies the previous active section is kept. Returns whether the
    /// state changed.
    pub fn on_scroll<F>(&mut self, scroll_y: f64, section_top: F) -> bool
    where
        F: Fn(&str) -> Option<f64>,
    {
        let previous = self.state.clone();

        self.state.is_scrolled = scroll_y > SCROLLED_THRESHOLD_PX;

        let measured: Vec<(&str, f64)> = self
            .section_ids
            .iter()
            .filter_map(|id| section_top(id).map(|top| (id.as_str(), top)))
            .collect();
        if let Some(active) = resolve_active_section(&measured, ACTIVE_THRESHOLD_PX) {
            if active != self.state.active_section {
                self.state.active_section = active.to_string();
            }
        }

        let changed = self.state != previous;
        if changed {
            tracing::trace!(
                active = %self.state.active_section,
                scrolled = self.state.is_scrolled,
                "scroll-spy updated"
            );
        }
        changed
    }

    /// Measure as if the page had jumped straight to `section_id`, with
    /// sections stacked `section_height` pixels apart. Used for the
    /// measurement on mount when there is no real layout. Unknown ids leave
    /// the page at the top.
    pub fn jump_to(&mut self, section_id: &str, section_height: f64) -> bool {
        let target = self
            .section_ids
            .iter()
            .position(|known| known == section_id)
            .unwrap_or(0);
        let layout: Vec<(String, f64)> = self
            .section_ids
            .iter()
            .enumerate()
            .map(|(index, id)| (id.clone(), (index as f64 - target as f64) * section_height))
            .collect();

        self.on_scroll(target as f64 * section_height, |id| {
            layout
                .iter()
                .find(|(known, _)| known == id)
                .map(|(_, top)| *top)
        })
    }
}
