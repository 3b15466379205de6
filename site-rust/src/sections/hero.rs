use super::ImageSlot;
use crate::content::ContentCatalog;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub section_id: &'static str,
    pub greeting: String,
    pub title: &'static str,
    pub typing_phrases: &'static [&'static str],
    /// Fixed word after the typed phrase.
    pub role_suffix: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub avatar: ImageSlot,
    pub resume_url: &'static str,
    /// Anchor the primary call-to-action scrolls to.
    pub cta_target: &'static str,
}

#[must_use]
pub fn hero_section(catalog: &'static ContentCatalog) -> HeroSection {
    let personal = &catalog.personal;
    HeroSection {
        section_id: "home",
        greeting: format!("Hi, I'm {}!", personal.name),
        title: personal.title,
        typing_phrases: catalog.typing_phrases,
        role_suffix: "Developer",
        tagline: personal.tagline,
        description: personal.description,
        avatar: ImageSlot::new(Some(personal.avatar), personal.name, "👨‍💻"),
        resume_url: personal.resume_url,
        cta_target: "projects",
    }
}
