use crate::content::{ContentCatalog, JourneyGroup, Skill, TechBadge};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutSection {
    pub section_id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub skills: &'static [Skill],
    pub familiar_tools: &'static [TechBadge],
    pub journey: &'static [JourneyGroup],
}

#[must_use]
pub fn about_section(catalog: &'static ContentCatalog) -> AboutSection {
    AboutSection {
        section_id: "about",
        name: catalog.personal.name,
        description: catalog.personal.description,
        skills: catalog.skills,
        familiar_tools: catalog.familiar_tools,
        journey: catalog.journey,
    }
}
