use super::{ImageSlot, ViewAllLink, LANDING_PROJECT_LIMIT};
use crate::content::{ContentCatalog, Project};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub image: ImageSlot,
    pub tech_stack: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
}

impl From<&'static Project> for ProjectCard {
    fn from(project: &'static Project) -> Self {
        Self {
            id: project.id,
            title: project.title,
            description: project.description,
            category: project.category,
            image: ImageSlot::new(project.image, project.title, "globe-alt"),
            tech_stack: project.tech_stack,
            live_url: project.live_link(),
            github_url: project.github_url,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsSection {
    pub section_id: &'static str,
    pub cards: Vec<ProjectCard>,
    pub view_all: ViewAllLink,
}

#[must_use]
pub fn projects_section(catalog: &'static ContentCatalog) -> ProjectsSection {
    ProjectsSection {
        section_id: "projects",
        cards: catalog
            .projects
            .iter()
            .take(LANDING_PROJECT_LIMIT)
            .map(ProjectCard::from)
            .collect(),
        view_all: ViewAllLink {
            label: "View All Projects",
            href: catalog.projects_gallery_url,
        },
    }
}
