use serde::{Deserialize, Serialize};

use crate::schema::{PageConfig, ServicesDisplay};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum SectionsAction {
    SetServicesEnabled {
        enabled: bool,
    },
    SetServicesDisplay {
        display: ServicesDisplay,
    },
    SetServicesTitle {
        #[serde(default)]
        title: Option<String>,
    },
    SetAboutEnabled {
        enabled: bool,
    },
    SetAboutContent {
        #[serde(default)]
        content: Option<String>,
    },
    SetGalleryEnabled {
        enabled: bool,
    },
}

#[must_use]
pub fn apply_sections(config: &PageConfig, action: &SectionsAction) -> PageConfig {
    let mut next = config.clone();
    let sections = &mut next.sections;
    match action {
        SectionsAction::SetServicesEnabled { enabled } => sections.services.enabled = *enabled,
        SectionsAction::SetServicesDisplay { display } => sections.services.display = *display,
        SectionsAction::SetServicesTitle { title } => sections.services.title.clone_from(title),
        SectionsAction::SetAboutEnabled { enabled } => sections.about.enabled = *enabled,
        SectionsAction::SetAboutContent { content } => sections.about.content.clone_from(content),
        SectionsAction::SetGalleryEnabled { enabled } => sections.gallery.enabled = *enabled,
    }
    next
}
