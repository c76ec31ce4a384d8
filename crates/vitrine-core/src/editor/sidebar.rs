use serde::{Deserialize, Serialize};

use crate::schema::{PageConfig, Social};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum SidebarAction {
    SetContactPhone { enabled: bool },
    SetContactEmail { enabled: bool },
    SetSocial { social: Social, enabled: bool },
    SetHours { enabled: bool },
    SetAddress { enabled: bool },
}

/// No-op on layouts without a sidebar.
#[must_use]
pub fn apply_sidebar(config: &PageConfig, action: &SidebarAction) -> PageConfig {
    let mut next = config.clone();
    let Some(sidebar) = next.sidebar.as_mut() else {
        return next;
    };
    match action {
        SidebarAction::SetContactPhone { enabled } => sidebar.contact.phone = *enabled,
        SidebarAction::SetContactEmail { enabled } => sidebar.contact.email = *enabled,
        SidebarAction::SetSocial { social, enabled } => sidebar.socials.set(*social, *enabled),
        SidebarAction::SetHours { enabled } => sidebar.hours.enabled = *enabled,
        SidebarAction::SetAddress { enabled } => sidebar.address.enabled = *enabled,
    }
    next
}
