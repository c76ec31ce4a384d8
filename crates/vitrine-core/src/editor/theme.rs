use serde::{Deserialize, Serialize};

use crate::schema::{Gradient, PageConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum ThemeAction {
    SetPrimaryColor { color: String },
    SetSecondaryColor { color: String },
    SetGradient { from: String, to: String },
    ClearGradient,
}

#[must_use]
pub fn apply_theme(config: &PageConfig, action: &ThemeAction) -> PageConfig {
    let mut next = config.clone();
    let theme = &mut next.theme;
    match action {
        ThemeAction::SetPrimaryColor { color } => theme.primary_color.clone_from(color),
        ThemeAction::SetSecondaryColor { color } => theme.secondary_color.clone_from(color),
        ThemeAction::SetGradient { from, to } => {
            theme.gradient = Some(Gradient {
                from: from.clone(),
                to: to.clone(),
            });
        }
        ThemeAction::ClearGradient => theme.gradient = None,
    }
    next
}
