use serde::{Deserialize, Serialize};

use crate::schema::{BackgroundType, PageConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum HeroAction {
    SetEnabled {
        enabled: bool,
    },
    SetTitle {
        #[serde(default)]
        title: Option<String>,
    },
    SetDescription {
        #[serde(default)]
        description: Option<String>,
    },
    SetBackgroundType {
        #[serde(rename = "backgroundType")]
        background_type: BackgroundType,
    },
    SetBackgroundValue {
        value: String,
    },
    SetShowCta {
        #[serde(rename = "showCTA")]
        show_cta: bool,
    },
}

#[must_use]
pub fn apply_hero(config: &PageConfig, action: &HeroAction) -> PageConfig {
    let mut next = config.clone();
    let hero = &mut next.hero;
    match action {
        HeroAction::SetEnabled { enabled } => hero.enabled = *enabled,
        HeroAction::SetTitle { title } => hero.title.clone_from(title),
        HeroAction::SetDescription { description } => hero.description.clone_from(description),
        HeroAction::SetBackgroundType { background_type } => {
            hero.background_type = *background_type;
        }
        HeroAction::SetBackgroundValue { value } => hero.background_value.clone_from(value),
        HeroAction::SetShowCta { show_cta } => hero.show_cta = *show_cta,
    }
    next
}
