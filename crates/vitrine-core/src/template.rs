use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::schema::SidebarPosition;

/// Structural layout of a business page.
///
/// The set is closed: every consumer matches on it exhaustively, so adding a
/// variant forces a renderer branch and a default config for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKey {
    SidebarLeft,
    SidebarRight,
    HeroFull,
}

impl TemplateKey {
    pub const ALL: [TemplateKey; 3] = [
        TemplateKey::SidebarLeft,
        TemplateKey::SidebarRight,
        TemplateKey::HeroFull,
    ];

    /// Layout served when a stored key is no longer recognized.
    pub const FALLBACK: TemplateKey = TemplateKey::SidebarRight;

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKey::SidebarLeft => "sidebar-left",
            TemplateKey::SidebarRight => "sidebar-right",
            TemplateKey::HeroFull => "hero-full",
        }
    }

    /// Side the sidebar sits on, or `None` for full-width layouts.
    #[must_use]
    pub fn sidebar_position(self) -> Option<SidebarPosition> {
        match self {
            TemplateKey::SidebarLeft => Some(SidebarPosition::Left),
            TemplateKey::SidebarRight => Some(SidebarPosition::Right),
            TemplateKey::HeroFull => None,
        }
    }

    #[must_use]
    pub fn has_sidebar(self) -> bool {
        self.sidebar_position().is_some()
    }
}

impl std::fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown template key: '{0}'")]
pub struct UnknownTemplateKey(pub String);

impl FromStr for TemplateKey {
    type Err = UnknownTemplateKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownTemplateKey(s.to_string()))
    }
}

/// Template selector entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    pub key: TemplateKey,
    pub name: &'static str,
    pub description: &'static str,
    pub has_sidebar: bool,
}

#[must_use]
pub fn template_catalog() -> Vec<TemplateInfo> {
    TemplateKey::ALL
        .into_iter()
        .map(|key| {
            let (name, description) = match key {
                TemplateKey::SidebarLeft => (
                    "Sidebar gauche",
                    "Contenu principal à droite, coordonnées et horaires dans une colonne à gauche.",
                ),
                TemplateKey::SidebarRight => (
                    "Sidebar droite",
                    "Contenu principal à gauche, coordonnées et horaires dans une colonne à droite.",
                ),
                TemplateKey::HeroFull => (
                    "Pleine largeur",
                    "Grande bannière et sections empilées sur toute la largeur.",
                ),
            };
            TemplateInfo {
                key,
                name,
                description,
                has_sidebar: key.has_sidebar(),
            }
        })
        .collect()
}
