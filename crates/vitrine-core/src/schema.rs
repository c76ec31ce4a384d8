//! Typed page configuration: one document per business, stored as a draft and
//! a published snapshot.
//!
//! Field names serialize in camelCase to match the JSON the editor sends and
//! the JSONB the store keeps.

use serde::{Deserialize, Serialize};

use crate::template::TemplateKey;

/// Version stamped next to every stored snapshot.
pub const SCHEMA_VERSION: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    pub template_key: TemplateKey,
    pub theme: Theme,
    pub hero: HeroConfig,
    pub sections: SectionsConfig,
    /// Present iff `template_key` is a sidebar layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<SidebarConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    Gradient,
    Image,
    Color,
}

impl BackgroundType {
    pub const ALL: [BackgroundType; 3] = [
        BackgroundType::Gradient,
        BackgroundType::Image,
        BackgroundType::Color,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BackgroundType::Gradient => "gradient",
            BackgroundType::Image => "image",
            BackgroundType::Color => "color",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroConfig {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub background_type: BackgroundType,
    pub background_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(rename = "showCTA")]
    pub show_cta: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionsConfig {
    pub services: ServicesSection,
    pub about: AboutSection,
    pub gallery: GallerySection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServicesDisplay {
    Grid,
    List,
}

impl ServicesDisplay {
    pub const ALL: [ServicesDisplay; 2] = [ServicesDisplay::Grid, ServicesDisplay::List];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ServicesDisplay::Grid => "grid",
            ServicesDisplay::List => "list",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesSection {
    pub enabled: bool,
    pub display: ServicesDisplay,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutSection {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GallerySection {
    pub enabled: bool,
    /// Display order; duplicates are allowed.
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarPosition {
    Left,
    Right,
}

impl SidebarPosition {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SidebarPosition::Left => "left",
            SidebarPosition::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarConfig {
    pub position: SidebarPosition,
    pub contact: ContactToggles,
    pub socials: SocialToggles,
    pub hours: Toggle,
    pub address: Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactToggles {
    pub phone: bool,
    pub email: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct SocialToggles {
    pub facebook: bool,
    pub instagram: bool,
    pub tiktok: bool,
    pub youtube: bool,
}

impl SocialToggles {
    #[must_use]
    pub fn is_on(&self, social: Social) -> bool {
        match social {
            Social::Facebook => self.facebook,
            Social::Instagram => self.instagram,
            Social::Tiktok => self.tiktok,
            Social::Youtube => self.youtube,
        }
    }

    pub fn set(&mut self, social: Social, on: bool) {
        match social {
            Social::Facebook => self.facebook = on,
            Social::Instagram => self.instagram = on,
            Social::Tiktok => self.tiktok = on,
            Social::Youtube => self.youtube = on,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggle {
    pub enabled: bool,
}

/// Social network a business may link to from its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Social {
    Facebook,
    Instagram,
    Tiktok,
    Youtube,
}

impl Social {
    pub const ALL: [Social; 4] = [
        Social::Facebook,
        Social::Instagram,
        Social::Tiktok,
        Social::Youtube,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Social::Facebook => "facebook",
            Social::Instagram => "instagram",
            Social::Tiktok => "tiktok",
            Social::Youtube => "youtube",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Social::Facebook => "Facebook",
            Social::Instagram => "Instagram",
            Social::Tiktok => "TikTok",
            Social::Youtube => "YouTube",
        }
    }

    /// Profile URL prefix a bare handle is appended to.
    #[must_use]
    pub fn base_url(self) -> &'static str {
        match self {
            Social::Facebook => "https://facebook.com/",
            Social::Instagram => "https://instagram.com/",
            Social::Tiktok => "https://tiktok.com/@",
            Social::Youtube => "https://youtube.com/@",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_config;

    #[test]
    fn hero_cta_flag_serializes_as_show_cta() {
        let config = default_config(TemplateKey::HeroFull);
        let json = serde_json::to_value(&config).unwrap();
        assert!(json["hero"]["showCTA"].is_boolean());
        assert!(json["hero"].get("showCta").is_none());
    }

    #[test]
    fn non_sidebar_config_omits_sidebar_key() {
        let json = serde_json::to_value(default_config(TemplateKey::HeroFull)).unwrap();
        assert!(json.get("sidebar").is_none());
        assert_eq!(json["templateKey"], "hero-full");
    }

    #[test]
    fn missing_optional_fields_deserialize_as_none() {
        let json = serde_json::json!({
            "templateKey": "hero-full",
            "theme": { "primaryColor": "#10b981", "secondaryColor": "#059669" },
            "hero": {
                "enabled": true,
                "backgroundType": "color",
                "backgroundValue": "",
                "showCTA": false
            },
            "sections": {
                "services": { "enabled": true, "display": "grid" },
                "about": { "enabled": false },
                "gallery": { "enabled": true, "images": [] }
            }
        });
        let config: PageConfig = serde_json::from_value(json).unwrap();
        assert!(config.hero.title.is_none());
        assert!(config.theme.gradient.is_none());
        assert!(config.sidebar.is_none());
    }

    #[test]
    fn social_toggles_set_and_read_back() {
        let mut toggles = SocialToggles {
            facebook: false,
            instagram: false,
            tiktok: false,
            youtube: false,
        };
        toggles.set(Social::Tiktok, true);
        assert!(toggles.is_on(Social::Tiktok));
        assert!(!toggles.is_on(Social::Youtube));
    }
}
