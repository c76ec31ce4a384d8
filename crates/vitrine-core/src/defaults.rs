use crate::schema::{
    AboutSection, BackgroundType, ContactToggles, GallerySection, Gradient, HeroConfig,
    PageConfig, SectionsConfig, ServicesDisplay, ServicesSection, SidebarConfig, SocialToggles,
    Theme, Toggle,
};
use crate::template::TemplateKey;

pub const DEFAULT_PRIMARY_COLOR: &str = "#10b981";
pub const DEFAULT_SECONDARY_COLOR: &str = "#059669";
pub const DEFAULT_GRADIENT_CLASS: &str = "bg-gradient-to-br from-emerald-500 to-emerald-700";

/// Build the canonical configuration for a template.
///
/// Total and side-effect free. The result always passes
/// [`crate::validate::validate`], and carries a `sidebar` block exactly when
/// the template is a sidebar layout.
#[must_use]
pub fn default_config(template_key: TemplateKey) -> PageConfig {
    // Sidebar layouts keep the main column narrow, so services read better as a list.
    let services_display = if template_key.has_sidebar() {
        ServicesDisplay::List
    } else {
        ServicesDisplay::Grid
    };

    PageConfig {
        template_key,
        theme: Theme {
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            gradient: Some(Gradient {
                from: DEFAULT_PRIMARY_COLOR.to_string(),
                to: DEFAULT_SECONDARY_COLOR.to_string(),
            }),
        },
        hero: HeroConfig {
            enabled: true,
            title: None,
            description: None,
            background_type: BackgroundType::Gradient,
            background_value: DEFAULT_GRADIENT_CLASS.to_string(),
            background_image: None,
            show_cta: true,
        },
        sections: SectionsConfig {
            services: ServicesSection {
                enabled: true,
                display: services_display,
                title: None,
            },
            about: AboutSection {
                enabled: true,
                content: None,
            },
            gallery: GallerySection {
                enabled: true,
                images: Vec::new(),
            },
        },
        sidebar: template_key.sidebar_position().map(|position| SidebarConfig {
            position,
            contact: ContactToggles {
                phone: true,
                email: true,
            },
            socials: SocialToggles {
                facebook: true,
                instagram: true,
                tiktok: true,
                youtube: true,
            },
            hours: Toggle { enabled: true },
            address: Toggle { enabled: true },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SidebarPosition;
    use crate::validate::validate;

    #[test]
    fn every_default_is_schema_valid() {
        for key in TemplateKey::ALL {
            let config = default_config(key);
            assert!(validate(&config).is_ok(), "default for {key} failed validation");
        }
    }

    #[test]
    fn sidebar_present_iff_key_starts_with_sidebar() {
        for key in TemplateKey::ALL {
            let config = default_config(key);
            assert_eq!(
                config.sidebar.is_some(),
                key.as_str().starts_with("sidebar-"),
                "sidebar presence mismatch for {key}"
            );
        }
    }

    #[test]
    fn sidebar_position_follows_template() {
        let left = default_config(TemplateKey::SidebarLeft);
        let right = default_config(TemplateKey::SidebarRight);
        assert_eq!(left.sidebar.unwrap().position, SidebarPosition::Left);
        assert_eq!(right.sidebar.unwrap().position, SidebarPosition::Right);
    }

    #[test]
    fn default_theme_uses_brand_green() {
        let config = default_config(TemplateKey::HeroFull);
        assert_eq!(config.theme.primary_color, "#10b981");
        assert!(config.sections.gallery.images.is_empty());
    }
}
