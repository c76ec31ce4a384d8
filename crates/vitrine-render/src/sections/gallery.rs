use maud::{html, Markup};
use vitrine_core::{Business, PageConfig};

/// Enabled with no images is a valid state and renders nothing.
pub fn render_gallery(business: &Business, config: &PageConfig) -> Markup {
    let gallery = &config.sections.gallery;
    if !gallery.enabled || gallery.images.is_empty() {
        return html! {};
    }

    html! {
        section.gallery #gallery {
            h2 { "Galerie" }
            div.gallery-grid {
                @for (index, url) in gallery.images.iter().enumerate() {
                    figure.gallery-item {
                        img src=(url) alt=(format!("{} – photo {}", business.name, index + 1)) loading="lazy";
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::business;
    use vitrine_core::{default_config, TemplateKey};

    #[test]
    fn enabled_but_empty_renders_nothing() {
        let config = default_config(TemplateKey::SidebarLeft);
        assert!(config.sections.gallery.enabled);
        assert!(render_gallery(&business(), &config).into_string().is_empty());
    }

    #[test]
    fn images_render_in_stored_order() {
        let mut config = default_config(TemplateKey::SidebarLeft);
        config.sections.gallery.images = vec![
            "https://cdn.example.com/b.jpg".to_string(),
            "https://cdn.example.com/a.jpg".to_string(),
            "https://cdn.example.com/b.jpg".to_string(),
        ];
        let html = render_gallery(&business(), &config).into_string();
        let b = html.find("b.jpg").unwrap();
        let a = html.find("a.jpg").unwrap();
        assert!(b < a);
        assert_eq!(html.matches("<img").count(), 3);
    }

    #[test]
    fn disabled_renders_nothing() {
        let mut config = default_config(TemplateKey::SidebarLeft);
        config.sections.gallery.enabled = false;
        config.sections.gallery.images = vec!["https://cdn.example.com/a.jpg".to_string()];
        assert!(render_gallery(&business(), &config).into_string().is_empty());
    }
}
