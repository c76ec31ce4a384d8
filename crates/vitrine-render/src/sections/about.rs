use maud::{html, Markup};
use vitrine_core::{resolve, Business, PageConfig};

pub fn render_about(business: &Business, config: &PageConfig) -> Markup {
    let about = &config.sections.about;
    if !about.enabled {
        return html! {};
    }
    let Some(content) = resolve(about.content.as_deref(), business.description.as_deref()) else {
        return html! {};
    };

    html! {
        section.about #about {
            h2 { "À propos" }
            @for paragraph in content.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
                p { (paragraph) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{bare_business, business};
    use vitrine_core::{default_config, TemplateKey};

    #[test]
    fn config_content_wins_over_description() {
        let mut config = default_config(TemplateKey::HeroFull);
        config.sections.about.content = Some("Depuis 1987.\n\nFait maison.".to_string());
        let html = render_about(&business(), &config).into_string();
        assert!(html.contains("<p>Depuis 1987.</p>"));
        assert!(html.contains("<p>Fait maison.</p>"));
        assert!(!html.contains("Cuisine maison"));
    }

    #[test]
    fn falls_back_to_business_description() {
        let config = default_config(TemplateKey::HeroFull);
        let html = render_about(&business(), &config).into_string();
        assert!(html.contains("Cuisine maison au coeur de Lyon."));
    }

    #[test]
    fn nothing_without_any_content() {
        let config = default_config(TemplateKey::HeroFull);
        assert!(render_about(&bare_business(), &config).into_string().is_empty());
    }

    #[test]
    fn disabled_renders_nothing() {
        let mut config = default_config(TemplateKey::HeroFull);
        config.sections.about.enabled = false;
        assert!(render_about(&business(), &config).into_string().is_empty());
    }
}
