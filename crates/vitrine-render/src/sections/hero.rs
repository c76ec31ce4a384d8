use maud::{html, Markup};
use vitrine_core::defaults::{DEFAULT_GRADIENT_CLASS, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR};
use vitrine_core::{resolve, BackgroundType, Business, PageConfig};

use crate::style::{css_color, css_url};

/// How the hero banner is painted. One variant per `backgroundType`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroBackground {
    /// Inline gradient built from `theme.gradient`.
    GradientStyle(String),
    /// Gradient utility class taken from `hero.backgroundValue`.
    GradientClass(String),
    /// Cover-fit image; `None` when neither the config nor the business has one.
    Image(Option<String>),
    /// Flat fill with the theme's primary color.
    Color(String),
}

impl HeroBackground {
    fn class(&self) -> String {
        match self {
            HeroBackground::GradientStyle(_) => "hero hero-gradient".to_string(),
            HeroBackground::GradientClass(class) => format!("hero hero-gradient {class}"),
            HeroBackground::Image(_) => "hero hero-image".to_string(),
            HeroBackground::Color(_) => "hero hero-color".to_string(),
        }
    }

    fn style(&self) -> Option<String> {
        match self {
            HeroBackground::GradientStyle(style) | HeroBackground::Color(style) => {
                Some(style.clone())
            }
            HeroBackground::Image(style) => style.clone(),
            HeroBackground::GradientClass(_) => None,
        }
    }
}

#[must_use]
pub fn hero_background(business: &Business, config: &PageConfig) -> HeroBackground {
    let theme = &config.theme;
    match config.hero.background_type {
        BackgroundType::Gradient => match &theme.gradient {
            Some(gradient) => HeroBackground::GradientStyle(format!(
                "background: linear-gradient(135deg, {}, {});",
                css_color(&gradient.from, DEFAULT_PRIMARY_COLOR),
                css_color(&gradient.to, DEFAULT_SECONDARY_COLOR),
            )),
            None => {
                let class = resolve(Some(config.hero.background_value.as_str()), None)
                    .filter(|class| is_class_list(class))
                    .unwrap_or(DEFAULT_GRADIENT_CLASS);
                HeroBackground::GradientClass(class.to_string())
            }
        },
        BackgroundType::Image => {
            let url = resolve(
                config.hero.background_image.as_deref(),
                business.hero_image.as_deref(),
            )
            .or_else(|| resolve(business.images.first().map(String::as_str), None));
            HeroBackground::Image(url.map(|url| {
                format!(
                    "background-image: {}; background-size: cover; background-position: center;",
                    css_url(url)
                )
            }))
        }
        BackgroundType::Color => HeroBackground::Color(format!(
            "background-color: {};",
            css_color(&theme.primary_color, DEFAULT_PRIMARY_COLOR)
        )),
    }
}

/// Where the call-to-action button points: phone, then email, then the
/// on-page contact block when there is an address to show in it.
#[must_use]
pub fn cta_href(business: &Business) -> Option<String> {
    if let Some(phone) = resolve(business.phone.as_deref(), None) {
        let dial: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
        return Some(format!("tel:{dial}"));
    }
    if let Some(email) = resolve(business.email.as_deref(), None) {
        return Some(format!("mailto:{email}"));
    }
    resolve(business.address.as_deref(), None).map(|_| "#contact".to_string())
}

pub fn render_hero(business: &Business, config: &PageConfig) -> Markup {
    let hero = &config.hero;
    if !hero.enabled {
        return html! {};
    }

    let background = hero_background(business, config);
    let title = resolve(hero.title.as_deref(), Some(business.name.as_str()));
    let description = resolve(hero.description.as_deref(), business.description.as_deref());
    let cta = if hero.show_cta { cta_href(business) } else { None };

    html! {
        header class=(background.class()) style=[background.style()] {
            div.hero-content {
                @if let Some(title) = title {
                    h1.hero-title { (title) }
                }
                @if let Some(description) = description {
                    p.hero-description { (description) }
                }
                @if let Some(href) = cta {
                    a.hero-cta href=(href) { "Nous contacter" }
                }
            }
        }
    }
}

fn is_class_list(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_' | ':' | '/' | '.'))
}
