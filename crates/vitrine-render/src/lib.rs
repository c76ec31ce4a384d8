//! HTML rendering of business pages.
//!
//! [`dispatch`] maps a template key to one of the three layouts; each layout
//! composes the section renderers in [`sections`]. Output is built with
//! `maud`, so all interpolated text is escaped.

pub mod document;
mod layouts;
pub mod sections;
mod style;

#[cfg(test)]
pub(crate) mod test_helpers;

use maud::Markup;
use vitrine_core::{Business, PageConfig, StoredConfig, TemplateKey};

pub use document::render_document;

/// Layout used when a stored template key is not recognized.
pub const FALLBACK_TEMPLATE: TemplateKey = TemplateKey::FALLBACK;

/// Render the layout for a raw template key.
///
/// Unknown keys fall back to [`FALLBACK_TEMPLATE`] with a warning; this never
/// fails and never renders an empty page.
#[must_use]
pub fn dispatch(raw_key: &str, business: &Business, config: &PageConfig) -> Markup {
    let key = raw_key.parse::<TemplateKey>().unwrap_or_else(|_| {
        tracing::warn!(
            template_key = %raw_key,
            business_id = business.id,
            fallback = %FALLBACK_TEMPLATE,
            "unknown template key; falling back"
        );
        FALLBACK_TEMPLATE
    });
    render_layout(key, business, config)
}

#[must_use]
pub fn render_layout(key: TemplateKey, business: &Business, config: &PageConfig) -> Markup {
    match key {
        TemplateKey::SidebarLeft | TemplateKey::SidebarRight => {
            let position = key
                .sidebar_position()
                .unwrap_or(vitrine_core::SidebarPosition::Right);
            layouts::sidebar_layout(key, position, business, config)
        }
        TemplateKey::HeroFull => layouts::hero_full_layout(business, config),
    }
}

/// Full HTML document for a business page, laid out by the template key the
/// snapshot was stored with.
#[must_use]
pub fn render_page(business: &Business, stored: &StoredConfig) -> String {
    let body = dispatch(&stored.template_key, business, &stored.config);
    render_document(business, &stored.config, &body).into_string()
}
