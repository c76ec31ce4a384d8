use maud::{html, Markup, PreEscaped, DOCTYPE};
use vitrine_core::defaults::{DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR};
use vitrine_core::{resolve, Business, PageConfig};

use crate::style::css_color;

/// Wrap a rendered layout in a complete HTML document.
pub fn render_document(business: &Business, config: &PageConfig, body: &Markup) -> Markup {
    let theme = &config.theme;
    let vars = format!(
        ":root {{ --primary: {}; --secondary: {}; }}",
        css_color(&theme.primary_color, DEFAULT_PRIMARY_COLOR),
        css_color(&theme.secondary_color, DEFAULT_SECONDARY_COLOR),
    );
    let description = resolve(business.description.as_deref(), None);

    html! {
        (DOCTYPE)
        html lang="fr" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (business.name) }
                @if let Some(description) = description {
                    meta name="description" content=(description);
                }
                style { (PreEscaped(vars)) }
            }
            body {
                (body)
            }
        }
    }
}
