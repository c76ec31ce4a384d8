use maud::{html, Markup};
use vitrine_core::{resolve_or, Business, PageConfig, ServicesDisplay};

/// Items shown before the expand control.
pub const VISIBLE_SERVICES: usize = 6;

pub fn render_services(business: &Business, config: &PageConfig) -> Markup {
    let section = &config.sections.services;
    if !section.enabled {
        return html! {};
    }
    let services = business.service_list();
    if services.is_empty() {
        return html! {};
    }

    let title = resolve_or(section.title.as_deref(), None, "Nos services");
    let class = match section.display {
        ServicesDisplay::Grid => "services-items services-grid",
        ServicesDisplay::List => "services-items services-list",
    };
    let (shown, hidden) = services.split_at(services.len().min(VISIBLE_SERVICES));

    html! {
        section.services #services data-display=(section.display.as_str()) {
            h2 { (title) }
            ul class=(class) {
                @for service in shown {
                    li.service { (service) }
                }
            }
            @if !hidden.is_empty() {
                details.services-more {
                    summary { "Voir les " (hidden.len()) " autres" }
                    ul class=(class) {
                        @for service in hidden {
                            li.service { (service) }
                        }
                    }
                }
            }
        }
    }
}
