use maud::{html, Markup};
use vitrine_core::{Business, PageConfig, SidebarPosition, TemplateKey};

use crate::sections::{
    render_about, render_contact_strip, render_gallery, render_hero, render_services,
    render_sidebar,
};

pub(crate) fn sidebar_layout(
    key: TemplateKey,
    position: SidebarPosition,
    business: &Business,
    config: &PageConfig,
) -> Markup {
    html! {
        div class=(format!("layout layout-sidebar layout-sidebar-{}", position.as_str())) data-template=(key.as_str()) {
            (render_hero(business, config))
            div.columns {
                @match position {
                    SidebarPosition::Left => {
                        (render_sidebar(business, config))
                        (main_column(business, config))
                    }
                    SidebarPosition::Right => {
                        (main_column(business, config))
                        (render_sidebar(business, config))
                    }
                }
            }
        }
    }
}

pub(crate) fn hero_full_layout(business: &Business, config: &PageConfig) -> Markup {
    html! {
        div.layout.layout-hero-full data-template=(TemplateKey::HeroFull.as_str()) {
            (render_hero(business, config))
            (main_column(business, config))
            (render_contact_strip(business))
        }
    }
}

fn main_column(business: &Business, config: &PageConfig) -> Markup {
    html! {
        main.content {
            (render_services(business, config))
            (render_about(business, config))
            (render_gallery(business, config))
        }
    }
}
