use maud::{html, Markup};
use vitrine_core::{resolve, Business, Hours, PageConfig, Social};

/// The sidebar block. Only rendered when the config carries a `sidebar`;
/// every sub-block is toggled on its own and skipped when the business has
/// no data for it.
pub fn render_sidebar(business: &Business, config: &PageConfig) -> Markup {
    let Some(sidebar) = &config.sidebar else {
        return html! {};
    };

    let phone = resolve(business.phone.as_deref(), None).filter(|_| sidebar.contact.phone);
    let email = resolve(business.email.as_deref(), None).filter(|_| sidebar.contact.email);
    let socials: Vec<(Social, String)> = Social::ALL
        .into_iter()
        .filter(|social| sidebar.socials.is_on(*social))
        .filter_map(|social| business.social_url(social).map(|url| (social, url)))
        .collect();
    let hours = business
        .hours
        .as_ref()
        .filter(|hours| sidebar.hours.enabled && !hours.is_empty());
    let address = resolve(business.address.as_deref(), None).filter(|_| sidebar.address.enabled);

    html! {
        aside.sidebar #contact data-position=(sidebar.position.as_str()) {
            @if phone.is_some() || email.is_some() {
                div.sidebar-block.contact {
                    h3 { "Contact" }
                    @if let Some(phone) = phone {
                        p.contact-phone { a href=(format!("tel:{phone}")) { (phone) } }
                    }
                    @if let Some(email) = email {
                        p.contact-email { a href=(format!("mailto:{email}")) { (email) } }
                    }
                }
            }
            @if !socials.is_empty() {
                div.sidebar-block.socials {
                    h3 { "Réseaux" }
                    ul {
                        @for (social, url) in &socials {
                            li class=(format!("social social-{}", social.as_str())) {
                                a href=(url) rel="noopener" target="_blank" { (social.label()) }
                            }
                        }
                    }
                }
            }
            @if let Some(hours) = hours {
                div.sidebar-block.hours {
                    h3 { "Horaires" }
                    (render_hours(hours))
                }
            }
            @if let Some(address) = address {
                div.sidebar-block.address {
                    h3 { "Adresse" }
                    address { (address) }
                }
            }
        }
    }
}

/// Full-width contact strip closing the `hero-full` layout.
pub fn render_contact_strip(business: &Business) -> Markup {
    let phone = resolve(business.phone.as_deref(), None);
    let email = resolve(business.email.as_deref(), None);
    let address = resolve(business.address.as_deref(), None);
    if phone.is_none() && email.is_none() && address.is_none() {
        return html! {};
    }

    html! {
        section.contact-strip #contact {
            @if let Some(phone) = phone {
                a.contact-phone href=(format!("tel:{phone}")) { (phone) }
            }
            @if let Some(email) = email {
                a.contact-email href=(format!("mailto:{email}")) { (email) }
            }
            @if let Some(address) = address {
                address { (address) }
            }
        }
    }
}

fn render_hours(hours: &Hours) -> Markup {
    match hours {
        Hours::Text(text) => html! {
            p.hours-text {
                @for (i, line) in text.trim().lines().enumerate() {
                    @if i > 0 { br; }
                    (line)
                }
            }
        },
        Hours::Weekly(_) => html! {
            table.hours-table {
                @for row in hours.rows() {
                    tr {
                        th scope="row" { (row.day) }
                        td { (row.span.as_deref().unwrap_or("Fermé")) }
                    }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{bare_business, business};
    use vitrine_core::{default_config, TemplateKey};

    #[test]
    fn absent_without_sidebar_config() {
        let config = default_config(TemplateKey::HeroFull);
        assert!(render_sidebar(&business(), &config).into_string().is_empty());
    }

    #[test]
    fn renders_every_block_with_data() {
        let config = default_config(TemplateKey::SidebarRight);
        let html = render_sidebar(&business(), &config).into_string();
        assert!(html.contains("tel:04 78 00 00 00"));
        assert!(html.contains("mailto:contact@ledelice.fr"));
        assert!(html.contains("https://facebook.com/ledelice"));
        assert!(html.contains("https://instagram.com/ledelice"));
        assert!(html.contains("https://youtube.com/@ledelice"));
        assert!(html.contains("<th scope=\"row\">Lundi</th><td>09:00 – 18:00</td>"));
        assert!(html.contains("<th scope=\"row\">Dimanche</th><td>Fermé</td>"));
        assert!(html.contains("12 rue des Lilas, Lyon"));
    }

    #[test]
    fn social_toggled_on_without_handle_renders_no_icon() {
        let config = default_config(TemplateKey::SidebarRight);
        assert!(config.sidebar.as_ref().unwrap().socials.tiktok);
        let html = render_sidebar(&business(), &config).into_string();
        assert!(!html.contains("social-tiktok"));
    }

    #[test]
    fn toggled_off_blocks_are_hidden() {
        let mut config = default_config(TemplateKey::SidebarLeft);
        let sidebar = config.sidebar.as_mut().unwrap();
        sidebar.contact.phone = false;
        sidebar.hours.enabled = false;
        sidebar.socials.facebook = false;
        let html = render_sidebar(&business(), &config).into_string();
        assert!(!html.contains("tel:"));
        assert!(html.contains("mailto:"));
        assert!(!html.contains("hours-table"));
        assert!(!html.contains("facebook.com"));
        assert!(html.contains("instagram.com"));
    }

    #[test]
    fn missing_business_data_is_silently_skipped() {
        let config = default_config(TemplateKey::SidebarRight);
        let html = render_sidebar(&bare_business(), &config).into_string();
        assert!(html.contains("<aside"));
        assert!(!html.contains("<h3>"));
    }

    #[test]
    fn free_text_hours_keep_line_breaks() {
        let config = default_config(TemplateKey::SidebarRight);
        let mut business = business();
        business.hours = Some(Hours::Text("Mar-Sam 9h-19h\nDim 9h-12h".to_string()));
        let html = render_sidebar(&business, &config).into_string();
        assert!(html.contains("Mar-Sam 9h-19h<br>Dim 9h-12h"));
    }

    #[test]
    fn contact_strip_skipped_without_data() {
        assert!(render_contact_strip(&bare_business()).into_string().is_empty());
        let html = render_contact_strip(&business()).into_string();
        assert!(html.contains("id=\"contact\""));
    }
}
