//! Per-field content precedence: explicit config value, then the business
//! record, then nothing.

/// Pick the first non-blank value, trimmed.
#[must_use]
pub fn resolve<'a>(config_field: Option<&'a str>, business_field: Option<&'a str>) -> Option<&'a str> {
    non_blank(config_field).or_else(|| non_blank(business_field))
}

/// Like [`resolve`], with a final fallback when neither source has content.
#[must_use]
pub fn resolve_or<'a>(
    config_field: Option<&'a str>,
    business_field: Option<&'a str>,
    fallback: &'a str,
) -> &'a str {
    resolve(config_field, business_field).unwrap_or(fallback)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_value_wins() {
        assert_eq!(resolve(Some("Le Délice"), Some("Délice SARL")), Some("Le Délice"));
    }

    #[test]
    fn blank_config_value_falls_through_to_business() {
        assert_eq!(resolve(Some("   "), Some("Délice SARL")), Some("Délice SARL"));
        assert_eq!(resolve(None, Some("Délice SARL")), Some("Délice SARL"));
    }

    #[test]
    fn nothing_when_both_sources_are_empty() {
        assert_eq!(resolve(Some(""), None), None);
        assert_eq!(resolve(None, Some("\n")), None);
    }

    #[test]
    fn values_are_trimmed() {
        assert_eq!(resolve(Some("  Nos plats "), None), Some("Nos plats"));
    }

    #[test]
    fn resolve_or_uses_fallback_last() {
        assert_eq!(resolve_or(None, None, "Nos services"), "Nos services");
        assert_eq!(resolve_or(None, Some("Carte"), "Nos services"), "Carte");
    }
}
