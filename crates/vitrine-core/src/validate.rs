//! Full-shape validation of a candidate page config.
//!
//! Works on raw JSON so that every problem in a submission is reported at
//! once, keyed by its field path (`hero.backgroundType`,
//! `sections.gallery.images[2]`, ...), rather than stopping at the first
//! deserialization failure.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::schema::{BackgroundType, PageConfig, ServicesDisplay, Social};
use crate::template::TemplateKey;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("valid hex color regex")
});

static FUNCTIONAL_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:rgba?|hsla?)\(\s*[0-9.%,/\s-]+\)$").expect("valid functional color regex")
});

/// Field path → message for every invalid field of a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    #[must_use]
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.insert(path, message);
        errors
    }

    /// Record an error; the first message for a path wins.
    pub fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.entry(path.into()).or_insert_with(|| message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} invalid field(s)", self.0.len())?;
        for (i, (path, message)) in self.0.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{path}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Returns `true` for `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` and
/// `rgb()/rgba()/hsl()/hsla()` notations.
#[must_use]
pub fn is_valid_color(value: &str) -> bool {
    HEX_COLOR.is_match(value) || FUNCTIONAL_COLOR.is_match(value)
}

/// Validate a typed config.
///
/// # Errors
///
/// Returns every invalid field, keyed by path.
pub fn validate(config: &PageConfig) -> Result<(), ValidationErrors> {
    let value = serde_json::to_value(config)
        .map_err(|e| ValidationErrors::single("$", e.to_string()))?;
    validate_value(&value).map(|_| ())
}

/// Validate a raw JSON candidate and, when it passes, return it typed.
///
/// # Errors
///
/// Returns every invalid field, keyed by path.
pub fn validate_value(candidate: &Value) -> Result<PageConfig, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let Some(root) = candidate.as_object() else {
        return Err(ValidationErrors::single("$", "page config must be an object"));
    };

    let template_key = check_template_key(root, &mut errors);
    check_theme(root, &mut errors);
    check_hero(root, &mut errors);
    check_sections(root, &mut errors);
    check_sidebar(root, template_key, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    serde_json::from_value(candidate.clone())
        .map_err(|e| ValidationErrors::single("$", e.to_string()))
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Absent and `null` are treated alike, matching how `Option` fields deserialize.
fn present<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

fn object<'a>(
    obj: &'a Map<String, Value>,
    parent: &str,
    key: &str,
    errors: &mut ValidationErrors,
) -> Option<&'a Map<String, Value>> {
    let path = join(parent, key);
    match present(obj, key) {
        Some(Value::Object(inner)) => Some(inner),
        Some(_) => {
            errors.insert(path, "must be an object");
            None
        }
        None => {
            errors.insert(path, "is required");
            None
        }
    }
}

fn required_bool(obj: &Map<String, Value>, parent: &str, key: &str, errors: &mut ValidationErrors) {
    match present(obj, key) {
        Some(Value::Bool(_)) => {}
        Some(_) => errors.insert(join(parent, key), "must be a boolean"),
        None => errors.insert(join(parent, key), "is required"),
    }
}

fn required_string(
    obj: &Map<String, Value>,
    parent: &str,
    key: &str,
    errors: &mut ValidationErrors,
) {
    match present(obj, key) {
        Some(Value::String(_)) => {}
        Some(_) => errors.insert(join(parent, key), "must be a string"),
        None => errors.insert(join(parent, key), "is required"),
    }
}

fn optional_string(
    obj: &Map<String, Value>,
    parent: &str,
    key: &str,
    errors: &mut ValidationErrors,
) {
    if let Some(value) = present(obj, key) {
        if !value.is_string() {
            errors.insert(join(parent, key), "must be a string");
        }
    }
}

fn color(obj: &Map<String, Value>, parent: &str, key: &str, errors: &mut ValidationErrors) {
    let path = join(parent, key);
    match present(obj, key) {
        Some(Value::String(s)) if is_valid_color(s.trim()) => {}
        Some(Value::String(s)) => errors.insert(path, format!("'{s}' is not a valid color")),
        Some(_) => errors.insert(path, "must be a color string"),
        None => errors.insert(path, "is required"),
    }
}

fn one_of<'a>(
    obj: &'a Map<String, Value>,
    parent: &str,
    key: &str,
    allowed: &[&str],
    errors: &mut ValidationErrors,
) -> Option<&'a str> {
    let path = join(parent, key);
    match present(obj, key) {
        Some(Value::String(s)) if allowed.contains(&s.as_str()) => Some(s.as_str()),
        Some(Value::String(s)) => {
            errors.insert(
                path,
                format!("'{s}' is not one of: {}", allowed.join(", ")),
            );
            None
        }
        Some(_) => {
            errors.insert(path, "must be a string");
            None
        }
        None => {
            errors.insert(path, "is required");
            None
        }
    }
}

fn check_template_key(
    root: &Map<String, Value>,
    errors: &mut ValidationErrors,
) -> Option<TemplateKey> {
    let allowed: Vec<&str> = TemplateKey::ALL.iter().map(|k| k.as_str()).collect();
    one_of(root, "", "templateKey", &allowed, errors).and_then(|s| s.parse().ok())
}

fn check_theme(root: &Map<String, Value>, errors: &mut ValidationErrors) {
    let Some(theme) = object(root, "", "theme", errors) else {
        return;
    };
    color(theme, "theme", "primaryColor", errors);
    color(theme, "theme", "secondaryColor", errors);

    match present(theme, "gradient") {
        None => {}
        Some(Value::Object(gradient)) => {
            color(gradient, "theme.gradient", "from", errors);
            color(gradient, "theme.gradient", "to", errors);
        }
        Some(_) => errors.insert("theme.gradient", "must be an object"),
    }
}

fn check_hero(root: &Map<String, Value>, errors: &mut ValidationErrors) {
    let Some(hero) = object(root, "", "hero", errors) else {
        return;
    };
    let background_types: Vec<&str> = BackgroundType::ALL.iter().map(|b| b.as_str()).collect();

    required_bool(hero, "hero", "enabled", errors);
    optional_string(hero, "hero", "title", errors);
    optional_string(hero, "hero", "description", errors);
    one_of(hero, "hero", "backgroundType", &background_types, errors);
    required_string(hero, "hero", "backgroundValue", errors);
    optional_string(hero, "hero", "backgroundImage", errors);
    required_bool(hero, "hero", "showCTA", errors);
}

fn check_sections(root: &Map<String, Value>, errors: &mut ValidationErrors) {
    let Some(sections) = object(root, "", "sections", errors) else {
        return;
    };

    if let Some(services) = object(sections, "sections", "services", errors) {
        let displays: Vec<&str> = ServicesDisplay::ALL.iter().map(|d| d.as_str()).collect();
        required_bool(services, "sections.services", "enabled", errors);
        one_of(services, "sections.services", "display", &displays, errors);
        optional_string(services, "sections.services", "title", errors);
    }

    if let Some(about) = object(sections, "sections", "about", errors) {
        required_bool(about, "sections.about", "enabled", errors);
        optional_string(about, "sections.about", "content", errors);
    }

    if let Some(gallery) = object(sections, "sections", "gallery", errors) {
        required_bool(gallery, "sections.gallery", "enabled", errors);
        match present(gallery, "images") {
            Some(Value::Array(images)) => {
                for (i, image) in images.iter().enumerate() {
                    let path = format!("sections.gallery.images[{i}]");
                    match image {
                        Value::String(url) if url.trim().is_empty() => {
                            errors.insert(path, "image url must not be empty");
                        }
                        Value::String(_) => {}
                        _ => errors.insert(path, "must be a string"),
                    }
                }
            }
            Some(_) => errors.insert("sections.gallery.images", "must be a list of strings"),
            None => errors.insert("sections.gallery.images", "is required"),
        }
    }
}

fn check_sidebar(
    root: &Map<String, Value>,
    template_key: Option<TemplateKey>,
    errors: &mut ValidationErrors,
) {
    let sidebar = present(root, "sidebar");

    if let Some(key) = template_key {
        match (key.has_sidebar(), sidebar.is_some()) {
            (true, false) => {
                errors.insert("sidebar", format!("is required for template '{key}'"));
                return;
            }
            (false, true) => {
                errors.insert("sidebar", format!("is not allowed for template '{key}'"));
                return;
            }
            _ => {}
        }
    }

    let Some(sidebar) = sidebar else {
        return;
    };
    let Some(sidebar) = sidebar.as_object() else {
        errors.insert("sidebar", "must be an object");
        return;
    };

    if let Some(position) = one_of(sidebar, "sidebar", "position", &["left", "right"], errors) {
        if let Some(expected) = template_key.and_then(TemplateKey::sidebar_position) {
            if position != expected.as_str() {
                errors.insert(
                    "sidebar.position",
                    format!(
                        "must be '{}' for template '{}'",
                        expected.as_str(),
                        template_key.map_or("", TemplateKey::as_str)
                    ),
                );
            }
        }
    }

    if let Some(contact) = object(sidebar, "sidebar", "contact", errors) {
        required_bool(contact, "sidebar.contact", "phone", errors);
        required_bool(contact, "sidebar.contact", "email", errors);
    }
    if let Some(socials) = object(sidebar, "sidebar", "socials", errors) {
        for social in Social::ALL {
            required_bool(socials, "sidebar.socials", social.as_str(), errors);
        }
    }
    if let Some(hours) = object(sidebar, "sidebar", "hours", errors) {
        required_bool(hours, "sidebar.hours", "enabled", errors);
    }
    if let Some(address) = object(sidebar, "sidebar", "address", errors) {
        required_bool(address, "sidebar.address", "enabled", errors);
    }
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
