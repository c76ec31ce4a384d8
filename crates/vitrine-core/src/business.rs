//! The business record supplied by the directory. Read-only here: it only
//! provides fallback content for page sections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::Social;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: i64,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub hours: Option<Hours>,
    /// Comma-separated, as typed in the intake form.
    #[serde(default)]
    pub services: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub hero_image: Option<String>,
}

/// Opening hours: either free text or a per-day schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Hours {
    Text(String),
    Weekly(BTreeMap<String, DayHours>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    #[serde(default)]
    pub open: Option<String>,
    #[serde(default)]
    pub close: Option<String>,
    #[serde(default)]
    pub closed: bool,
}

/// One display row of a weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoursRow {
    pub day: String,
    /// `None` when the business is closed that day.
    pub span: Option<String>,
}

// Keys accepted in a weekly schedule, in display order, with their label.
const DAYS: [(&str, &str, &str); 7] = [
    ("monday", "lundi", "Lundi"),
    ("tuesday", "mardi", "Mardi"),
    ("wednesday", "mercredi", "Mercredi"),
    ("thursday", "jeudi", "Jeudi"),
    ("friday", "vendredi", "Vendredi"),
    ("saturday", "samedi", "Samedi"),
    ("sunday", "dimanche", "Dimanche"),
];

impl Hours {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Hours::Text(text) => text.trim().is_empty(),
            Hours::Weekly(days) => days.is_empty(),
        }
    }

    /// Weekly schedule rows, Monday first; unrecognized day keys follow in key order.
    #[must_use]
    pub fn rows(&self) -> Vec<HoursRow> {
        let Hours::Weekly(days) = self else {
            return Vec::new();
        };

        let mut rows = Vec::with_capacity(days.len());
        let mut used = Vec::new();

        for (english, french, label) in DAYS {
            let found = days
                .iter()
                .find(|(key, _)| {
                    let key = key.to_lowercase();
                    key == english || key == french
                });
            if let Some((key, day)) = found {
                used.push(key.as_str());
                rows.push(HoursRow {
                    day: label.to_string(),
                    span: day.span(),
                });
            }
        }

        for (key, day) in days {
            if !used.contains(&key.as_str()) {
                rows.push(HoursRow {
                    day: key.clone(),
                    span: day.span(),
                });
            }
        }

        rows
    }
}

impl DayHours {
    fn span(&self) -> Option<String> {
        if self.closed {
            return None;
        }
        match (self.open.as_deref(), self.close.as_deref()) {
            (Some(open), Some(close)) => Some(format!("{open} – {close}")),
            (Some(open), None) => Some(format!("dès {open}")),
            (None, Some(close)) => Some(format!("jusqu'à {close}")),
            (None, None) => None,
        }
    }
}

impl Business {
    /// Services split from the comma-separated field; blanks dropped, order kept.
    #[must_use]
    pub fn service_list(&self) -> Vec<&str> {
        self.services
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    #[must_use]
    pub fn social_handle(&self, social: Social) -> Option<&str> {
        let handle = match social {
            Social::Facebook => self.facebook.as_deref(),
            Social::Instagram => self.instagram.as_deref(),
            Social::Tiktok => self.tiktok.as_deref(),
            Social::Youtube => self.youtube.as_deref(),
        };
        handle.map(str::trim).filter(|h| !h.is_empty())
    }

    /// Profile URL for a social network, if the business has a handle for it.
    ///
    /// Full URLs are kept as-is; bare handles lose a leading `@` and are
    /// appended to the network's base URL.
    #[must_use]
    pub fn social_url(&self, social: Social) -> Option<String> {
        let handle = self.social_handle(social)?;
        if handle.starts_with("https://") || handle.starts_with("http://") {
            return Some(handle.to_string());
        }
        let bare = handle.trim_start_matches('@');
        if bare.is_empty() {
            return None;
        }
        Some(format!("{}{bare}", social.base_url()))
    }
}
