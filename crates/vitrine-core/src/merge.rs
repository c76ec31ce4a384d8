//! Template switching that keeps the user's authored content.
//!
//! Only the fields listed in [`PRESERVED_FIELDS`] and
//! [`PRESERVED_SIDEBAR_FIELDS`] carry over; everything else takes the new
//! template's default so layout-specific settings never leak across layouts.

use crate::defaults::default_config;
use crate::schema::{PageConfig, SidebarConfig};
use crate::template::TemplateKey;

/// One whitelisted field copied from the old config onto the new one.
pub struct PreservedField<T> {
    pub path: &'static str,
    copy: fn(&T, &mut T),
}

impl<T> PreservedField<T> {
    pub fn apply(&self, old: &T, new: &mut T) {
        (self.copy)(old, new);
    }
}

pub const PRESERVED_FIELDS: &[PreservedField<PageConfig>] = &[
    PreservedField {
        path: "theme",
        copy: |old, new| new.theme = old.theme.clone(),
    },
    PreservedField {
        path: "hero.title",
        copy: |old, new| new.hero.title = old.hero.title.clone(),
    },
    PreservedField {
        path: "hero.description",
        copy: |old, new| new.hero.description = old.hero.description.clone(),
    },
    PreservedField {
        path: "hero.backgroundType",
        copy: |old, new| new.hero.background_type = old.hero.background_type,
    },
    PreservedField {
        path: "hero.backgroundValue",
        copy: |old, new| new.hero.background_value = old.hero.background_value.clone(),
    },
    PreservedField {
        path: "hero.backgroundImage",
        copy: |old, new| new.hero.background_image = old.hero.background_image.clone(),
    },
    PreservedField {
        path: "hero.showCTA",
        copy: |old, new| new.hero.show_cta = old.hero.show_cta,
    },
    PreservedField {
        path: "sections.services.enabled",
        copy: |old, new| new.sections.services.enabled = old.sections.services.enabled,
    },
    PreservedField {
        path: "sections.services.title",
        copy: |old, new| new.sections.services.title = old.sections.services.title.clone(),
    },
    PreservedField {
        path: "sections.about.enabled",
        copy: |old, new| new.sections.about.enabled = old.sections.about.enabled,
    },
    PreservedField {
        path: "sections.about.content",
        copy: |old, new| new.sections.about.content = old.sections.about.content.clone(),
    },
    PreservedField {
        path: "sections.gallery.enabled",
        copy: |old, new| new.sections.gallery.enabled = old.sections.gallery.enabled,
    },
    PreservedField {
        path: "sections.gallery.images",
        copy: |old, new| new.sections.gallery.images = old.sections.gallery.images.clone(),
    },
];

/// Applied only when both the old and the new config carry a sidebar.
pub const PRESERVED_SIDEBAR_FIELDS: &[PreservedField<SidebarConfig>] = &[
    PreservedField {
        path: "sidebar.contact",
        copy: |old, new| new.contact = old.contact,
    },
    PreservedField {
        path: "sidebar.socials",
        copy: |old, new| new.socials = old.socials,
    },
    PreservedField {
        path: "sidebar.hours",
        copy: |old, new| new.hours = old.hours,
    },
    PreservedField {
        path: "sidebar.address",
        copy: |old, new| new.address = old.address,
    },
];

/// Carry the whitelisted content of `old` onto `new`.
#[must_use]
pub fn merge_across_template_switch(old: &PageConfig, mut new: PageConfig) -> PageConfig {
    for field in PRESERVED_FIELDS {
        field.apply(old, &mut new);
    }

    if let (Some(old_sidebar), Some(new_sidebar)) = (old.sidebar.as_ref(), new.sidebar.as_mut()) {
        for field in PRESERVED_SIDEBAR_FIELDS {
            field.apply(old_sidebar, new_sidebar);
        }
    }

    new
}

/// Produce the config for `new_key` starting from the current one.
#[must_use]
pub fn switch_template(old: &PageConfig, new_key: TemplateKey) -> PageConfig {
    tracing::debug!(
        from = %old.template_key,
        to = %new_key,
        "switching page template"
    );
    merge_across_template_switch(old, default_config(new_key))
}

#[cfg(test)]
#[path = "merge_test.rs"]
mod tests;
