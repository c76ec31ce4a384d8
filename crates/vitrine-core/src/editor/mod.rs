//! Editor mutation surface.
//!
//! Every editor is a pure function from the current config and one user
//! action to a complete new config. Nothing is patched in place, so "has the
//! user changed anything" is an equality check against the last saved config,
//! and every edit reaches the store through the same validated path.

mod hero;
mod images;
mod sections;
mod sidebar;
mod theme;

use serde::{Deserialize, Serialize};

use crate::merge::switch_template;
use crate::schema::PageConfig;
use crate::store::{PageConfigStore, SlotStore, StoreError};
use crate::template::TemplateKey;
use crate::validate::ValidationErrors;

pub use hero::{apply_hero, HeroAction};
pub use images::{apply_images, ImagesAction};
pub use sections::{apply_sections, SectionsAction};
pub use sidebar::{apply_sidebar, SidebarAction};
pub use theme::{apply_theme, ThemeAction};

/// A single user action, tagged by the editor that produced it.
///
/// JSON shape: `{"editor": "theme", "op": "setPrimaryColor", "color": "#fff"}`,
/// or `{"editor": "template", "templateKey": "hero-full"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "editor", rename_all = "camelCase")]
pub enum EditorAction {
    Theme(ThemeAction),
    Hero(HeroAction),
    Sections(SectionsAction),
    Sidebar(SidebarAction),
    Images(ImagesAction),
    Template {
        #[serde(rename = "templateKey")]
        template_key: TemplateKey,
    },
}

/// Apply one action. Selecting a template goes through the template-switch
/// merge instead of a field assignment.
#[must_use]
pub fn apply(config: &PageConfig, action: &EditorAction) -> PageConfig {
    match action {
        EditorAction::Theme(action) => apply_theme(config, action),
        EditorAction::Hero(action) => apply_hero(config, action),
        EditorAction::Sections(action) => apply_sections(config, action),
        EditorAction::Sidebar(action) => apply_sidebar(config, action),
        EditorAction::Images(action) => apply_images(config, action),
        EditorAction::Template { template_key } if *template_key == config.template_key => {
            config.clone()
        }
        EditorAction::Template { template_key } => switch_template(config, *template_key),
    }
}

/// Outcome of a save, shown to the user as a non-blocking notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EditorNotice {
    Saved { published: bool },
    Rejected { details: ValidationErrors },
    SaveFailed { message: String },
}

/// In-memory editing state for one business page.
#[derive(Debug, Clone)]
pub struct EditorSession {
    business_id: i64,
    baseline: PageConfig,
    current: PageConfig,
}

impl EditorSession {
    #[must_use]
    pub fn new(business_id: i64, saved: PageConfig) -> Self {
        Self {
            business_id,
            current: saved.clone(),
            baseline: saved,
        }
    }

    /// Start from the stored draft, generating a default if none exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the draft cannot be read.
    pub async fn open<S: SlotStore>(
        store: &PageConfigStore<S>,
        business_id: i64,
    ) -> Result<Self, StoreError<S::Error>> {
        let draft = store.read_draft(business_id).await?;
        Ok(Self::new(business_id, draft))
    }

    #[must_use]
    pub fn business_id(&self) -> i64 {
        self.business_id
    }

    #[must_use]
    pub fn current(&self) -> &PageConfig {
        &self.current
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.current != self.baseline
    }

    pub fn apply(&mut self, action: &EditorAction) {
        self.current = apply(&self.current, action);
    }

    /// Persist the current config. On any failure the in-memory config is
    /// kept as-is so the user can retry.
    pub async fn save<S: SlotStore>(
        &mut self,
        store: &PageConfigStore<S>,
        publish: bool,
    ) -> EditorNotice {
        match store.save(self.business_id, &self.current, publish).await {
            Ok(()) => {
                self.baseline = self.current.clone();
                EditorNotice::Saved { published: publish }
            }
            Err(StoreError::Invalid(details)) => EditorNotice::Rejected { details },
            Err(StoreError::Backend(e)) => {
                tracing::warn!(
                    business_id = self.business_id,
                    error = %e,
                    "editor save failed; keeping in-memory draft"
                );
                EditorNotice::SaveFailed {
                    message: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "editor_test.rs"]
mod tests;
