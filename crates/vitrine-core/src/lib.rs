//! Page configuration core: schema, defaults, template-switch merge,
//! validation, content precedence, editor mutators and the draft/published
//! store contract.

pub mod app_config;
pub mod business;
pub mod config;
pub mod defaults;
pub mod editor;
pub mod merge;
pub mod resolve;
pub mod schema;
pub mod store;
pub mod template;
pub mod validate;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use business::{Business, DayHours, Hours, HoursRow};
pub use config::{load_app_config, load_app_config_from_env};
pub use defaults::default_config;
pub use editor::{apply, EditorAction, EditorNotice, EditorSession};
pub use merge::{merge_across_template_switch, switch_template};
pub use resolve::{resolve, resolve_or};
pub use schema::{
    BackgroundType, PageConfig, ServicesDisplay, SidebarConfig, SidebarPosition, Social,
    SCHEMA_VERSION,
};
pub use store::{
    BusinessDirectory, MemoryStore, MemoryStoreError, PageConfigStore, Slot, SlotStore,
    StoreError, StoredConfig,
};
pub use template::{template_catalog, TemplateInfo, TemplateKey, UnknownTemplateKey};
pub use validate::{is_valid_color, validate, validate_value, ValidationErrors};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
