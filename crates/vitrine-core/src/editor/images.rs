use serde::{Deserialize, Serialize};

use crate::schema::PageConfig;

/// Gallery and hero image edits. Uploads happen elsewhere; these only record
/// URLs, in whatever order the uploads complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum ImagesAction {
    AddGalleryImage { url: String },
    RemoveGalleryImage { index: usize },
    MoveGalleryImage { from: usize, to: usize },
    SetHeroImage { url: String },
    ClearHeroImage,
}

/// Out-of-range indices and blank URLs leave the gallery unchanged.
#[must_use]
pub fn apply_images(config: &PageConfig, action: &ImagesAction) -> PageConfig {
    let mut next = config.clone();
    let images = &mut next.sections.gallery.images;
    match action {
        ImagesAction::AddGalleryImage { url } if url.trim().is_empty() => {}
        ImagesAction::AddGalleryImage { url } => images.push(url.clone()),
        ImagesAction::RemoveGalleryImage { index } => {
            if *index < images.len() {
                images.remove(*index);
            }
        }
        ImagesAction::MoveGalleryImage { from, to } => {
            if *from < images.len() && *to < images.len() {
                let image = images.remove(*from);
                images.insert(*to, image);
            }
        }
        ImagesAction::SetHeroImage { url } => next.hero.background_image = Some(url.clone()),
        ImagesAction::ClearHeroImage => next.hero.background_image = None,
    }
    next
}
