//! Section renderers. Each one takes `(business, config)`, decides on its own
//! whether it is visible, and resolves every content field independently
//! (config first, then business, then nothing).

mod about;
mod contact;
mod gallery;
mod hero;
mod services;

pub use about::render_about;
pub use contact::{render_contact_strip, render_sidebar};
pub use gallery::render_gallery;
pub use hero::{cta_href, hero_background, render_hero, HeroBackground};
pub use services::{render_services, VISIBLE_SERVICES};
