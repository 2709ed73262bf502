//! Profile page building: navigation tree, display filter, background.

mod background;
mod builder;
mod core;
mod filter;
mod format;

pub use background::{
    BackgroundImages, ImageSize, PROFILE_IMAGE_AREA, background_css, resolve_background,
};
pub use builder::NavigationRegistry;
pub use filter::{DisplayFilter, DisplayPolicy};
pub use format::format_elapsed;
pub use self::core::CoreContributor;
