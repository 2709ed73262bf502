//! Profile page background image resolution and CSS generation.
//!
//! Sites upload a background image in up to three size variants,
//! distinguished by filename suffix. Missing variants fall back to the
//! normal size; no upload at all falls back to the assets packaged with the
//! theme. The result feeds a CSS block scoped to the profile page layout.

use std::fmt::Write;

use aula_sdk::host::ImageStore;

/// Upload area holding the profile background image.
pub const PROFILE_IMAGE_AREA: &str = "profileimage";

/// Background image size variants, keyed by filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    Normal,
    Large,
    ExtraLarge,
}

impl ImageSize {
    /// Responsive breakpoint name, `None` for the base size.
    pub fn breakpoint(self) -> Option<&'static str> {
        match self {
            ImageSize::Normal => None,
            ImageSize::Large => Some("lg"),
            ImageSize::ExtraLarge => Some("xl"),
        }
    }

    /// Classify an uploaded filename by its suffix (extension ignored).
    fn classify(filename: &str) -> Self {
        let stem = filename
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(filename);
        if stem.ends_with("xl") {
            ImageSize::ExtraLarge
        } else if stem.ends_with("lg") {
            ImageSize::Large
        } else {
            ImageSize::Normal
        }
    }
}

/// Resolved background image URLs, one per size variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundImages {
    pub normal: String,
    pub large: String,
    pub extra_large: String,
}

impl BackgroundImages {
    /// The URL to serve for a size, after fallback.
    pub fn url(&self, size: ImageSize) -> &str {
        match size {
            ImageSize::Normal => &self.normal,
            ImageSize::Large => &self.large,
            ImageSize::ExtraLarge => &self.extra_large,
        }
    }
}

/// Resolve the profile background images for a theme and its parents.
///
/// The first theme in the chain with any upload wins; within it, missing
/// large/extra-large variants reuse the normal size. With no uploads
/// anywhere the packaged default assets are used.
pub fn resolve_background(images: &dyn ImageStore, theme_chain: &[&str]) -> BackgroundImages {
    for theme in theme_chain {
        let mut normal = None;
        let mut large = None;
        let mut extra_large = None;

        for file in images.area_files(&format!("theme_{theme}"), PROFILE_IMAGE_AREA) {
            match ImageSize::classify(&file.filename) {
                ImageSize::Normal => normal = Some(file.url),
                ImageSize::Large => large = Some(file.url),
                ImageSize::ExtraLarge => extra_large = Some(file.url),
            }
        }

        // An upload with only large variants still counts; the first
        // available variant backfills the normal slot.
        let base = normal.clone().or_else(|| large.clone()).or_else(|| extra_large.clone());
        if let Some(base) = base {
            return BackgroundImages {
                large: large.unwrap_or_else(|| base.clone()),
                extra_large: extra_large.unwrap_or_else(|| base.clone()),
                normal: base,
            };
        }
    }

    let theme = theme_chain.first().copied().unwrap_or("aula");
    BackgroundImages {
        normal: format!("/theme/{theme}/pix/backgrounds/profile.png"),
        large: format!("/theme/{theme}/pix/backgrounds/profile-2x.png"),
        extra_large: format!("/theme/{theme}/pix/backgrounds/profile-3x.png"),
    }
}

/// Generate the profile page header background CSS.
pub fn background_css(images: &BackgroundImages) -> String {
    let mut css = String::from(
        "\n.pagelayout-mypublic {\n    #page-header {\n",
    );
    for size in [ImageSize::Normal, ImageSize::Large, ImageSize::ExtraLarge] {
        let rule = format!(
            "        background-size: cover;\n        background-image: url({});\n",
            images.url(size)
        );
        match size.breakpoint() {
            None => css.push_str(&rule),
            Some(breakpoint) => {
                let _ = write!(
                    css,
                    "        @include media-breakpoint-up({breakpoint}) {{\n{rule}        }}\n"
                );
            }
        }
    }
    css.push_str("    }\n}\n");
    css
}
