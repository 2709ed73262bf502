//! Aula theme-layer kernel.
//!
//! Builds the profile navigation tree, composes custom menus, and provides
//! the theme services (background CSS, footer, front page, theme matching)
//! on top of host collaborators defined in `aula-sdk`.

pub mod config;
pub mod error;
pub mod menu;
pub mod profile;
pub mod setup;
pub mod strings;
pub mod theme;

pub use error::{Error, Result};
