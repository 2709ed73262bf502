//! Theme services: branding, footer, front page, and theme matching.

mod branding;
mod footer;
mod frontpage;
mod matcher;

pub use branding::{compact_logo_url, logo_url, should_display_navbar_logo};
pub use footer::{FooterExport, FooterRegistry};
pub use frontpage::{FrontPageContext, frontpage_context};
pub use matcher::{assign_user_theme, theme_for_email};
