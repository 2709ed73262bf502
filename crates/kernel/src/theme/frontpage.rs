//! Front-page layout context.
//!
//! The front page shows only what the theme decided to show: the stock
//! course list and news sections are suppressed, and the page header carries
//! the site summary (or the default slogan when the summary is empty).

use serde::Serialize;

use crate::config;
use aula_sdk::context::RenderContext;
use aula_sdk::host::StringResolver;
use aula_sdk::types::SiteRecord;

/// Serializable template context for the front-page layout.
#[derive(Debug, Clone, Serialize)]
pub struct FrontPageContext {
    pub site_name: String,
    /// Slogan or site summary rendered in the page header.
    pub page_header: String,
    /// Login URL, present only for anonymous or guest viewers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_url: Option<String>,
    /// Always false: the theme suppresses the stock front-page sections.
    pub show_default_sections: bool,
}

/// Prepare the front-page template context.
pub fn frontpage_context(
    site: &SiteRecord,
    render: &RenderContext,
    strings: &dyn StringResolver,
) -> FrontPageContext {
    let page_header = match site.summary.as_deref().filter(|s| !s.is_empty()) {
        Some(summary) => summary.to_string(),
        None => strings.resolve("defaultfpslogan", config::COMPONENT),
    };
    let login_url =
        (!render.logged_in || render.guest).then(|| "/login/index.php".to_string());

    FrontPageContext {
        site_name: site.full_name.clone(),
        page_header,
        login_url,
        show_default_sections: false,
    }
}
