//! Logo selection for the navbar and login pages.

use aula_sdk::context::RenderContext;
use aula_sdk::url::PageUrl;

fn theme_base(theme: &str) -> String {
    format!("/theme/{theme}")
}

/// Full-size logo URL; anonymous and guest viewers get the white variant.
pub fn logo_url(theme: &str, render: &RenderContext) -> PageUrl {
    let base = theme_base(theme);
    if !render.logged_in || render.guest {
        PageUrl::new(format!("{base}/pix/logos/logo-white.png"))
    } else {
        PageUrl::new(format!("{base}/pix/logos/logo-dark.png"))
    }
}

/// Compact navbar logo URL; anonymous and guest viewers get the white variant.
pub fn compact_logo_url(theme: &str, render: &RenderContext) -> PageUrl {
    let base = theme_base(theme);
    if !render.logged_in || render.guest {
        PageUrl::new(format!("{base}/pix/logos/logo-white.svg"))
    } else {
        PageUrl::new(format!("{base}/pix/logos/logo.svg"))
    }
}

/// The navbar shows a logo whenever a compact logo resolves.
pub fn should_display_navbar_logo(theme: &str, render: &RenderContext) -> bool {
    !compact_logo_url(theme, render).out().is_empty()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn logged_in_viewer_gets_dark_logo() {
        let render = RenderContext::for_user(Uuid::now_v7(), "en", PageUrl::new("/"));
        assert_eq!(logo_url("aula", &render).out(), "/theme/aula/pix/logos/logo-dark.png");
        assert_eq!(compact_logo_url("aula", &render).out(), "/theme/aula/pix/logos/logo.svg");
    }

    #[test]
    fn anonymous_viewer_gets_white_logo() {
        let render = RenderContext::anonymous("en", PageUrl::new("/"));
        assert_eq!(logo_url("aula", &render).out(), "/theme/aula/pix/logos/logo-white.png");
        assert!(should_display_navbar_logo("aula", &render));
    }
}
