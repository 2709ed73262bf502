//! Badges plugin for the Aula theme layer.
//!
//! Contributes a badges category to the profile tree and a badge-catalog
//! fragment to the footer. Registered under component `badges`, which the
//! default simplified-profile exclusion list hides.

use aula_sdk::prelude::*;

/// Profile navigation contributor for badges.
pub struct BadgesNavigation;

impl ProfileContributor for BadgesNavigation {
    fn component(&self) -> &str {
        "badges"
    }

    fn navigation(&self, tree: &mut Tree, ctx: &ProfileContext<'_>) {
        tree.add_category(Category::new(
            "badges",
            ctx.strings.resolve("badges", "badges"),
            "miscellaneous",
        ));

        let url = PageUrl::new("/badges/user.php").with_param("id", ctx.user.id.to_string());
        tree.add_node(
            Node::new("badges", "userbadges", ctx.strings.resolve("userbadges", "badges"))
                .with_url(url),
        );
    }
}

/// Footer fragment linking to the site badge catalog.
pub struct BadgesFooter;

impl FooterHook for BadgesFooter {
    fn component(&self) -> &str {
        "badges"
    }

    fn footer_fragment(&self, render: &RenderContext) -> Option<String> {
        if !render.logged_in {
            return None;
        }
        Some("<a href=\"/badges/index.php\">Badges</a>".to_string())
    }
}
