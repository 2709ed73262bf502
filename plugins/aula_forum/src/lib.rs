//! Forum plugin for the Aula theme layer.
//!
//! Adds links to the subject's forum posts and discussions on the profile
//! page. Registered under component `mod`, module `forum`, so the default
//! simplified-profile exclusion list (`mod_forum`) hides it.

use aula_sdk::prelude::*;

/// Profile navigation contributor for the forum module.
pub struct ForumNavigation;

impl ProfileContributor for ForumNavigation {
    fn component(&self) -> &str {
        "mod"
    }

    fn module(&self) -> Option<&str> {
        Some("forum")
    }

    fn navigation(&self, tree: &mut Tree, ctx: &ProfileContext<'_>) {
        let mut posts_url =
            PageUrl::new("/mod/forum/user.php").with_param("id", ctx.user.id.to_string());
        if let Some(course) = ctx.course {
            posts_url = posts_url.with_param("course", course.id.to_string());
        }
        let discussions_url = posts_url.clone().with_param("mode", "discussions");

        tree.add_node(
            Node::new("miscellaneous", "forumposts", ctx.strings.resolve("forumposts", "mod_forum"))
                .with_url(posts_url),
        );
        tree.add_node(
            Node::new(
                "miscellaneous",
                "forumdiscussions",
                ctx.strings.resolve("myprofileotherdis", "mod_forum"),
            )
            .with_url(discussions_url),
        );
    }
}
