//! Log report plugin for the Aula theme layer.
//!
//! Adds links to the subject's activity logs within a course. Registered
//! under component `report`, module `log`; the default simplified-profile
//! exclusion list hides the whole `report` component.

use aula_sdk::prelude::*;

/// Profile navigation contributor for the log report.
pub struct LogReportNavigation;

impl ProfileContributor for LogReportNavigation {
    fn component(&self) -> &str {
        "report"
    }

    fn module(&self) -> Option<&str> {
        Some("log")
    }

    fn navigation(&self, tree: &mut Tree, ctx: &ProfileContext<'_>) {
        // Logs only exist within a course context.
        let Some(course) = ctx.course else {
            return;
        };

        let base = PageUrl::new("/report/log/user.php")
            .with_param("id", ctx.user.id.to_string())
            .with_param("course", course.id.to_string());

        tree.add_node(
            Node::new("reports", "alllogs", ctx.strings.resolve("alllogs", "report_log"))
                .with_url(base.clone().with_param("mode", "all")),
        );
        tree.add_node(
            Node::new("reports", "todaylogs", ctx.strings.resolve("todaylogs", "report_log"))
                .with_url(base.with_param("mode", "today")),
        );
    }
}
