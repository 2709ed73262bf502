//! The built-in core contributor for the profile navigation tree.
//!
//! This is the richest inclusion logic in the theme layer: every node is
//! gated on the field having a value, the field not being hidden from the
//! viewer, and the viewer's capabilities. A gate that fails simply omits the
//! node; nothing here can fail the render.

use std::collections::HashSet;

use crate::config::{self, keys};
use crate::profile::filter::DisplayPolicy;
use crate::profile::format::access_date_string;
use aula_sdk::context::ProfileContext;
use aula_sdk::host::{CapabilityScope, caps};
use aula_sdk::tree::{Category, Icon, Node, Tree};
use aula_sdk::types::{GroupMode, MailVisibility};
use aula_sdk::url::PageUrl;

/// The core profile-tree contributor. Always runs first and is never gated
/// by the display filter as a whole, though individual sections consult it.
pub struct CoreContributor<'a> {
    filter: &'a DisplayPolicy<'a>,
}

impl<'a> CoreContributor<'a> {
    pub fn new(filter: &'a DisplayPolicy<'a>) -> Self {
        Self { filter }
    }

    /// Add the core categories and nodes for the subject user.
    pub fn navigation(&self, tree: &mut Tree, ctx: &ProfileContext<'_>) {
        self.add_categories(tree, ctx);
        self.add_admin_nodes(tree, ctx);

        let hidden = hidden_fields(ctx);
        let identity = identity_fields(ctx);

        self.add_contact_nodes(tree, ctx, &hidden, &identity);
        self.add_courses_node(tree, ctx, &hidden);
        self.add_course_context_nodes(tree, ctx, &hidden);
        self.add_access_nodes(tree, ctx, &hidden);
    }

    fn add_categories(&self, tree: &mut Tree, ctx: &ProfileContext<'_>) {
        tree.add_category(
            Category::new("contact", ctx.strings.resolve("userinfos", config::COMPONENT), "")
                .with_classes(" profile-contact"),
        );
        // No after hint on coursedetails so the administration block lands
        // towards the end of the page.
        tree.add_category(Category::new(
            "coursedetails",
            ctx.strings.resolve("coursedetails", "core"),
            "",
        ));
        tree.add_category(Category::new(
            "miscellaneous",
            ctx.strings.resolve("miscellaneous", "core"),
            "coursedetails",
        ));
        tree.add_category(Category::new(
            "reports",
            ctx.strings.resolve("reports", "core"),
            "miscellaneous",
        ));
        tree.add_category(Category::new(
            "administration",
            ctx.strings.resolve("administration", "core"),
            "reports",
        ));
        tree.add_category(Category::new(
            "loginactivity",
            ctx.strings.resolve("loginactivity", "core"),
            "administration",
        ));
    }

    fn add_admin_nodes(&self, tree: &mut Tree, ctx: &ProfileContext<'_>) {
        let user = ctx.user;

        // Link to the full (site-level) profile when viewing within a course.
        if ctx.course.is_some()
            && self.filter.allows("miscellaneous", None)
            && ctx
                .capabilities
                .can(caps::VIEW_PROFILE, CapabilityScope::User(user.id))
        {
            let url = PageUrl::new("/user/profile.php").with_param("id", user.id.to_string());
            tree.add_node(
                Node::new("miscellaneous", "fullprofile", ctx.strings.resolve("fullprofile", "core"))
                    .with_url(url),
            );
        }

        if !ctx.is_own_profile
            && ctx
                .capabilities
                .can(caps::VIEW_PREFERENCES, CapabilityScope::User(user.id))
        {
            let url =
                PageUrl::new("/user/preferences.php").with_param("userid", user.id.to_string());
            tree.add_node(
                Node::new("administration", "preferences", ctx.strings.resolve("preferences", "core"))
                    .with_url(url),
            );
        }

        if !user.deleted
            && !ctx.is_own_profile
            && !ctx.render.logged_in_as
            && ctx
                .capabilities
                .can(caps::LOGIN_AS, ctx.course_or_system_scope())
            && !user.site_admin
        {
            let mut url = PageUrl::new("/course/loginas.php");
            if let Some(course) = ctx.course {
                url = url.with_param("id", course.id.to_string());
            }
            url = url.with_param("user", user.id.to_string());
            tree.add_node(
                Node::new("administration", "loginas", ctx.strings.resolve("loginas", "core"))
                    .with_url(url),
            );
        }
    }

    fn add_contact_nodes(
        &self,
        tree: &mut Tree,
        ctx: &ProfileContext<'_>,
        hidden: &HashSet<String>,
        identity: &HashSet<String>,
    ) {
        let user = ctx.user;

        if self.email_visible(ctx, hidden, identity) && !user.email.is_empty() {
            let mailto = format!("<a href=\"mailto:{0}\">{0}</a>", user.email);
            tree.add_node(
                Node::new("contact", "email", "")
                    .with_content(mailto)
                    .with_icon(Icon::new("t/email", ctx.strings.resolve("email", "core"))),
            );
        }

        if !hidden.contains("networkprofile")
            && let Some(link) = non_empty(user.network_profile.as_deref())
        {
            tree.add_node(
                Node::new("contact", "networkprofile", ctx.strings.resolve("networkprofile", "core"))
                    .with_content(link),
            );
        }

        if !hidden.contains("country")
            && let Some(country) = non_empty(user.country.as_deref())
        {
            tree.add_node(
                Node::new("contact", "country", "")
                    .with_content(ctx.strings.resolve(country, "countries")),
            );
        }

        if !hidden.contains("city")
            && let Some(city) = non_empty(user.city.as_deref())
        {
            tree.add_node(
                Node::new("contact", "city", ctx.strings.resolve("city", "core")).with_content(city),
            );
        }

        let identity_rows: [(&str, Option<&str>); 6] = [
            ("address", user.address.as_deref()),
            ("phone1", user.phone1.as_deref()),
            ("phone2", user.phone2.as_deref()),
            ("institution", user.institution.as_deref()),
            ("department", user.department.as_deref()),
            ("idnumber", user.id_number.as_deref()),
        ];
        for (key, value) in identity_rows {
            if identity.contains(key)
                && let Some(value) = non_empty(value)
            {
                tree.add_node(
                    Node::new("contact", key, ctx.strings.resolve(key, "core")).with_content(value),
                );
            }
        }

        // Interest tags only appear on the full (site-level) profile.
        if ctx.course.is_none() {
            let interests = ctx.data.interests(user.id);
            if !interests.is_empty() {
                tree.add_node(
                    Node::new("contact", "interests", ctx.strings.resolve("interests", "core"))
                        .with_content(interests.join(", ")),
                );
            }
        }

        for field in ctx.data.custom_fields(user.id) {
            if field.visible && !field.value.is_empty() {
                tree.add_node(
                    Node::new("contact", format!("custom_field_{}", field.shortname), field.name)
                        .with_content(field.value),
                );
            }
        }
    }

    /// The email gate: the subject's own preference, the hidden-fields
    /// configuration, and the viewer's capabilities all have a say.
    fn email_visible(
        &self,
        ctx: &ProfileContext<'_>,
        hidden: &HashSet<String>,
        identity: &HashSet<String>,
    ) -> bool {
        if ctx.is_own_profile || identity.contains("email") {
            return true;
        }
        if hidden.contains("email") {
            return false;
        }
        let preference_allows = match ctx.user.mail_display {
            MailVisibility::Everyone => true,
            MailVisibility::CourseMembers => {
                ctx.data.shares_course(ctx.user.id, ctx.render.viewer)
            }
            MailVisibility::Hidden => false,
        };
        preference_allows
            || ctx
                .capabilities
                .can(caps::VIEW_USER_EMAIL, ctx.course_or_user_scope())
    }

    fn add_courses_node(
        &self,
        tree: &mut Tree,
        ctx: &ProfileContext<'_>,
        hidden: &HashSet<String>,
    ) {
        if !ctx.is_own_profile && hidden.contains("mycourses") {
            return;
        }
        let courses = ctx.data.enrolled_courses(ctx.user.id);
        if courses.is_empty() {
            return;
        }

        let limit = config::course_display_limit(ctx.config);
        let mut entries = Vec::new();
        let mut show_more = false;

        for (index, course) in courses.iter().enumerate() {
            if non_empty(course.category.as_deref()).is_none() {
                continue;
            }
            let mut dimmed = false;
            if !course.visible {
                if !ctx
                    .capabilities
                    .can(caps::VIEW_HIDDEN_COURSES, CapabilityScope::Course(course.id))
                {
                    continue;
                }
                dimmed = true;
            }

            let url = PageUrl::new("/course/view.php").with_param("id", course.id.to_string());
            let class = if dimmed { " class=\"dimmed\"" } else { "" };
            entries.push(format!(
                "<li><a href=\"{}\"{}>{}</a></li>",
                url.out(),
                class,
                course.full_name
            ));

            if !ctx.show_all_courses && entries.len() == limit {
                show_more = index + 1 < courses.len();
                break;
            }
        }

        if entries.is_empty() {
            return;
        }

        let mut listing = String::from("<ul class=\"courselist\">");
        for entry in &entries {
            listing.push_str(entry);
        }
        if show_more {
            let url = match ctx.course {
                Some(course) => PageUrl::new("/user/view.php")
                    .with_param("id", ctx.user.id.to_string())
                    .with_param("course", course.id.to_string())
                    .with_param("showallcourses", "1"),
                None => PageUrl::new("/user/profile.php")
                    .with_param("id", ctx.user.id.to_string())
                    .with_param("showallcourses", "1"),
            };
            let view_more = ctx.strings.resolve("viewmore", "core");
            listing.push_str(&format!(
                "<li class=\"viewmore\"><a href=\"{}\" title=\"{view_more}\">{view_more}</a></li>",
                url.out()
            ));
        }
        listing.push_str("</ul>");

        tree.add_node(
            Node::new("coursedetails", "courseprofiles", ctx.strings.resolve("courseprofiles", "core"))
                .with_content(listing),
        );
    }

    fn add_course_context_nodes(
        &self,
        tree: &mut Tree,
        ctx: &ProfileContext<'_>,
        hidden: &HashSet<String>,
    ) {
        let Some(course) = ctx.course else {
            return;
        };
        let user = ctx.user;

        if let Some(roles) = ctx.data.roles_in_course(user.id, course.id) {
            tree.add_node(
                Node::new("coursedetails", "roles", ctx.strings.resolve("roles", "core"))
                    .with_content(roles),
            );
        }

        if !hidden.contains("groups") {
            let access_all = ctx
                .capabilities
                .can(caps::ACCESS_ALL_GROUPS, ctx.course_or_system_scope());
            let mut parts = Vec::new();
            for group in ctx.data.groups(course.id, user.id) {
                if course.group_mode == GroupMode::Separate
                    && !access_all
                    && ctx.render.viewer != user.id
                    && !ctx.data.is_group_member(group.id, user.id)
                {
                    continue;
                }
                if course.group_mode != GroupMode::None {
                    let url = PageUrl::new("/user/index.php")
                        .with_param("id", course.id.to_string())
                        .with_param("group", group.id.to_string());
                    parts.push(format!("<a href=\"{}\">{}</a>", url.out(), group.name));
                } else {
                    // The participants page only filters by group when the
                    // course actually uses groups, so no link here.
                    parts.push(group.name);
                }
            }
            if !parts.is_empty() {
                tree.add_node(
                    Node::new("coursedetails", "groups", ctx.strings.resolve("group", "core"))
                        .with_content(parts.join(", ")),
                );
            }
        }

        if !hidden.contains("suspended") && user.suspended {
            tree.add_node(
                Node::new("coursedetails", "suspended", "")
                    .with_content(ctx.strings.resolve("suspended", "auth")),
            );
        }
    }

    fn add_access_nodes(
        &self,
        tree: &mut Tree,
        ctx: &ProfileContext<'_>,
        hidden: &HashSet<String>,
    ) {
        let user = ctx.user;

        if !hidden.contains("firstaccess") && ctx.course.is_none() {
            let datestring = access_date_string(user.first_access, ctx.now, ctx.strings);
            if self.filter.allows("loginactivity", None) {
                tree.add_node(
                    Node::new("loginactivity", "firstaccess", ctx.strings.resolve("firstsiteaccess", "core"))
                        .with_content(datestring),
                );
            }
        }

        if !hidden.contains("lastaccess") {
            let (title, access) = match ctx.course {
                None => (ctx.strings.resolve("lastsiteaccess", "core"), user.last_access),
                Some(course) => (
                    ctx.strings.resolve("lastcourseaccess", "core"),
                    ctx.data.last_course_access(user.id, course.id),
                ),
            };
            let datestring = access_date_string(access, ctx.now, ctx.strings);
            if self.filter.allows("loginactivity", None) {
                tree.add_node(
                    Node::new("loginactivity", "lastaccess", title).with_content(datestring),
                );
            }
        }

        if ctx
            .capabilities
            .can(caps::VIEW_LAST_IP, CapabilityScope::User(user.id))
            && !hidden.contains("lastip")
        {
            let content = match non_empty(user.last_ip.as_deref()) {
                Some(ip) => {
                    let url = PageUrl::new("/iplookup/index.php")
                        .with_param("ip", ip)
                        .with_param("user", user.id.to_string());
                    format!("<a href=\"{}\">{ip}</a>", url.out())
                }
                None => ctx.strings.resolve("none", "core"),
            };
            if self.filter.allows("loginactivity", None) {
                tree.add_node(
                    Node::new("loginactivity", "lastip", ctx.strings.resolve("lastip", "core"))
                        .with_content(content),
                );
            }
        }
    }
}

/// Contact fields the viewer may not see. Privileged viewers see everything.
fn hidden_fields(ctx: &ProfileContext<'_>) -> HashSet<String> {
    if ctx
        .capabilities
        .can(caps::VIEW_HIDDEN_DETAILS, ctx.course_or_user_scope())
    {
        HashSet::new()
    } else {
        config::csv_set(ctx.config, config::CORE, keys::HIDDEN_USER_FIELDS)
    }
}

/// Identity fields shown to viewers holding the identity capability.
fn identity_fields(ctx: &ProfileContext<'_>) -> HashSet<String> {
    if ctx
        .capabilities
        .can(caps::VIEW_USER_IDENTITY, ctx.course_or_user_scope())
    {
        config::csv_set(ctx.config, config::CORE, keys::SHOW_USER_IDENTITY)
    } else {
        HashSet::new()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
