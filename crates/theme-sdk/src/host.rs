//! Host collaborator traits.
//!
//! The theme layer never talks to storage or the permission engine directly;
//! the host platform hands it these collaborators at the start of a render
//! pass. All of them are synchronous and expected to answer from records the
//! host has already loaded.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::types::{CourseRecord, CustomField, GroupRecord, UserRecord};

/// Capability names consumed by the theme layer.
///
/// Evaluation is entirely the host's business; the theme only asks yes/no
/// questions and silently suppresses output on a denial.
pub mod caps {
    /// See contact fields the subject marked hidden.
    pub const VIEW_HIDDEN_DETAILS: &str = "user:viewhiddendetails";
    /// See the site-configured identity fields (address, phones, ...).
    pub const VIEW_USER_IDENTITY: &str = "site:viewuseridentity";
    /// See a user's email regardless of their preference, within a course.
    pub const VIEW_USER_EMAIL: &str = "course:useremail";
    /// Impersonate another user.
    pub const LOGIN_AS: &str = "user:loginas";
    /// View another user's full profile page.
    pub const VIEW_PROFILE: &str = "user:viewprofile";
    /// View and manage another user's preference pages.
    pub const VIEW_PREFERENCES: &str = "user:viewpreferences";
    /// See courses hidden from regular participants.
    pub const VIEW_HIDDEN_COURSES: &str = "course:viewhiddencourses";
    /// See all groups in separate-groups mode.
    pub const ACCESS_ALL_GROUPS: &str = "site:accessallgroups";
    /// See the last IP address a user connected from.
    pub const VIEW_LAST_IP: &str = "user:viewlastip";
}

/// Where a capability is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityScope {
    System,
    User(Uuid),
    Course(Uuid),
}

/// Opaque boolean capability check.
pub trait CapabilityChecker {
    fn can(&self, capability: &str, scope: CapabilityScope) -> bool;
}

/// Localized string lookup. Lookup failure is never fatal: implementations
/// return the key itself when no translation exists.
pub trait StringResolver {
    fn resolve(&self, key: &str, component: &str) -> String;

    /// Lookup with a single `{$a}`-style substitution argument.
    fn resolve_arg(&self, key: &str, component: &str, arg: &str) -> String {
        let text = self.resolve(key, component);
        text.replace("{$a}", arg)
    }
}

/// Read/write access to admin-configured settings, keyed by component.
///
/// Single-threaded per render pass; implementations use interior mutability
/// rather than `&mut self` so they can sit behind a shared reference.
pub trait ConfigStore {
    fn get(&self, component: &str, key: &str) -> Option<serde_json::Value>;
    fn set(&self, component: &str, key: &str, value: serde_json::Value);
}

/// Read-only accessors for user, course, and enrolment records.
pub trait ProfileDataProvider {
    fn user(&self, id: Uuid) -> Option<UserRecord>;

    /// Active enrolments of a user, in the host's listing order.
    fn enrolled_courses(&self, user: Uuid) -> Vec<CourseRecord>;

    /// Localized, comma-joined role names of a user within a course.
    fn roles_in_course(&self, user: Uuid, course: Uuid) -> Option<String>;

    /// Groups the user belongs to within a course.
    fn groups(&self, course: Uuid, user: Uuid) -> Vec<GroupRecord>;

    fn is_group_member(&self, group: Uuid, user: Uuid) -> bool;

    /// Whether two users share at least one course enrolment.
    fn shares_course(&self, a: Uuid, b: Uuid) -> bool;

    /// Last time the user accessed a specific course.
    fn last_course_access(&self, user: Uuid, course: Uuid) -> Option<DateTime<Utc>>;

    /// The user's interest tags, site-wide.
    fn interests(&self, user: Uuid) -> Vec<String>;

    /// Custom profile fields with display values.
    fn custom_fields(&self, user: Uuid) -> Vec<CustomField>;

    /// Names of installed themes.
    fn installed_themes(&self) -> Vec<String>;

    /// Assign a theme to a user.
    fn set_user_theme(&self, user: Uuid, theme: &str) -> anyhow::Result<()>;
}

/// An uploaded image as the host stores it.
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub filename: String,
    pub url: String,
}

/// Read-only access to uploaded image areas (e.g. the profile background).
pub trait ImageStore {
    /// All images uploaded to a (component, area) pair.
    fn area_files(&self, component: &str, area: &str) -> Vec<StoredImage>;
}
