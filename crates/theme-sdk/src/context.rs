//! Render and profile request context.
//!
//! The original design read the current page, current user, and clock from
//! ambient globals; here everything a builder needs travels in explicit
//! context values created once per render pass.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::host::{CapabilityChecker, ConfigStore, ProfileDataProvider, StringResolver};
use crate::types::{CourseRecord, UserRecord};
use crate::url::PageUrl;

/// Per-request facts about the viewer and the page being rendered.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// The viewing user.
    pub viewer: Uuid,
    pub logged_in: bool,
    pub guest: bool,
    /// Whether the session is currently impersonating another user.
    pub logged_in_as: bool,
    /// Language the page renders in.
    pub language: String,
    /// URL of the page being rendered.
    pub page: PageUrl,
}

impl RenderContext {
    /// Context for an authenticated viewer on a page.
    pub fn for_user(viewer: Uuid, language: impl Into<String>, page: PageUrl) -> Self {
        Self {
            viewer,
            logged_in: true,
            guest: false,
            logged_in_as: false,
            language: language.into(),
            page,
        }
    }

    /// Context for an anonymous visitor.
    pub fn anonymous(language: impl Into<String>, page: PageUrl) -> Self {
        Self {
            viewer: Uuid::nil(),
            logged_in: false,
            guest: true,
            logged_in_as: false,
            language: language.into(),
            page,
        }
    }
}

/// Everything a profile-tree contributor may consult: the subject, the
/// optional course context, and the host collaborators.
pub struct ProfileContext<'a> {
    /// The user whose profile is being rendered.
    pub user: &'a UserRecord,
    /// Whether the viewer is looking at their own profile.
    pub is_own_profile: bool,
    /// Course context, when the profile is viewed from within a course.
    pub course: Option<&'a CourseRecord>,
    /// Whether the request asked for the full course list (`showallcourses=1`).
    pub show_all_courses: bool,
    /// The render pass clock, used for elapsed-time formatting.
    pub now: DateTime<Utc>,
    pub render: &'a RenderContext,
    pub data: &'a dyn ProfileDataProvider,
    pub capabilities: &'a dyn CapabilityChecker,
    pub strings: &'a dyn StringResolver,
    pub config: &'a dyn ConfigStore,
}

impl ProfileContext<'_> {
    /// Scope for user-level capability checks: the course when present,
    /// otherwise the subject user.
    pub fn course_or_user_scope(&self) -> crate::host::CapabilityScope {
        match self.course {
            Some(course) => crate::host::CapabilityScope::Course(course.id),
            None => crate::host::CapabilityScope::User(self.user.id),
        }
    }

    /// Scope for site-level capability checks: the course when present,
    /// otherwise the system.
    pub fn course_or_system_scope(&self) -> crate::host::CapabilityScope {
        match self.course {
            Some(course) => crate::host::CapabilityScope::Course(course.id),
            None => crate::host::CapabilityScope::System,
        }
    }
}
