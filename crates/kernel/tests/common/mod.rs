//! Shared harness for kernel integration tests.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use aula_kernel::profile::NavigationRegistry;
use aula_sdk::context::{ProfileContext, RenderContext};
use aula_sdk::tree::Tree;
use aula_sdk::types::{CourseRecord, UserRecord};
use aula_sdk::url::PageUrl;
use aula_test_utils::{FakeCapabilities, FakeData, KeyStrings, MemoryConfig, test_user};

/// One profile-view scenario: the subject, the viewer, and all fakes.
pub struct Scenario {
    pub user: UserRecord,
    pub course: Option<CourseRecord>,
    pub data: FakeData,
    pub caps: FakeCapabilities,
    pub strings: KeyStrings,
    pub config: MemoryConfig,
    pub render: RenderContext,
    pub is_own_profile: bool,
    pub show_all_courses: bool,
    pub now: DateTime<Utc>,
}

impl Scenario {
    /// A subject viewed by an unrelated, unprivileged user.
    pub fn viewed_by_other() -> Self {
        let user = test_user("Ada Lovelace");
        let data = FakeData::new(&user);
        let render = RenderContext::for_user(
            Uuid::now_v7(),
            "en",
            PageUrl::new("/user/profile.php").with_param("id", user.id.to_string()),
        );
        Self {
            user,
            course: None,
            data,
            caps: FakeCapabilities::none(),
            strings: KeyStrings,
            config: MemoryConfig::new(),
            render,
            is_own_profile: false,
            show_all_courses: false,
            now: fixed_now(),
        }
    }

    /// A subject viewing their own profile.
    pub fn own_profile() -> Self {
        let mut scenario = Self::viewed_by_other();
        scenario.render.viewer = scenario.user.id;
        scenario.is_own_profile = true;
        scenario
    }

    pub fn ctx(&self) -> ProfileContext<'_> {
        ProfileContext {
            user: &self.user,
            is_own_profile: self.is_own_profile,
            course: self.course.as_ref(),
            show_all_courses: self.show_all_courses,
            now: self.now,
            render: &self.render,
            data: &self.data,
            capabilities: &self.caps,
            strings: &self.strings,
            config: &self.config,
        }
    }

    pub fn build(&self, registry: &NavigationRegistry) -> Tree {
        registry.build_tree(&self.ctx())
    }

    pub fn build_core_only(&self) -> Tree {
        self.build(&NavigationRegistry::new())
    }
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().unwrap_or_else(Utc::now)
}

/// Node keys of a category, in resolved order.
pub fn node_keys<'a>(tree: &'a Tree, category: &str) -> Vec<&'a str> {
    tree.nodes(category).iter().map(|n| n.key()).collect()
}

/// Find a node anywhere in a sorted tree.
pub fn find_node<'a>(tree: &'a Tree, key: &str) -> Option<&'a aula_sdk::tree::Node> {
    tree.categories()
        .iter()
        .flat_map(|c| c.nodes().iter())
        .find(|n| n.key() == key)
}
