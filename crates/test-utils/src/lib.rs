//! Aula test utilities.
//!
//! Fixtures and in-memory fakes for the host collaborators: user/course
//! records, capability sets, key-echoing strings, and a map-backed config
//! store. Kernel unit and integration tests build their scenarios from
//! these.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use aula_sdk::host::{
    CapabilityChecker, CapabilityScope, ConfigStore, ImageStore, ProfileDataProvider,
    StoredImage, StringResolver,
};
use aula_sdk::types::{
    CourseRecord, CustomField, GroupMode, GroupRecord, MailVisibility, UserRecord,
};

/// Create a test user with a stable id and a filled email.
pub fn test_user(fullname: &str) -> UserRecord {
    let mut user = UserRecord::bare(Uuid::now_v7(), fullname.to_lowercase(), fullname);
    user.email = format!("{}@example.edu", user.username);
    user.mail_display = MailVisibility::Everyone;
    user
}

/// Create a visible test course in a category.
pub fn test_course(full_name: &str) -> CourseRecord {
    CourseRecord {
        id: Uuid::now_v7(),
        full_name: full_name.to_string(),
        short_name: full_name.to_lowercase().replace(' ', "-"),
        category: Some("Science".to_string()),
        visible: true,
        group_mode: GroupMode::Visible,
        forced_language: None,
    }
}

/// Capability checker backed by a plain set of granted capability names.
/// Scope is ignored: a grant applies everywhere.
#[derive(Default)]
pub struct FakeCapabilities {
    granted: HashSet<String>,
}

impl FakeCapabilities {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn grant(mut self, capability: &str) -> Self {
        self.granted.insert(capability.to_string());
        self
    }
}

impl CapabilityChecker for FakeCapabilities {
    fn can(&self, capability: &str, _scope: CapabilityScope) -> bool {
        self.granted.contains(capability)
    }
}

/// String resolver that echoes the key, matching the resolver's fallback
/// contract. Tests assert on keys instead of translated text.
pub struct KeyStrings;

impl StringResolver for KeyStrings {
    fn resolve(&self, key: &str, _component: &str) -> String {
        key.to_string()
    }
}

/// Map-backed config store.
#[derive(Default)]
pub struct MemoryConfig {
    entries: RefCell<HashMap<(String, String), Value>>,
}

impl MemoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style set for fixture setup.
    pub fn with(self, component: &str, key: &str, value: Value) -> Self {
        self.set(component, key, value);
        self
    }
}

impl ConfigStore for MemoryConfig {
    fn get(&self, component: &str, key: &str) -> Option<Value> {
        self.entries
            .borrow()
            .get(&(component.to_string(), key.to_string()))
            .cloned()
    }

    fn set(&self, component: &str, key: &str, value: Value) {
        self.entries
            .borrow_mut()
            .insert((component.to_string(), key.to_string()), value);
    }
}

/// In-memory profile data provider. Start from `FakeData::new(user)` and
/// chain `with_*` builders for the scenario under test.
pub struct FakeData {
    users: RefCell<HashMap<Uuid, UserRecord>>,
    courses: HashMap<Uuid, Vec<CourseRecord>>,
    roles: HashMap<(Uuid, Uuid), String>,
    groups: HashMap<(Uuid, Uuid), Vec<GroupRecord>>,
    members: HashSet<(Uuid, Uuid)>,
    shared: HashSet<(Uuid, Uuid)>,
    course_access: HashMap<(Uuid, Uuid), DateTime<Utc>>,
    interests: HashMap<Uuid, Vec<String>>,
    custom_fields: HashMap<Uuid, Vec<CustomField>>,
    themes: Vec<String>,
}

impl FakeData {
    pub fn new(user: &UserRecord) -> Self {
        let mut users = HashMap::new();
        users.insert(user.id, user.clone());
        Self {
            users: RefCell::new(users),
            courses: HashMap::new(),
            roles: HashMap::new(),
            groups: HashMap::new(),
            members: HashSet::new(),
            shared: HashSet::new(),
            course_access: HashMap::new(),
            interests: HashMap::new(),
            custom_fields: HashMap::new(),
            themes: vec!["aula".to_string()],
        }
    }

    pub fn with_user(self, user: &UserRecord) -> Self {
        self.users.borrow_mut().insert(user.id, user.clone());
        self
    }

    pub fn with_enrolments(mut self, user: Uuid, courses: Vec<CourseRecord>) -> Self {
        self.courses.insert(user, courses);
        self
    }

    pub fn with_roles(mut self, user: Uuid, course: Uuid, roles: &str) -> Self {
        self.roles.insert((user, course), roles.to_string());
        self
    }

    pub fn with_groups(mut self, course: Uuid, user: Uuid, groups: Vec<GroupRecord>) -> Self {
        for group in &groups {
            self.members.insert((group.id, user));
        }
        self.groups.insert((course, user), groups);
        self
    }

    /// A group the subject appears in but is not a member of, for
    /// separate-groups filtering tests.
    pub fn with_foreign_group(mut self, course: Uuid, user: Uuid, group: GroupRecord) -> Self {
        self.groups.entry((course, user)).or_default().push(group);
        self
    }

    pub fn with_shared_course(mut self, a: Uuid, b: Uuid) -> Self {
        self.shared.insert((a, b));
        self.shared.insert((b, a));
        self
    }

    pub fn with_course_access(mut self, user: Uuid, course: Uuid, at: DateTime<Utc>) -> Self {
        self.course_access.insert((user, course), at);
        self
    }

    pub fn with_interests(mut self, user: Uuid, interests: Vec<String>) -> Self {
        self.interests.insert(user, interests);
        self
    }

    pub fn with_custom_fields(mut self, user: Uuid, fields: Vec<CustomField>) -> Self {
        self.custom_fields.insert(user, fields);
        self
    }

    pub fn with_installed_themes(mut self, themes: Vec<String>) -> Self {
        self.themes = themes;
        self
    }
}

impl ProfileDataProvider for FakeData {
    fn user(&self, id: Uuid) -> Option<UserRecord> {
        self.users.borrow().get(&id).cloned()
    }

    fn enrolled_courses(&self, user: Uuid) -> Vec<CourseRecord> {
        self.courses.get(&user).cloned().unwrap_or_default()
    }

    fn roles_in_course(&self, user: Uuid, course: Uuid) -> Option<String> {
        self.roles.get(&(user, course)).cloned()
    }

    fn groups(&self, course: Uuid, user: Uuid) -> Vec<GroupRecord> {
        self.groups.get(&(course, user)).cloned().unwrap_or_default()
    }

    fn is_group_member(&self, group: Uuid, user: Uuid) -> bool {
        self.members.contains(&(group, user))
    }

    fn shares_course(&self, a: Uuid, b: Uuid) -> bool {
        self.shared.contains(&(a, b))
    }

    fn last_course_access(&self, user: Uuid, course: Uuid) -> Option<DateTime<Utc>> {
        self.course_access.get(&(user, course)).copied()
    }

    fn interests(&self, user: Uuid) -> Vec<String> {
        self.interests.get(&user).cloned().unwrap_or_default()
    }

    fn custom_fields(&self, user: Uuid) -> Vec<CustomField> {
        self.custom_fields.get(&user).cloned().unwrap_or_default()
    }

    fn installed_themes(&self) -> Vec<String> {
        self.themes.clone()
    }

    fn set_user_theme(&self, user: Uuid, theme: &str) -> anyhow::Result<()> {
        let mut users = self.users.borrow_mut();
        let record = users
            .get_mut(&user)
            .ok_or_else(|| anyhow::anyhow!("unknown user {user}"))?;
        record.theme = Some(theme.to_string());
        Ok(())
    }
}

/// Image store backed by a list of (component, area, image) entries.
#[derive(Default)]
pub struct FakeImages {
    files: Vec<(String, String, StoredImage)>,
}

impl FakeImages {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, component: &str, area: &str, filename: &str, url: &str) -> Self {
        self.files.push((
            component.to_string(),
            area.to_string(),
            StoredImage {
                filename: filename.to_string(),
                url: url.to_string(),
            },
        ));
        self
    }
}

impl ImageStore for FakeImages {
    fn area_files(&self, component: &str, area: &str) -> Vec<StoredImage> {
        self.files
            .iter()
            .filter(|(c, a, _)| c == component && a == area)
            .map(|(_, _, f)| f.clone())
            .collect()
    }
}
