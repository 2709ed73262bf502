//! Core record types for the theme layer.
//!
//! These are read-only snapshots of platform records, loaded by the host
//! before a render pass starts. Contributors receive them by reference and
//! never mutate them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who may see a user's email address, per the user's own preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MailVisibility {
    /// Hidden from everyone except privileged viewers.
    Hidden,
    /// Visible to any viewer of the profile.
    Everyone,
    /// Visible to users sharing at least one course enrolment.
    CourseMembers,
}

/// Group mode of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupMode {
    /// Groups are not used; group names render without links.
    None,
    /// Members only see their own groups.
    Separate,
    /// Everyone sees all groups.
    Visible,
}

/// A user record with the contact and activity fields the profile page reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub fullname: String,
    pub email: String,
    pub mail_display: MailVisibility,
    /// Link to the user's profile on the federated learning network.
    pub network_profile: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub phone1: Option<String>,
    pub phone2: Option<String>,
    pub institution: Option<String>,
    pub department: Option<String>,
    pub id_number: Option<String>,
    pub suspended: bool,
    pub deleted: bool,
    pub site_admin: bool,
    /// Theme assigned to the user, if any.
    pub theme: Option<String>,
    pub first_access: Option<DateTime<Utc>>,
    pub last_access: Option<DateTime<Utc>>,
    pub last_ip: Option<String>,
}

/// A course record with the fields the profile page and menus read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: Uuid,
    pub full_name: String,
    pub short_name: String,
    /// Category name; courses without a category are not listed on profiles.
    pub category: Option<String>,
    pub visible: bool,
    pub group_mode: GroupMode,
    /// When set, the course forces this language and the language menu hides.
    pub forced_language: Option<String>,
}

/// A group a user belongs to within a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupRecord {
    pub id: Uuid,
    pub name: String,
}

/// A custom profile field with its display value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomField {
    pub shortname: String,
    pub name: String,
    pub value: String,
    pub visible: bool,
}

/// The site record consumed by the front-page layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteRecord {
    pub full_name: String,
    pub summary: Option<String>,
}

impl UserRecord {
    /// A minimal record with empty contact fields; tests and fixtures fill
    /// in what they need.
    pub fn bare(id: Uuid, username: impl Into<String>, fullname: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            fullname: fullname.into(),
            email: String::new(),
            mail_display: MailVisibility::Hidden,
            network_profile: None,
            country: None,
            city: None,
            address: None,
            phone1: None,
            phone2: None,
            institution: None,
            department: None,
            id_number: None,
            suspended: false,
            deleted: false,
            site_admin: false,
            theme: None,
            first_access: None,
            last_access: None,
            last_ip: None,
        }
    }
}
