//! Theme settings: keys, shipped defaults, and typed readers.
//!
//! Settings live in the host's configuration store under the `theme_aula`
//! component (plus a handful of platform-level keys under `core`). Readers
//! here are total: a missing or malformed value falls back to the shipped
//! default rather than failing the render.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{Error, Result};
use aula_sdk::host::ConfigStore;

/// Component name for the theme's own settings.
pub const COMPONENT: &str = "theme_aula";

/// Component name for platform-level settings the theme reads.
pub const CORE: &str = "core";

/// Setting keys.
pub mod keys {
    /// Checkbox: streamline the profile page by applying the exclusion lists.
    pub const SIMPLIFIED_PROFILE: &str = "simplifiedprofilepage";
    /// Comma-separated component names excluded from the profile page.
    pub const COMPONENTS_EXCLUSION: &str = "profilecomponentsexclusion";
    /// Comma-separated `component_module` names excluded from the profile page.
    pub const MODULES_EXCLUSION: &str = "profilemodulesexclusion";
    /// Footer HTML shown on every page.
    pub const FOOTER_CONTENT: &str = "footercontent";
    /// JSON object mapping email-domain substrings to theme names.
    pub const EMAIL_VS_THEME: &str = "emailvstheme";

    /// Platform: comma-separated contact fields hidden from regular viewers.
    pub const HIDDEN_USER_FIELDS: &str = "hiddenuserfields";
    /// Platform: comma-separated identity fields shown to privileged viewers.
    pub const SHOW_USER_IDENTITY: &str = "showuseridentity";
    /// Platform: how many courses the profile lists before "view more".
    pub const NAV_COURSE_LIMIT: &str = "navcourselimit";
    /// Platform: whether the language menu is enabled at all.
    pub const LANG_MENU: &str = "langmenu";
}

/// Components excluded from the simplified profile page by default.
pub const DEFAULT_EXCLUDED_COMPONENTS: &str =
    "report,tool,gradereport,loginactivity,badges,miscellaneous,notes";

/// Modules excluded from the simplified profile page by default.
pub const DEFAULT_EXCLUDED_MODULES: &str = "tool_mobile,mod_forum";

/// Default footer content, overridable per site.
pub const DEFAULT_FOOTER_CONTENT: &str = r##"<div class="footer-stores">
    <a href="#"><img src="/theme/aula/pix/logos/logo-appstore.png" alt="Available on the App Store"></a>
    <a href="#"><img src="/theme/aula/pix/logos/logo-googleplay.png" alt="Available on Google Play"></a>
</div>"##;

/// Default email-domain to theme mapping, stored as JSON text.
pub const DEFAULT_THEME_MATCH: &str = r#"{
    "north.example.edu": "aula_north",
    "atlantic.example.edu": "aula_atlantic",
    "mines.example.edu": "aula_mines"
}"#;

/// Default course display limit when the platform setting is absent.
pub const DEFAULT_NAV_COURSE_LIMIT: usize = 10;

/// Read a boolean setting with a fallback.
pub fn bool_value(config: &dyn ConfigStore, component: &str, key: &str, default: bool) -> bool {
    match config.get(component, key) {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_i64().is_some_and(|v| v != 0),
        Some(Value::String(s)) => !s.is_empty() && s != "0" && s != "false",
        Some(_) | None => default,
    }
}

/// Read a string setting with a fallback.
pub fn string_value(
    config: &dyn ConfigStore,
    component: &str,
    key: &str,
    default: &str,
) -> String {
    match config.get(component, key) {
        Some(Value::String(s)) => s,
        Some(_) | None => default.to_string(),
    }
}

/// Read a comma-separated setting as a trimmed set.
///
/// Anything other than a string (or an empty string) yields the empty set:
/// a malformed exclusion list must never block the render.
pub fn csv_set(config: &dyn ConfigStore, component: &str, key: &str) -> HashSet<String> {
    let raw = match config.get(component, key) {
        Some(Value::String(s)) => s,
        Some(other) => {
            warn!(component, key, value = %other, "ignoring non-string list setting");
            return HashSet::new();
        }
        None => return HashSet::new(),
    };
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The configured course display limit for the profile page.
pub fn course_display_limit(config: &dyn ConfigStore) -> usize {
    match config.get(CORE, keys::NAV_COURSE_LIMIT) {
        Some(Value::Number(n)) => n
            .as_u64()
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_NAV_COURSE_LIMIT),
        Some(Value::String(s)) => s.parse().unwrap_or(DEFAULT_NAV_COURSE_LIMIT),
        Some(_) | None => DEFAULT_NAV_COURSE_LIMIT,
    }
}

/// The email-domain to theme mapping, in stored encounter order.
///
/// The setting is stored as JSON text (an object of domain substring to
/// theme name); a raw object value is accepted too. Malformed content yields
/// an empty mapping.
pub fn email_theme_map(config: &dyn ConfigStore) -> Vec<(String, String)> {
    let value = match config.get(COMPONENT, keys::EMAIL_VS_THEME) {
        Some(Value::String(text)) => match serde_json::from_str::<Value>(&text) {
            Ok(parsed) => parsed,
            Err(error) => {
                warn!(%error, "malformed emailvstheme setting, ignoring");
                return Vec::new();
            }
        },
        Some(value) => value,
        None => return Vec::new(),
    };

    match value {
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(domain, theme)| match theme {
                Value::String(theme) => Some((domain, theme)),
                _ => None,
            })
            .collect(),
        other => {
            warn!(value = %other, "emailvstheme setting is not an object, ignoring");
            Vec::new()
        }
    }
}

/// A config store backed by a single JSON file, used by the admin CLI.
///
/// Layout: one top-level object per component, one member per key. The whole
/// document is held in memory; `save` writes it back atomically enough for a
/// one-off CLI invocation.
pub struct JsonFileConfigStore {
    path: PathBuf,
    entries: RefCell<Map<String, Value>>,
}

impl JsonFileConfigStore {
    /// Load the store, starting empty when the file does not exist yet.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let text = fs::read_to_string(&path).map_err(|source| Error::Store {
                path: path.display().to_string(),
                source,
            })?;
            match serde_json::from_str::<Value>(&text) {
                Ok(Value::Object(map)) => map,
                Ok(_) | Err(_) => {
                    warn!(path = %path.display(), "config file is not a JSON object, starting empty");
                    Map::new()
                }
            }
        } else {
            Map::new()
        };
        Ok(Self {
            path,
            entries: RefCell::new(entries),
        })
    }

    /// Persist the store back to its file.
    pub fn save(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&*self.entries.borrow())?;
        fs::write(&self.path, text).map_err(|source| Error::Store {
            path: self.path.display().to_string(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for JsonFileConfigStore {
    fn get(&self, component: &str, key: &str) -> Option<Value> {
        self.entries
            .borrow()
            .get(component)
            .and_then(|section| section.get(key))
            .cloned()
    }

    fn set(&self, component: &str, key: &str, value: Value) {
        let mut entries = self.entries.borrow_mut();
        let section = entries
            .entry(component.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(section) = section {
            section.insert(key.to_string(), value);
        }
    }
}
