//! One-off setup routines: default settings and theme assignment.
//!
//! These run at install/upgrade time or from the admin CLI, never during a
//! render pass.

use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::config::{self, keys};
use crate::theme;
use aula_sdk::host::{ConfigStore, ProfileDataProvider};

/// The settings seeded on install, as (key, value) pairs under the theme
/// component.
fn default_settings() -> Vec<(&'static str, Value)> {
    vec![
        (keys::SIMPLIFIED_PROFILE, Value::Bool(true)),
        (
            keys::COMPONENTS_EXCLUSION,
            Value::String(config::DEFAULT_EXCLUDED_COMPONENTS.to_string()),
        ),
        (
            keys::MODULES_EXCLUSION,
            Value::String(config::DEFAULT_EXCLUDED_MODULES.to_string()),
        ),
        (
            keys::FOOTER_CONTENT,
            Value::String(config::DEFAULT_FOOTER_CONTENT.to_string()),
        ),
        (
            keys::EMAIL_VS_THEME,
            Value::String(config::DEFAULT_THEME_MATCH.to_string()),
        ),
    ]
}

/// Seed the default theme settings, writing only keys whose stored value
/// differs. Returns the number of keys written.
pub fn seed_default_settings(store: &dyn ConfigStore) -> usize {
    let mut written = 0;
    for (key, value) in default_settings() {
        let current = store.get(config::COMPONENT, key);
        if current.as_ref() != Some(&value) {
            store.set(config::COMPONENT, key, value);
            written += 1;
        }
    }
    info!(written, "seeded default theme settings");
    written
}

/// Apply the email-vs-theme mapping to one user; see
/// [`theme::assign_user_theme`].
pub fn assign_user_theme(
    data: &dyn ProfileDataProvider,
    store: &dyn ConfigStore,
    user: Uuid,
) -> anyhow::Result<Option<String>> {
    theme::assign_user_theme(data, store, user)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MapConfig(RefCell<HashMap<(String, String), Value>>);

    impl ConfigStore for MapConfig {
        fn get(&self, component: &str, key: &str) -> Option<Value> {
            self.0
                .borrow()
                .get(&(component.to_string(), key.to_string()))
                .cloned()
        }
        fn set(&self, component: &str, key: &str, value: Value) {
            self.0
                .borrow_mut()
                .insert((component.to_string(), key.to_string()), value);
        }
    }

    #[test]
    fn seeding_writes_all_defaults_once() {
        let store = MapConfig::default();
        assert_eq!(seed_default_settings(&store), 5);
        // Second run finds everything already in place.
        assert_eq!(seed_default_settings(&store), 0);
    }

    #[test]
    fn seeding_leaves_changed_values_alone_only_when_equal() {
        let store = MapConfig::default();
        seed_default_settings(&store);
        store.set(config::COMPONENT, keys::SIMPLIFIED_PROFILE, Value::Bool(false));
        // The changed key is rewritten to the default; the rest are not.
        assert_eq!(seed_default_settings(&store), 1);
    }
}
