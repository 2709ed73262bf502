//! Display filter: which components may contribute to the profile page.
//!
//! When the simplified profile page is enabled, components (and
//! module-qualified plugins) on the exclusion lists are skipped before their
//! contributors run. With the simplified page off, everything runs and the
//! exclusion lists are ignored entirely.

use std::cell::OnceCell;
use std::collections::HashSet;

use crate::config::{self, keys};
use aula_sdk::host::ConfigStore;

/// Resolved exclusion policy for one render pass.
#[derive(Debug, Clone)]
pub struct DisplayFilter {
    simplified: bool,
    excluded_components: HashSet<String>,
    excluded_modules: HashSet<String>,
}

impl DisplayFilter {
    /// Read the policy from configuration. Malformed or absent exclusion
    /// lists behave as empty lists.
    pub fn from_config(store: &dyn ConfigStore) -> Self {
        Self {
            simplified: config::bool_value(
                store,
                config::COMPONENT,
                keys::SIMPLIFIED_PROFILE,
                true,
            ),
            excluded_components: config::csv_set(
                store,
                config::COMPONENT,
                keys::COMPONENTS_EXCLUSION,
            ),
            excluded_modules: config::csv_set(store, config::COMPONENT, keys::MODULES_EXCLUSION),
        }
    }

    /// Whether a component (optionally qualified by a module) may display.
    pub fn allows(&self, component: &str, module: Option<&str>) -> bool {
        if !self.simplified {
            return true;
        }
        match module {
            None => !self.excluded_components.contains(component),
            Some(module) => !self
                .excluded_modules
                .contains(&format!("{component}_{module}")),
        }
    }

    pub fn is_simplified(&self) -> bool {
        self.simplified
    }
}

/// Lazily computed, per-render-pass cache around [`DisplayFilter`].
///
/// The configuration is read at most once per render pass, on the first
/// `allows` call. Each pass owns its own instance, so a settings change is
/// picked up by the next request without any invalidation.
pub struct DisplayPolicy<'a> {
    store: &'a dyn ConfigStore,
    cached: OnceCell<DisplayFilter>,
}

impl<'a> DisplayPolicy<'a> {
    pub fn new(store: &'a dyn ConfigStore) -> Self {
        Self {
            store,
            cached: OnceCell::new(),
        }
    }

    /// The resolved filter, computed on first use.
    pub fn filter(&self) -> &DisplayFilter {
        self.cached
            .get_or_init(|| DisplayFilter::from_config(self.store))
    }

    /// Whether a component (optionally qualified by a module) may display.
    pub fn allows(&self, component: &str, module: Option<&str>) -> bool {
        self.filter().allows(component, module)
    }
}
