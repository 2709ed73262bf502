//! Navigation registry: the ordered contributor list and the tree build.
//!
//! Contributors are collected once at startup (core is built in, then
//! platform subsystems, then plugins) instead of being discovered by
//! scanning installed components at render time. Each build walks the list
//! in that fixed order, gating subsystems and plugins through the display
//! filter before they run.

use std::sync::Arc;

use tracing::debug;

use crate::profile::core::CoreContributor;
use crate::profile::filter::DisplayPolicy;
use aula_sdk::context::ProfileContext;
use aula_sdk::contributor::ProfileContributor;
use aula_sdk::tree::Tree;

/// Ordered registry of profile navigation contributors.
#[derive(Default)]
pub struct NavigationRegistry {
    subsystems: Vec<Arc<dyn ProfileContributor>>,
    plugins: Vec<Arc<dyn ProfileContributor>>,
}

impl NavigationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a platform-subsystem contributor. Subsystems run after the
    /// core contributor, in registration order.
    pub fn register_subsystem(&mut self, contributor: Arc<dyn ProfileContributor>) {
        self.subsystems.push(contributor);
    }

    /// Register a plugin contributor. Plugins run last, in registration
    /// order.
    pub fn register_plugin(&mut self, contributor: Arc<dyn ProfileContributor>) {
        self.plugins.push(contributor);
    }

    /// Number of registered contributors, core excluded.
    pub fn len(&self) -> usize {
        self.subsystems.len() + self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subsystems.is_empty() && self.plugins.is_empty()
    }

    /// Build the fully sorted navigation tree for one profile view.
    ///
    /// The display filter is resolved lazily and lives only for this build;
    /// an excluded contributor is skipped entirely, never partially run.
    pub fn build_tree(&self, ctx: &ProfileContext<'_>) -> Tree {
        let mut tree = Tree::new();
        let filter = DisplayPolicy::new(ctx.config);

        CoreContributor::new(&filter).navigation(&mut tree, ctx);

        for contributor in &self.subsystems {
            if !filter.allows(contributor.component(), None) {
                debug!(component = contributor.component(), "subsystem excluded");
                continue;
            }
            contributor.navigation(&mut tree, ctx);
        }

        for contributor in &self.plugins {
            let component = contributor.component();
            if !filter.allows(component, None) {
                debug!(component, "plugin component excluded");
                continue;
            }
            if let Some(module) = contributor.module()
                && !filter.allows(component, Some(module))
            {
                debug!(component, module, "plugin module excluded");
                continue;
            }
            contributor.navigation(&mut tree, ctx);
        }

        tree.sort();
        tree
    }
}
