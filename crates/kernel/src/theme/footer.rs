//! Footer composition: configured content plus plugin fragments.
//!
//! Plugins contribute footer fragments through an explicit hook registry,
//! collected in registration order and rendered as a list rather than a
//! single opaque HTML blob.

use std::sync::Arc;

use serde::Serialize;

use crate::config::{self, keys};
use aula_sdk::context::RenderContext;
use aula_sdk::contributor::FooterHook;
use aula_sdk::host::ConfigStore;

/// Registry of footer fragment contributors.
#[derive(Default)]
pub struct FooterRegistry {
    hooks: Vec<Arc<dyn FooterHook>>,
}

impl FooterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: Arc<dyn FooterHook>) {
        self.hooks.push(hook);
    }

    /// Collect plugin fragments for this render, in registration order.
    pub fn fragments(&self, render: &RenderContext) -> Vec<String> {
        self.hooks
            .iter()
            .filter_map(|hook| hook.footer_fragment(render))
            .collect()
    }

    /// Build the full footer export: configured content plus fragments.
    pub fn export(&self, config: &dyn ConfigStore, render: &RenderContext) -> FooterExport {
        FooterExport {
            content: config::string_value(
                config,
                config::COMPONENT,
                keys::FOOTER_CONTENT,
                config::DEFAULT_FOOTER_CONTENT,
            ),
            fragments: self.fragments(render),
        }
    }
}

/// Serializable footer projection for the page template.
#[derive(Debug, Clone, Serialize)]
pub struct FooterExport {
    /// Admin-configured footer HTML.
    pub content: String,
    /// Plugin-contributed fragments, rendered as a list.
    pub fragments: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use aula_sdk::url::PageUrl;
    use serde_json::Value;
    use uuid::Uuid;

    struct NoConfig;
    impl ConfigStore for NoConfig {
        fn get(&self, _component: &str, _key: &str) -> Option<Value> {
            None
        }
        fn set(&self, _component: &str, _key: &str, _value: Value) {}
    }

    struct StaticFragment(&'static str);
    impl FooterHook for StaticFragment {
        fn component(&self) -> &str {
            "test"
        }
        fn footer_fragment(&self, _render: &RenderContext) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    struct Silent;
    impl FooterHook for Silent {
        fn component(&self) -> &str {
            "silent"
        }
        fn footer_fragment(&self, _render: &RenderContext) -> Option<String> {
            None
        }
    }

    fn render() -> RenderContext {
        RenderContext::for_user(Uuid::now_v7(), "en", PageUrl::new("/index.php"))
    }

    #[test]
    fn fragments_keep_registration_order_and_skip_silent_hooks() {
        let mut registry = FooterRegistry::new();
        registry.register(Arc::new(StaticFragment("<p>one</p>")));
        registry.register(Arc::new(Silent));
        registry.register(Arc::new(StaticFragment("<p>two</p>")));

        let fragments = registry.fragments(&render());
        assert_eq!(fragments, ["<p>one</p>", "<p>two</p>"]);
    }

    #[test]
    fn export_falls_back_to_default_content() {
        let registry = FooterRegistry::new();
        let export = registry.export(&NoConfig, &render());
        assert_eq!(export.content, config::DEFAULT_FOOTER_CONTENT);
        assert!(export.fragments.is_empty());
    }

    #[test]
    fn export_uses_configured_content() {
        struct Configured;
        impl ConfigStore for Configured {
            fn get(&self, _component: &str, key: &str) -> Option<Value> {
                (key == keys::FOOTER_CONTENT).then(|| Value::String("<p>custom</p>".into()))
            }
            fn set(&self, _component: &str, _key: &str, _value: Value) {}
        }
        let registry = FooterRegistry::new();
        let export = registry.export(&Configured, &render());
        assert_eq!(export.content, "<p>custom</p>");
    }
}
