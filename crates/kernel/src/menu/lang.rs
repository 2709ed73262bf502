//! Language-switcher menu built on the custom menu composer.

use crate::config::{self, keys};
use crate::menu::composer::CustomMenu;
use aula_sdk::context::RenderContext;
use aula_sdk::host::{ConfigStore, StringResolver};
use aula_sdk::types::CourseRecord;
use aula_sdk::url::PageUrl;

/// Sort key of the top-level language item, so it lands after everything
/// else in a shared navbar menu.
const LANGUAGE_MENU_SORT: i32 = 10_000;

/// Build the language-switcher menu, or `None` when it should not show.
///
/// The menu hides when the platform's language menu is disabled or when the
/// course forces a language. `translations` pairs language codes with their
/// display names, in the order the switcher should list them.
pub fn language_menu(
    render: &RenderContext,
    course: Option<&CourseRecord>,
    translations: &[(String, String)],
    config: &dyn ConfigStore,
    strings: &dyn StringResolver,
) -> Option<CustomMenu> {
    if !config::bool_value(config, config::CORE, keys::LANG_MENU, true) {
        return None;
    }
    if course.is_some_and(|c| c.forced_language.as_deref().is_some_and(|l| !l.is_empty())) {
        return None;
    }
    if translations.len() < 2 {
        return None;
    }

    let language_label = strings.resolve("language", "core");
    let current_name = translations
        .iter()
        .find(|(code, _)| *code == render.language)
        .map(|(_, name)| name.clone())
        .unwrap_or_else(|| language_label.clone());

    let mut menu = CustomMenu::new(render);
    let top = menu.add(
        &current_name,
        Some(PageUrl::new("#")),
        Some(&language_label),
        Some(LANGUAGE_MENU_SORT),
        Some(&format!("flag-icon flag-icon-{}", render.language)),
    );
    for (code, name) in translations {
        let url = render.page.clone().with_param("lang", code);
        top.add(name, Some(url), None, None, Some(&format!("flag-icon flag-icon-{code}")));
    }

    Some(menu)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use aula_sdk::types::GroupMode;
    use serde_json::Value;
    use uuid::Uuid;

    struct NoConfig;
    impl ConfigStore for NoConfig {
        fn get(&self, _component: &str, _key: &str) -> Option<Value> {
            None
        }
        fn set(&self, _component: &str, _key: &str, _value: Value) {}
    }

    struct Keys;
    impl StringResolver for Keys {
        fn resolve(&self, key: &str, _component: &str) -> String {
            key.to_string()
        }
    }

    fn translations() -> Vec<(String, String)> {
        vec![
            ("en".to_string(), "English".to_string()),
            ("fr".to_string(), "Français".to_string()),
        ]
    }

    fn render() -> RenderContext {
        RenderContext::for_user(
            Uuid::now_v7(),
            "en",
            PageUrl::new("/course/view.php").with_param("id", "5"),
        )
    }

    fn course(forced: Option<&str>) -> CourseRecord {
        CourseRecord {
            id: Uuid::now_v7(),
            full_name: "Course".to_string(),
            short_name: "C1".to_string(),
            category: Some("Science".to_string()),
            visible: true,
            group_mode: GroupMode::Visible,
            forced_language: forced.map(str::to_string),
        }
    }

    #[test]
    fn top_item_carries_current_language_and_flag() {
        let menu = language_menu(&render(), None, &translations(), &NoConfig, &Keys)
            .expect("menu should build");
        let top = &menu.children()[0];
        assert_eq!(top.text(), "English");
        assert_eq!(top.sort(), 10_000);
        assert_eq!(top.icon_classes(), Some("flag-icon flag-icon-en"));
        assert_eq!(top.children().len(), 2);
    }

    #[test]
    fn children_link_current_page_with_lang_param() {
        let menu = language_menu(&render(), None, &translations(), &NoConfig, &Keys)
            .expect("menu should build");
        let child = &menu.children()[0].children()[1];
        assert_eq!(child.text(), "Français");
        let url = child.url().expect("child has url").out();
        assert_eq!(url, "/course/view.php?id=5&lang=fr");
    }

    #[test]
    fn forced_course_language_suppresses_menu() {
        let forced = course(Some("fr"));
        assert!(language_menu(&render(), Some(&forced), &translations(), &NoConfig, &Keys).is_none());

        let unforced = course(None);
        assert!(language_menu(&render(), Some(&unforced), &translations(), &NoConfig, &Keys).is_some());
    }

    #[test]
    fn disabled_lang_menu_suppresses_menu() {
        struct Disabled;
        impl ConfigStore for Disabled {
            fn get(&self, _component: &str, key: &str) -> Option<Value> {
                (key == keys::LANG_MENU).then_some(Value::Bool(false))
            }
            fn set(&self, _component: &str, _key: &str, _value: Value) {}
        }
        assert!(language_menu(&render(), None, &translations(), &Disabled, &Keys).is_none());
    }

    #[test]
    fn single_translation_suppresses_menu() {
        let one = vec![("en".to_string(), "English".to_string())];
        assert!(language_menu(&render(), None, &one, &NoConfig, &Keys).is_none());
    }

    #[test]
    fn unknown_current_language_falls_back_to_generic_label() {
        let ctx = RenderContext::for_user(Uuid::now_v7(), "de", PageUrl::new("/index.php"));
        let menu = language_menu(&ctx, None, &translations(), &NoConfig, &Keys)
            .expect("menu should build");
        assert_eq!(menu.children()[0].text(), "language");
    }
}
