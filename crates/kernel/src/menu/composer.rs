//! Recursive custom menu with sort keys, icons, and current-page state.
//!
//! Items added without an explicit sort key keep strict insertion order
//! (each gets the parent's running counter plus one). Whether an item is the
//! current page is decided once, at construction, by comparing its URL to
//! the render context's page URL with query strings stripped; it never
//! changes afterwards.

use serde::Serialize;

use aula_sdk::context::RenderContext;
use aula_sdk::url::PageUrl;

/// The query-stripped current-page comparator, inherited by every item so
/// nested `add` calls see the same ambient page.
#[derive(Debug, Clone, Default)]
struct CurrentPage(Option<String>);

impl CurrentPage {
    fn matches(&self, url: Option<&PageUrl>) -> bool {
        match (&self.0, url) {
            (Some(page), Some(url)) => *page == url.out_omit_query(),
            _ => false,
        }
    }
}

/// One entry in a custom menu. Exclusively owns its children.
#[derive(Debug)]
pub struct MenuItem {
    text: String,
    url: Option<PageUrl>,
    title: String,
    sort: i32,
    icon_classes: Option<String>,
    is_current_page: bool,
    children: Vec<MenuItem>,
    last_sort: i32,
    page: CurrentPage,
}

impl MenuItem {
    fn new(
        text: &str,
        url: Option<PageUrl>,
        title: Option<&str>,
        sort: i32,
        icon_classes: Option<&str>,
        page: CurrentPage,
    ) -> Self {
        let is_current_page = page.matches(url.as_ref());
        Self {
            text: text.to_string(),
            url,
            title: title.unwrap_or(text).to_string(),
            sort,
            icon_classes: icon_classes.map(str::to_string),
            is_current_page,
            children: Vec::new(),
            last_sort: 0,
            page,
        }
    }

    /// Append a child under this item and return it for further nesting.
    ///
    /// Without an explicit sort key the child gets `last_sort + 1`; either
    /// way the running counter moves to the key used.
    pub fn add(
        &mut self,
        text: &str,
        url: Option<PageUrl>,
        title: Option<&str>,
        sort: Option<i32>,
        icon_classes: Option<&str>,
    ) -> &mut MenuItem {
        let sort = sort.unwrap_or(self.last_sort + 1);
        self.last_sort = sort;
        self.children
            .push(MenuItem::new(text, url, title, sort, icon_classes, self.page.clone()));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> Option<&PageUrl> {
        self.url.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sort(&self) -> i32 {
        self.sort
    }

    pub fn icon_classes(&self) -> Option<&str> {
        self.icon_classes.as_deref()
    }

    pub fn is_current_page(&self) -> bool {
        self.is_current_page
    }

    pub fn children(&self) -> &[MenuItem] {
        &self.children
    }

    /// Export this item (and its subtree) for a template renderer. Children
    /// are ordered by sort key, stable among equals.
    pub fn export_for_display(&self) -> MenuItemDisplay {
        let mut children: Vec<&MenuItem> = self.children.iter().collect();
        children.sort_by_key(|c| c.sort);
        MenuItemDisplay {
            text: self.text.clone(),
            url: self.url.as_ref().map(PageUrl::out),
            title: self.title.clone(),
            icon_classes: self.icon_classes.clone(),
            additional_classes: if self.is_current_page {
                "currentpage".to_string()
            } else {
                String::new()
            },
            children: children.iter().map(|c| c.export_for_display()).collect(),
        }
    }
}

/// Serializable projection of a menu item for template rendering.
#[derive(Debug, Clone, Serialize)]
pub struct MenuItemDisplay {
    pub text: String,
    pub url: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_classes: Option<String>,
    pub additional_classes: String,
    pub children: Vec<MenuItemDisplay>,
}

/// A custom menu bound to one render pass.
#[derive(Debug)]
pub struct CustomMenu {
    root: MenuItem,
}

impl CustomMenu {
    /// Create a menu whose current-page comparisons use the context's page.
    pub fn new(render: &RenderContext) -> Self {
        let page = CurrentPage(Some(render.page.out_omit_query()));
        Self {
            root: MenuItem::new("", None, None, 0, None, page),
        }
    }

    /// Create a menu with no ambient page; nothing is ever the current page.
    pub fn detached() -> Self {
        Self {
            root: MenuItem::new("", None, None, 0, None, CurrentPage::default()),
        }
    }

    /// Append a top-level item; see [`MenuItem::add`].
    pub fn add(
        &mut self,
        text: &str,
        url: Option<PageUrl>,
        title: Option<&str>,
        sort: Option<i32>,
        icon_classes: Option<&str>,
    ) -> &mut MenuItem {
        self.root.add(text, url, title, sort, icon_classes)
    }

    pub fn children(&self) -> &[MenuItem] {
        self.root.children()
    }

    /// Export the top-level items, ordered by sort key.
    pub fn export_for_display(&self) -> Vec<MenuItemDisplay> {
        self.root.export_for_display().children
    }
}
