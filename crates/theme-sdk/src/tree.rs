//! Profile navigation tree: categories, nodes, and resolution sorting.
//!
//! Contributors append categories and nodes in any order; ordering hints are
//! resolved once, when the builder calls [`Tree::sort`]. Hints that cannot be
//! resolved (missing or cyclic targets) never fail the render: unresolved
//! entries are appended at the end in their original insertion order.

use serde::Serialize;
use tracing::{debug, warn};

use crate::url::PageUrl;

/// A small icon attached to a node.
#[derive(Debug, Clone, Serialize)]
pub struct Icon {
    /// Icon key in the platform icon set (e.g. `t/email`).
    pub key: String,
    /// Alt text for the icon.
    pub alt: String,
}

impl Icon {
    pub fn new(key: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            alt: alt.into(),
        }
    }
}

/// A named grouping bucket for nodes.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    id: String,
    display_name: String,
    /// Ordering hint: place this category after the named one.
    after: Option<String>,
    /// Optional styling tag rendered on the category wrapper.
    classes: Option<String>,
    /// Nodes grouped under this category; filled by [`Tree::sort`].
    nodes: Vec<Node>,
}

impl Category {
    /// Create a category. `after` is an ordering hint naming another
    /// category id, or empty for no preference.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, after: &str) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            after: (!after.is_empty()).then(|| after.to_string()),
            classes: None,
            nodes: Vec::new(),
        }
    }

    /// Attach a styling tag to the category wrapper.
    pub fn with_classes(mut self, classes: impl Into<String>) -> Self {
        self.classes = Some(classes.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn after(&self) -> Option<&str> {
        self.after.as_deref()
    }

    pub fn classes(&self) -> Option<&str> {
        self.classes.as_deref()
    }

    /// Nodes in resolved order. Empty until the tree has been sorted.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

/// One displayable fact or link attached to a category.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    category_id: String,
    key: String,
    title: String,
    url: Option<PageUrl>,
    content: Option<String>,
    icon: Option<Icon>,
    /// Ordering hint: place this node after the named sibling key.
    after_key: Option<String>,
}

impl Node {
    /// Create a node under `category_id`. Title may be empty for pure-content
    /// nodes (the email row, for instance, renders content only).
    pub fn new(
        category_id: impl Into<String>,
        key: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            category_id: category_id.into(),
            key: key.into(),
            title: title.into(),
            url: None,
            content: None,
            icon: None,
            after_key: None,
        }
    }

    pub fn with_url(mut self, url: PageUrl) -> Self {
        self.url = Some(url);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_after(mut self, after_key: impl Into<String>) -> Self {
        self.after_key = Some(after_key.into());
        self
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> Option<&PageUrl> {
        self.url.as_ref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn after_key(&self) -> Option<&str> {
        self.after_key.as_deref()
    }
}

/// The profile navigation tree: an ordered set of categories plus nodes
/// queued for grouping. Built once per page view, sorted once, discarded
/// after rendering.
#[derive(Debug, Default, Serialize)]
pub struct Tree {
    categories: Vec<Category>,
    /// Nodes awaiting attachment; drained into categories by [`Tree::sort`].
    queued: Vec<Node>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category. A category re-using an existing id replaces it, so a
    /// later contributor can relabel a bucket without duplicating it.
    pub fn add_category(&mut self, category: Category) {
        if let Some(existing) = self.categories.iter_mut().find(|c| c.id == category.id) {
            debug!(category = %category.id, "category redefined, replacing");
            *existing = category;
        } else {
            self.categories.push(category);
        }
    }

    /// Queue a node for its category. Dangling category references are
    /// resolved (and dropped) at sort time, never here.
    pub fn add_node(&mut self, node: Node) {
        self.queued.push(node);
    }

    /// Categories in their current order; resolved order after [`Tree::sort`].
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Nodes of one category after sorting.
    pub fn nodes(&self, category_id: &str) -> &[Node] {
        self.categories
            .iter()
            .find(|c| c.id == category_id)
            .map(|c| c.nodes.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of attached nodes (after sorting).
    pub fn node_count(&self) -> usize {
        self.categories.iter().map(|c| c.nodes.len()).sum()
    }

    /// Resolve ordering hints and group nodes under their categories.
    ///
    /// Categories are placed in rounds: any category whose `after` target is
    /// already placed (or which has none) is appended next, preserving
    /// insertion order among ties. A round that places nothing means the
    /// remaining hints are missing or cyclic; those categories are appended
    /// in insertion order. Node order within a category resolves the same
    /// way using `after_key`.
    pub fn sort(&mut self) {
        // Attach queued nodes to their categories first, dropping danglers.
        for node in self.queued.drain(..) {
            match self.categories.iter_mut().find(|c| c.id == node.category_id) {
                Some(category) => category.nodes.push(node),
                None => {
                    warn!(
                        category = %node.category_id,
                        node = %node.key,
                        "dropping node for unknown category"
                    );
                }
            }
        }

        for category in &mut self.categories {
            let nodes = std::mem::take(&mut category.nodes);
            category.nodes = resolve_order(nodes, |n| n.key.as_str(), |n| n.after_key.as_deref());
        }

        let categories = std::mem::take(&mut self.categories);
        self.categories = resolve_order(categories, |c| c.id.as_str(), |c| c.after.as_deref());
    }
}

/// Rounds-based stable resolution sort shared by categories and nodes.
///
/// Terminates for any input: a stalled round appends the leftovers in their
/// original insertion order.
fn resolve_order<T>(
    items: Vec<T>,
    key: impl Fn(&T) -> &str,
    after: impl Fn(&T) -> Option<&str>,
) -> Vec<T> {
    let mut placed: Vec<T> = Vec::with_capacity(items.len());
    let mut placed_keys: Vec<String> = Vec::with_capacity(items.len());
    let mut pending = items;

    while !pending.is_empty() {
        let mut still_pending = Vec::new();
        let mut progressed = false;

        for item in pending {
            let ready = match after(&item) {
                None => true,
                Some(target) => placed_keys.iter().any(|k| k == target),
            };
            if ready {
                placed_keys.push(key(&item).to_string());
                placed.push(item);
                progressed = true;
            } else {
                still_pending.push(item);
            }
        }

        pending = still_pending;
        if !progressed {
            break;
        }
    }

    if !pending.is_empty() {
        let unresolved: Vec<&str> = pending.iter().map(|i| key(i)).collect();
        warn!(?unresolved, "unresolvable ordering hints, appending at end");
        placed.append(&mut pending);
    }

    placed
}
