//! Platform-relative URLs with comparable, query-stripped output.
//!
//! Pages inside the platform are addressed by a rooted path plus query
//! parameters. Current-page highlighting compares URLs with the query string
//! removed, so the stripped form is a first-class operation here rather than
//! string surgery at call sites.

use std::fmt;

use serde::{Serialize, Serializer};
// Leading `::` keeps the external crate distinct from this `url` module.
use ::url::form_urlencoded;

/// A platform-relative URL (rooted path plus ordered query parameters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl {
    path: String,
    params: Vec<(String, String)>,
}

impl PageUrl {
    /// Create a URL from a rooted path (e.g. `/user/profile.php`).
    ///
    /// A path carrying an inline query string is split so that later
    /// parameters merge instead of producing a second `?`.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        match path.split_once('?') {
            Some((base, query)) => {
                let params = form_urlencoded::parse(query.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect();
                Self {
                    path: base.to_string(),
                    params,
                }
            }
            None => Self {
                path,
                params: Vec::new(),
            },
        }
    }

    /// Append a query parameter, keeping parameter order.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Look up a query parameter by name.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Full form: path plus encoded query string.
    pub fn out(&self) -> String {
        if self.params.is_empty() {
            return self.path.clone();
        }
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.params {
            query.append_pair(key, value);
        }
        format!("{}?{}", self.path, query.finish())
    }

    /// Query-stripped form, used for current-page comparison.
    pub fn out_omit_query(&self) -> String {
        self.path.clone()
    }

    /// Whether two URLs address the same page, ignoring query strings.
    pub fn same_page(&self, other: &PageUrl) -> bool {
        self.path == other.path
    }
}

impl fmt::Display for PageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.out())
    }
}

impl Serialize for PageUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.out())
    }
}
