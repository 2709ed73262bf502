//! Built-in English string catalog.
//!
//! The host platform normally supplies the string resolver; this catalog
//! backs the CLI and any deployment without a translation service. Unknown
//! keys resolve to themselves, matching the resolver contract.

use std::collections::HashMap;

use aula_sdk::host::StringResolver;

/// English strings for the theme component plus the platform keys the
/// profile page uses.
pub struct EnglishStrings {
    catalog: HashMap<(&'static str, &'static str), &'static str>,
}

impl EnglishStrings {
    pub fn new() -> Self {
        let mut catalog = HashMap::new();
        let entries: &[(&str, &str, &str)] = &[
            // Theme component strings.
            ("theme_aula", "userinfos", "Infos"),
            ("theme_aula", "footer", "Footer"),
            ("theme_aula", "footercontent", "Footer content"),
            ("theme_aula", "profilepage", "Profile page"),
            ("theme_aula", "simplifiedprofilepage", "Simplified profile page"),
            ("theme_aula", "emailvstheme", "Email domain vs theme"),
            (
                "theme_aula",
                "defaultfpslogan",
                "Welcome to the Aula learning library",
            ),
            // Platform strings consumed by the core contributor.
            ("core", "coursedetails", "Course details"),
            ("core", "miscellaneous", "Miscellaneous"),
            ("core", "reports", "Reports"),
            ("core", "administration", "Administration"),
            ("core", "loginactivity", "Login activity"),
            ("core", "fullprofile", "Full profile"),
            ("core", "preferences", "Preferences"),
            ("core", "loginas", "Log in as"),
            ("core", "email", "Email address"),
            ("core", "networkprofile", "Network profile"),
            ("core", "country", "Country"),
            ("core", "city", "City/town"),
            ("core", "address", "Address"),
            ("core", "phone1", "Phone"),
            ("core", "phone2", "Mobile phone"),
            ("core", "institution", "Institution"),
            ("core", "department", "Department"),
            ("core", "idnumber", "ID number"),
            ("core", "interests", "Interests"),
            ("core", "courseprofiles", "Course profiles"),
            ("core", "viewmore", "View more"),
            ("core", "roles", "Roles"),
            ("core", "group", "Group"),
            ("core", "firstsiteaccess", "First access to site"),
            ("core", "lastsiteaccess", "Last access to site"),
            ("core", "lastcourseaccess", "Last access to course"),
            ("core", "lastip", "Last IP address"),
            ("core", "never", "Never"),
            ("core", "none", "None"),
            ("core", "language", "Language"),
            ("auth", "suspended", "Suspended account"),
        ];
        for (component, key, text) in entries {
            catalog.insert((*component, *key), *text);
        }
        Self { catalog }
    }
}

impl Default for EnglishStrings {
    fn default() -> Self {
        Self::new()
    }
}

impl StringResolver for EnglishStrings {
    fn resolve(&self, key: &str, component: &str) -> String {
        self.catalog
            .get(&(component, key))
            .map(|s| (*s).to_string())
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn known_key_resolves() {
        let strings = EnglishStrings::new();
        assert_eq!(strings.resolve("userinfos", "theme_aula"), "Infos");
        assert_eq!(strings.resolve("never", "core"), "Never");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        let strings = EnglishStrings::new();
        assert_eq!(strings.resolve("nosuchkey", "core"), "nosuchkey");
    }

    #[test]
    fn resolve_arg_substitutes_placeholder() {
        struct Raw;
        impl StringResolver for Raw {
            fn resolve(&self, key: &str, _component: &str) -> String {
                match key {
                    "groupmessagescount" => "{$a} messages".to_string(),
                    other => other.to_string(),
                }
            }
        }
        assert_eq!(Raw.resolve_arg("groupmessagescount", "core", "4"), "4 messages");
    }
}
