//! Email-domain to theme matching, applied at login time.
//!
//! The `emailvstheme` setting maps domain substrings to theme names. The
//! first entry, in stored encounter order, whose domain occurs in the user's
//! email address and whose theme is actually installed wins; overlapping
//! keys never cascade.

use anyhow::Result;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config;
use aula_sdk::host::{ConfigStore, ProfileDataProvider};

/// Pick the theme for an email address, or `None` when nothing matches.
pub fn theme_for_email<'a>(
    mapping: &'a [(String, String)],
    email: &str,
    installed: &[String],
) -> Option<&'a str> {
    for (domain, theme) in mapping {
        if !email.contains(domain.as_str()) {
            continue;
        }
        if installed.iter().any(|t| t == theme) {
            return Some(theme);
        }
        warn!(domain, theme, "matched theme is not installed, trying further entries");
    }
    None
}

/// Apply the email-vs-theme mapping to one user.
///
/// A no-op when the user is unknown, nothing matches, or the matched theme
/// is already assigned. Storage failures from the host propagate unchanged.
pub fn assign_user_theme(
    data: &dyn ProfileDataProvider,
    store: &dyn ConfigStore,
    user_id: Uuid,
) -> Result<Option<String>> {
    let Some(user) = data.user(user_id) else {
        return Ok(None);
    };
    let mapping = config::email_theme_map(store);
    if mapping.is_empty() {
        return Ok(None);
    }
    let installed = data.installed_themes();

    let Some(theme) = theme_for_email(&mapping, &user.email, &installed) else {
        return Ok(None);
    };
    if user.theme.as_deref() == Some(theme) {
        return Ok(None);
    }

    debug!(user = %user_id, theme, "assigning theme from email domain");
    data.set_user_theme(user_id, theme)?;
    Ok(Some(theme.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn mapping() -> Vec<(String, String)> {
        vec![
            ("north.example.edu".to_string(), "aula_north".to_string()),
            ("example.edu".to_string(), "aula_generic".to_string()),
        ]
    }

    #[test]
    fn first_stored_match_wins_over_later_overlaps() {
        let installed = vec!["aula_north".to_string(), "aula_generic".to_string()];
        // Matches both keys; the first stored entry wins.
        let mapping = mapping();
        let theme = theme_for_email(&mapping, "ada@north.example.edu", &installed);
        assert_eq!(theme, Some("aula_north"));
    }

    #[test]
    fn later_entry_matches_when_first_does_not() {
        let installed = vec!["aula_north".to_string(), "aula_generic".to_string()];
        let mapping = mapping();
        let theme = theme_for_email(&mapping, "bob@south.example.edu", &installed);
        assert_eq!(theme, Some("aula_generic"));
    }

    #[test]
    fn uninstalled_theme_is_skipped() {
        let installed = vec!["aula_generic".to_string()];
        let mapping = mapping();
        let theme = theme_for_email(&mapping, "ada@north.example.edu", &installed);
        assert_eq!(theme, Some("aula_generic"));
    }

    #[test]
    fn no_match_yields_none() {
        let installed = vec!["aula_north".to_string()];
        assert_eq!(theme_for_email(&mapping(), "eve@other.org", &installed), None);
    }
}
