//! Bootstrap configuration for the launcher shell.
//!
//! # Design
//! - Every field has a default so an absent or partial document still boots the UI.
//! - Parsing is pure; where the JSON comes from is the app's concern.

use crate::core::auth::AuthState;
use crate::core::icons::IconKind;
use crate::core::menu::MenuEntry;
use crate::core::theme::LogoVariant;
use serde::Deserialize;
use thiserror::Error;

/// Default local storage key for the dark-mode preference.
pub const DEFAULT_THEME_KEY: &str = "launchpad.dark_mode";

/// Failure to read a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for [`ShellConfig`].
    #[error("invalid shell configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Logo asset URLs keyed by variant.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogoAssets {
    /// Logo for light backgrounds.
    pub standard: String,
    /// Logo for dark backgrounds.
    pub light: String,
}

impl Default for LogoAssets {
    fn default() -> Self {
        Self {
            standard: "assets/logo.png".to_string(),
            light: "assets/logo_light.png".to_string(),
        }
    }
}

impl LogoAssets {
    /// Resolve the asset URL for a variant.
    #[must_use]
    pub fn url(&self, variant: LogoVariant) -> &str {
        match variant {
            LogoVariant::Standard => &self.standard,
            LogoVariant::Light => &self.light,
        }
    }
}

/// Identity provider endpoints used by the redirect gateway.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthEndpoints {
    /// Where to send the browser to log in.
    pub login_url: String,
    /// Where to send the browser to log out; `returnTo` is appended.
    pub logout_url: String,
}

impl Default for AuthEndpoints {
    fn default() -> Self {
        Self {
            login_url: "/login".to_string(),
            logout_url: "/logout".to_string(),
        }
    }
}

impl AuthEndpoints {
    /// Logout URL carrying the return address as a `returnTo` query parameter.
    #[must_use]
    pub fn logout_redirect(&self, return_to: &str) -> String {
        let separator = if self.logout_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{separator}returnTo={}",
            self.logout_url,
            urlencoding::encode(return_to)
        )
    }
}

/// Session published by the host page at boot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionBootstrap {
    /// Whether the host page rendered for a signed-in user.
    pub authenticated: bool,
    /// User display name.
    pub user_name: Option<String>,
}

impl SessionBootstrap {
    /// Convert into the auth snapshot published to the shell.
    #[must_use]
    pub fn into_state(self) -> AuthState {
        AuthState {
            is_authenticated: self.authenticated,
            is_loading: false,
            user_name: self.user_name,
        }
    }
}

/// Configured launcher entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct EntryConfig {
    /// Entry label.
    pub label: String,
    /// Entry icon.
    pub icon: IconKind,
}

/// Top-level configuration for the shell.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Brand name shown in the header.
    pub brand_name: String,
    /// Smaller tagline under the brand name.
    pub brand_tagline: String,
    /// Link target for the brand block.
    pub brand_url: String,
    /// Logo asset URLs.
    pub logo: LogoAssets,
    /// Local storage key for the dark-mode preference.
    pub theme_storage_key: String,
    /// Dark-mode value used when no preference is stored.
    pub default_dark_mode: bool,
    /// Identity provider endpoints.
    pub auth: AuthEndpoints,
    /// Session rendered by the host page.
    pub session: SessionBootstrap,
    /// Launcher entries; `None` uses the built-in list.
    pub entries: Option<Vec<EntryConfig>>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            brand_name: "strive".to_string(),
            brand_tagline: "Innovation Lab".to_string(),
            brand_url: "https://striveconsulting.com/".to_string(),
            logo: LogoAssets::default(),
            theme_storage_key: DEFAULT_THEME_KEY.to_string(),
            default_dark_mode: false,
            auth: AuthEndpoints::default(),
            session: SessionBootstrap::default(),
            entries: None,
        }
    }
}

impl ShellConfig {
    /// Parse a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is malformed.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Menu entries from configuration, if any were supplied.
    #[must_use]
    pub fn menu_entries(&self) -> Option<Vec<MenuEntry>> {
        self.entries.as_ref().map(|entries| {
            entries
                .iter()
                .map(|entry| MenuEntry::new(entry.label.clone(), entry.icon))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() -> Result<(), ConfigError> {
        let config = ShellConfig::from_json("{}")?;
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.theme_storage_key, DEFAULT_THEME_KEY);
        assert!(config.menu_entries().is_none());
        Ok(())
    }

    #[test]
    fn partial_document_keeps_other_defaults() -> Result<(), ConfigError> {
        let config = ShellConfig::from_json(
            r#"{
                "brand_name": "acme",
                "auth": { "logout_url": "/session/end" },
                "session": { "authenticated": true, "user_name": "Ada" },
                "entries": [{ "label": "Reports", "icon": "clipboard" }]
            }"#,
        )?;
        assert_eq!(config.brand_name, "acme");
        assert_eq!(config.brand_tagline, "Innovation Lab");
        assert_eq!(config.auth.login_url, "/login");
        assert_eq!(config.auth.logout_url, "/session/end");
        assert_eq!(config.session.clone().into_state().display_name(), "Ada");
        assert_eq!(
            config.menu_entries(),
            Some(vec![MenuEntry::new("Reports", IconKind::Clipboard)])
        );
        Ok(())
    }

    #[test]
    fn malformed_document_is_rejected() {
        let err = ShellConfig::from_json("{\"entries\": [{\"label\": 3}]}");
        assert!(matches!(err, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn logout_redirect_encodes_return_address() {
        let endpoints = AuthEndpoints::default();
        assert_eq!(
            endpoints.logout_redirect("https://lab.example"),
            "/logout?returnTo=https%3A%2F%2Flab.example"
        );
        let endpoints = AuthEndpoints {
            login_url: "/login".to_string(),
            logout_url: "https://id.example/v2/logout?client_id=abc".to_string(),
        };
        assert_eq!(
            endpoints.logout_redirect("http://localhost:8080"),
            "https://id.example/v2/logout?client_id=abc&returnTo=http%3A%2F%2Flocalhost%3A8080"
        );
    }

    #[test]
    fn logo_url_follows_variant() {
        let logo = LogoAssets::default();
        assert_eq!(logo.url(LogoVariant::Standard), "assets/logo.png");
        assert_eq!(logo.url(LogoVariant::Light), "assets/logo_light.png");
    }
}
