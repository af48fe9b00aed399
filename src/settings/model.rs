//! User Settings Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

/// Email notification toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub product: bool,
    pub marketing: bool,
    pub security: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            product: true,
            marketing: false,
            security: true,
        }
    }
}

/// One notification toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Product,
    Marketing,
    Security,
}

impl FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "product" => Ok(NotificationKind::Product),
            "marketing" => Ok(NotificationKind::Marketing),
            "security" => Ok(NotificationKind::Security),
            other => Err(format!("Unknown notification: {}", other)),
        }
    }
}

/// A connectable third-party account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integration {
    Google,
    LinkedIn,
}

impl Integration {
    pub fn label(self) -> &'static str {
        match self {
            Integration::Google => "Google",
            Integration::LinkedIn => "LinkedIn",
        }
    }
}

impl FromStr for Integration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" => Ok(Integration::Google),
            "linkedin" => Ok(Integration::LinkedIn),
            other => Err(format!("Unknown integration: {}", other)),
        }
    }
}

/// Everything the settings page edits.
///
/// Stored as camelCase JSON. Missing fields take their defaults; fields of
/// the wrong type make the whole document malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserSettings {
    pub full_name: String,
    pub email: String,
    pub theme: Theme,
    pub timezone: String,
    pub language: String,
    pub profile_public: bool,
    pub two_factor: bool,
    pub connected_google: bool,
    #[serde(rename = "connectedLinkedIn")]
    pub connected_linkedin: bool,
    pub notifications: NotificationPrefs,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            full_name: "Alex Morgan".to_string(),
            email: "alex@techventures.io".to_string(),
            theme: Theme::Light,
            timezone: "UTC+05:30".to_string(),
            language: "English".to_string(),
            profile_public: true,
            two_factor: false,
            connected_google: false,
            connected_linkedin: false,
            notifications: NotificationPrefs::default(),
        }
    }
}

/// Partial update, applied field by field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub theme: Option<Theme>,
    pub timezone: Option<String>,
    pub language: Option<String>,
    pub profile_public: Option<bool>,
    pub two_factor: Option<bool>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        *self == SettingsPatch::default()
    }
}

impl UserSettings {
    /// Apply every field present in `patch`
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(v) = patch.full_name {
            self.full_name = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.theme {
            self.theme = v;
        }
        if let Some(v) = patch.timezone {
            self.timezone = v;
        }
        if let Some(v) = patch.language {
            self.language = v;
        }
        if let Some(v) = patch.profile_public {
            self.profile_public = v;
        }
        if let Some(v) = patch.two_factor {
            self.two_factor = v;
        }
    }

    /// Flip one notification toggle, returning its new value
    pub fn toggle_notification(&mut self, kind: NotificationKind) -> bool {
        let flag = match kind {
            NotificationKind::Product => &mut self.notifications.product,
            NotificationKind::Marketing => &mut self.notifications.marketing,
            NotificationKind::Security => &mut self.notifications.security,
        };
        *flag = !*flag;
        *flag
    }

    pub fn is_connected(&self, integration: Integration) -> bool {
        match integration {
            Integration::Google => self.connected_google,
            Integration::LinkedIn => self.connected_linkedin,
        }
    }

    pub fn connect(&mut self, integration: Integration) {
        self.set_connected(integration, true);
    }

    pub fn disconnect(&mut self, integration: Integration) {
        self.set_connected(integration, false);
    }

    fn set_connected(&mut self, integration: Integration, connected: bool) {
        match integration {
            Integration::Google => self.connected_google = connected,
            Integration::LinkedIn => self.connected_linkedin = connected,
        }
    }

    /// Badge text for an integration, e.g. `Google ✓`
    pub fn integration_badge(&self, integration: Integration) -> String {
        if self.is_connected(integration) {
            format!("{} ✓", integration.label())
        } else {
            integration.label().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_field_names() {
        let json = serde_json::to_value(UserSettings::default()).unwrap();
        assert_eq!(json["fullName"], "Alex Morgan");
        assert_eq!(json["connectedLinkedIn"], false);
        assert_eq!(json["theme"], "light");
        assert_eq!(json["notifications"]["security"], true);
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let settings: UserSettings =
            serde_json::from_str(r#"{"fullName": "Priya", "theme": "dark"}"#).unwrap();
        assert_eq!(settings.full_name, "Priya");
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.email, "alex@techventures.io");
    }

    #[test]
    fn test_toggle_and_integrations() {
        let mut settings = UserSettings::default();
        assert!(settings.toggle_notification(NotificationKind::Marketing));
        assert!(!settings.toggle_notification(NotificationKind::Product));

        settings.connect(Integration::LinkedIn);
        assert_eq!(settings.integration_badge(Integration::LinkedIn), "LinkedIn ✓");
        assert_eq!(settings.integration_badge(Integration::Google), "Google");
        settings.disconnect(Integration::LinkedIn);
        assert!(!settings.is_connected(Integration::LinkedIn));
    }

    #[test]
    fn test_patch_only_touches_present_fields() {
        let mut settings = UserSettings::default();
        settings.apply(SettingsPatch {
            email: Some("priya@nefra.in".to_string()),
            two_factor: Some(true),
            ..Default::default()
        });
        assert_eq!(settings.email, "priya@nefra.in");
        assert!(settings.two_factor);
        assert_eq!(settings.full_name, "Alex Morgan");
    }
}
