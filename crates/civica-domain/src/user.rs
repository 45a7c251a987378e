//! User account, session role, and preference models

use serde::{Deserialize, Serialize};

/// Default avatar reference assigned to synthesized accounts.
pub const DEFAULT_AVATAR: &str = "/placeholder.svg?height=40&width=40";

/// What a user is allowed to do in the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Resident,
    Official,
    Admin,
}

/// The account behind the single session slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub role: UserRole,
}

impl User {
    /// Build a deterministic account from a display name, used by login
    /// when no real auth backend exists. The email is the lower-cased,
    /// dot-joined name.
    pub fn synthesized(name: &str) -> Self {
        let email = format!(
            "{}@example.com",
            name.split_whitespace()
                .map(|part| part.to_lowercase())
                .collect::<Vec<_>>()
                .join(".")
        );
        Self {
            id: 1,
            name: name.to_string(),
            email,
            avatar: DEFAULT_AVATAR.to_string(),
            role: UserRole::Resident,
        }
    }
}

/// Partial update for the profile action. Absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

impl UserPatch {
    pub fn apply(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(avatar) = &self.avatar {
            user.avatar = avatar.clone();
        }
    }
}

/// Notification channel preferences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            sms: false,
        }
    }
}

/// What other residents can see on a profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    pub show_email: bool,
    pub show_name: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            show_email: false,
            show_name: true,
        }
    }
}

/// Dashboard appearance preferences.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    pub dark_mode: bool,
    pub compact_view: bool,
}

/// All per-user preferences, grouped the way the settings screen edits them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub notifications: NotificationSettings,
    pub privacy: PrivacySettings,
    pub display: DisplaySettings,
}

/// Partial update for the settings action. Groups are replaced whole,
/// matching how the settings dialog submits one section at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPatch {
    pub notifications: Option<NotificationSettings>,
    pub privacy: Option<PrivacySettings>,
    pub display: Option<DisplaySettings>,
}

impl SettingsPatch {
    pub fn apply(&self, settings: &mut UserSettings) {
        if let Some(notifications) = &self.notifications {
            settings.notifications = notifications.clone();
        }
        if let Some(privacy) = &self.privacy {
            settings.privacy = privacy.clone();
        }
        if let Some(display) = &self.display {
            settings.display = display.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesized_email_is_lowercase_dot_joined() {
        let user = User::synthesized("John Doe");
        assert_eq!(user.email, "john.doe@example.com");
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.role, UserRole::Resident);
    }

    #[test]
    fn synthesized_is_deterministic() {
        assert_eq!(User::synthesized("Jane Smith"), User::synthesized("Jane Smith"));
    }

    #[test]
    fn default_settings_match_dashboard_defaults() {
        let settings = UserSettings::default();
        assert!(settings.notifications.email);
        assert!(settings.notifications.push);
        assert!(!settings.notifications.sms);
        assert!(!settings.privacy.show_email);
        assert!(settings.privacy.show_name);
        assert!(!settings.display.dark_mode);
        assert!(!settings.display.compact_view);
    }

    #[test]
    fn settings_patch_replaces_whole_groups() {
        let mut settings = UserSettings::default();
        let patch = SettingsPatch {
            display: Some(DisplaySettings {
                dark_mode: true,
                compact_view: false,
            }),
            ..Default::default()
        };
        patch.apply(&mut settings);
        assert!(settings.display.dark_mode);
        // Untouched groups keep their defaults
        assert!(settings.notifications.email);
    }

    #[test]
    fn user_patch_merges_fields() {
        let mut user = User::synthesized("John Doe");
        let patch = UserPatch {
            email: Some("john@cityname.gov".into()),
            ..Default::default()
        };
        patch.apply(&mut user);
        assert_eq!(user.email, "john@cityname.gov");
        assert_eq!(user.name, "John Doe");
    }
}
