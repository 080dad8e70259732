/// Extension-local preferences read from chrome.storage.local

use serde::{Deserialize, Serialize};

/// Storage key holding the signed-in user
pub const USER_KEY: &str = "user";

/// Signed-in user profile. Only the fields the popup shows are typed;
/// everything else is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.email.as_deref())
    }
}

/// Result of `chrome.storage.local.get("user")`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub user: Option<UserProfile>,
}

impl Preferences {
    pub fn new() -> Self {
        Preferences { user: None }
    }

    /// Parse a storage result; a missing or malformed entry means "no user"
    pub fn from_storage(value: serde_json::Value) -> Self {
        if value.is_null() {
            return Preferences::new();
        }
        serde_json::from_value(value).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed user preference: {}", e);
            Preferences::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preferences_new() {
        assert!(Preferences::new().user.is_none());
    }

    #[test]
    fn test_from_storage_with_user() {
        let prefs = Preferences::from_storage(json!({
            "user": { "name": "Sam", "email": "sam@example.com", "plan": "free" }
        }));

        let user = prefs.user.unwrap();
        assert_eq!(user.display_name(), Some("Sam"));
        assert_eq!(user.extra.get("plan"), Some(&json!("free")));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let prefs = Preferences::from_storage(json!({ "user": { "email": "sam@example.com" } }));
        assert_eq!(prefs.user.unwrap().display_name(), Some("sam@example.com"));
    }

    #[test]
    fn test_from_storage_empty_or_malformed() {
        assert_eq!(Preferences::from_storage(json!({})), Preferences::new());
        assert_eq!(Preferences::from_storage(serde_json::Value::Null), Preferences::new());
        assert_eq!(Preferences::from_storage(json!({ "user": 5 })), Preferences::new());
    }
}
