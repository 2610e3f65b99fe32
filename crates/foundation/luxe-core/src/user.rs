use serde::{Deserialize, Serialize};

/// The single record the session stub keeps in client storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: String,
}

impl User {
    /// Avatar text, falling back to the first letter of the name.
    pub fn initials(&self) -> String {
        if !self.avatar.is_empty() {
            return self.avatar.clone();
        }
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let mut user = User {
            id: "1".into(),
            name: "maria".into(),
            email: "maria@example.com".into(),
            avatar: String::new(),
        };
        assert_eq!(user.initials(), "M");

        user.avatar = "GU".into();
        assert_eq!(user.initials(), "GU");
    }

    #[test]
    fn test_missing_avatar_deserializes() {
        let user: User =
            serde_json::from_str(r#"{"id":"1","name":"Guest","email":"g@example.com"}"#).unwrap();
        assert!(user.avatar.is_empty());
    }
}
