use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Author of a transcript entry. The string forms are the wire names the
/// Gemini API expects in `contents[].role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }

    /// Label shown above the message in the transcript pane.
    pub fn display_name(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Model => "Sage",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "user" => Ok(Role::User),
            "model" => Ok(Role::Model),
            _ => Err(format!("invalid message role: {value}")),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.as_str().to_string()
    }
}

impl Message {
    pub fn new(id: impl Into<String>, role: Role, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role,
            text: text.into(),
            timestamp: Local::now(),
        }
    }

    pub fn user(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(id, Role::User, text)
    }

    pub fn model(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(id, Role::Model, text)
    }

    /// `HH:MM` in local time.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn roles_use_gemini_wire_names() {
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::Model.as_str(), "model");
        assert_eq!(Role::try_from("model"), Ok(Role::Model));
    }

    #[test]
    fn invalid_role_strings_are_rejected() {
        let err = Role::try_from("assistant").unwrap_err();
        assert!(err.contains("assistant"));
    }

    #[test]
    fn role_serializes_as_plain_string() {
        let json = serde_json::to_string(&Role::User).expect("serialize");
        assert_eq!(json, "\"user\"");
        let parsed: Role = serde_json::from_str("\"model\"").expect("deserialize");
        assert_eq!(parsed, Role::Model);
        assert!(serde_json::from_str::<Role>("\"system\"").is_err());
    }

    #[test]
    fn time_label_is_zero_padded_24h() {
        let mut message = Message::user("1", "hi");
        message.timestamp = Local
            .with_ymd_and_hms(2024, 3, 5, 7, 4, 59)
            .single()
            .expect("valid local time");
        assert_eq!(message.time_label(), "07:04");
    }
}
