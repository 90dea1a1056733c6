//! Child profile and save-data payload types

use serde::{Deserialize, Serialize};

/// Profile of the child playing the embedded game
///
/// Delivered by the shell in the INIT message. Replaced wholesale when a
/// new INIT arrives; never partially updated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChildProfile {
    #[serde(rename = "childId")]
    pub child_id: String,

    #[serde(rename = "childName")]
    pub child_name: String,

    #[serde(rename = "avatarUrl")]
    pub avatar_url: String,
}

/// Save data handed to `save_progress`
///
/// Games either keep their own serialization and pass a ready-made string,
/// or hand over any `Serialize` value. The wire always carries a string:
/// raw payloads are included verbatim, structured ones are
/// compact-serialized first.
#[derive(Debug, Clone)]
pub enum SavePayload {
    /// Pre-serialized save data, sent as-is
    Raw(String),
    /// Structured save data, serialized to compact JSON before sending
    Structured(serde_json::Value),
}

impl SavePayload {
    /// The string form that goes on the wire
    pub fn into_wire_string(self) -> String {
        match self {
            SavePayload::Raw(s) => s,
            SavePayload::Structured(value) => value.to_string(),
        }
    }
}

impl From<String> for SavePayload {
    fn from(s: String) -> Self {
        SavePayload::Raw(s)
    }
}

impl From<&str> for SavePayload {
    fn from(s: &str) -> Self {
        SavePayload::Raw(s.to_string())
    }
}

impl From<serde_json::Value> for SavePayload {
    fn from(value: serde_json::Value) -> Self {
        SavePayload::Structured(value)
    }
}

/// Normalize a saved-data wire value to the stored string form
///
/// Shells send saved data either as the string the game originally saved
/// or as a structured JSON value. State keeps one canonical shape: JSON
/// strings verbatim, structured values compact-serialized, null absent.
pub fn normalize_saved_data(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_wire_field_names() {
        let profile = ChildProfile {
            child_id: "c-42".into(),
            child_name: "Mina".into(),
            avatar_url: "https://cdn.example/avatars/7.png".into(),
        };

        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"childId\":\"c-42\""));
        assert!(json.contains("\"childName\":\"Mina\""));
        assert!(json.contains("\"avatarUrl\""));
    }

    #[test]
    fn test_structured_payload_serializes_compact() {
        let payload = SavePayload::from(json!({"coins": 5}));
        assert_eq!(payload.into_wire_string(), r#"{"coins":5}"#);
    }

    #[test]
    fn test_raw_payload_passes_through() {
        let payload = SavePayload::from("level=3;coins=5");
        assert_eq!(payload.into_wire_string(), "level=3;coins=5");
    }

    #[test]
    fn test_normalize_keeps_strings_and_flattens_objects() {
        assert_eq!(
            normalize_saved_data(json!("already-a-string")),
            Some("already-a-string".to_string())
        );
        assert_eq!(
            normalize_saved_data(json!({"coins": 5})),
            Some(r#"{"coins":5}"#.to_string())
        );
        assert_eq!(normalize_saved_data(serde_json::Value::Null), None);
    }
}
