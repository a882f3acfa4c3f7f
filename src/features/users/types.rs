//! Wire types for the users API. The backend is loose about the `age` column
//! and may answer with either a JSON string or a number, so decoding accepts
//! both and normalizes to the textual form the form inputs produce.

use serde::{Deserialize, Deserializer, Serialize};

/// A user record as returned by the collection endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub age: String,
}

/// Request body for create and update calls. Both fields are sent as strings,
/// matching what the form inputs hold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub age: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Value {
        Number(i64),
        Text(String),
    }

    Ok(match Value::deserialize(deserializer)? {
        Value::Number(value) => value.to_string(),
        Value::Text(value) => value,
    })
}

#[cfg(test)]
mod tests {
    use super::{User, UserPayload};

    #[test]
    fn user_array_decodes_in_order() {
        let body = r#"[
            {"id": 1, "name": "Homer", "age": "39"},
            {"id": 2, "name": "Marge", "age": "36"},
            {"id": 3, "name": "Bart", "age": "10"}
        ]"#;

        let users: Vec<User> = serde_json::from_str(body).expect("Failed to decode");
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].name, "Homer");
        assert_eq!(users[1].name, "Marge");
        assert_eq!(users[2].name, "Bart");
        assert_eq!(users[2].age, "10");
    }

    #[test]
    fn user_age_accepts_number_or_string() {
        let from_number: User =
            serde_json::from_str(r#"{"id": 5, "name": "Lisa", "age": 8}"#).expect("Failed to decode");
        assert_eq!(from_number.age, "8");

        let from_string: User =
            serde_json::from_str(r#"{"id": 5, "name": "Lisa", "age": "8"}"#).expect("Failed to decode");
        assert_eq!(from_string.age, "8");
    }

    #[test]
    fn empty_array_decodes_to_empty_vec() {
        let users: Vec<User> = serde_json::from_str("[]").expect("Failed to decode");
        assert!(users.is_empty());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let result: Result<Vec<User>, _> = serde_json::from_str("{\"oops\":");
        assert!(result.is_err());

        let result: Result<Vec<User>, _> = serde_json::from_str(r#"[{"id": "not-a-number"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn payload_serializes_fields_as_strings() {
        let payload = UserPayload {
            name: "Alice".to_string(),
            age: "30".to_string(),
        };

        let json = serde_json::to_string(&payload).expect("Failed to serialize");
        assert_eq!(json, r#"{"name":"Alice","age":"30"}"#);
    }
}
