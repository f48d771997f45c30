//! Data exchanged between the attendee portal and the attendees backend API

use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Backend assigned identifier. The backend is free to encode ids as JSON numbers or strings so
/// both are accepted and written back in the same form they were received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(Number),
    Text(String),
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

macro_rules! identifier_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Identifier);

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(Identifier::Number(value.into()))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(Identifier::Text(value.to_owned()))
            }
        }
    };
}

/// Read a display value that the backend may send as a string, number, boolean or null. Null
/// becomes an empty string, other non string values keep their JSON text.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

identifier_type!(
    /// Identifier of an organizer account
    UserId
);
identifier_type!(
    /// Identifier of an attendee owned by an organizer
    AttendeeId
);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful response of the backend's login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub id: UserId,
    pub email: String,
    pub token: String,
}

impl LoginResponse {
    /// Split the response into the identity to publish and the bearer token to persist
    pub fn into_parts(self) -> (UserSession, String) {
        (
            UserSession {
                id: self.id,
                email: self.email,
            },
            self.token,
        )
    }
}

/// Identity of the organizer currently logged into the portal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub id: UserId,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub surname: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: AttendeeId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub surname: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttendeeRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub user_id: UserId,
}

/// Body of the attendees listing endpoint. The backend answers with either the ordered attendee
/// sequence of the organizer or an object carrying an `error` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AttendeesBody {
    Attendees(Vec<Attendee>),
    Error { error: serde_json::Value },
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::{AttendeeId, AttendeesBody, CreateAttendeeRequest, UserId};

    #[test]
    fn identifier_should_accept_numbers_and_strings() {
        let ids: Vec<AttendeeId> = serde_json::from_value(json!([1, "a-2"])).unwrap();

        assert_eq!(ids, vec![AttendeeId::from(1), AttendeeId::from("a-2")]);
        assert_eq!(serde_json::to_value(&ids).unwrap(), json!([1, "a-2"]));
    }

    #[test]
    fn identifier_should_accept_non_integer_numbers() {
        let ids: Vec<AttendeeId> = serde_json::from_value(json!([1.0, 2.5])).unwrap();

        assert_eq!(ids[0].to_string(), "1.0");
        assert_eq!(ids[1].to_string(), "2.5");
        assert_eq!(serde_json::to_value(&ids).unwrap(), json!([1.0, 2.5]));
    }

    #[test]
    fn attendees_body_should_keep_rows_with_mixed_field_types() {
        let body: AttendeesBody = serde_json::from_value(json!([
            {"id": 1, "name": "Jane", "surname": "Doe", "email": "jane@doe.com", "phone": null},
            {"id": "2", "name": "John", "surname": "Doe", "email": "john@doe.com", "phone": 37060000000_i64},
            {"id": 3.0, "name": "Ann", "surname": "Lee", "email": "ann@lee.com", "phone": "+1"},
            {"id": 4, "name": "Bob", "email": "bob@b.com", "phone": true},
        ]))
        .unwrap();

        let AttendeesBody::Attendees(attendees) = body else {
            panic!("expected an attendee list");
        };
        assert_eq!(attendees.len(), 4);
        assert_eq!(attendees[0].phone, "");
        assert_eq!(attendees[1].id, AttendeeId::from("2"));
        assert_eq!(attendees[1].phone, "37060000000");
        assert_eq!(attendees[2].id.to_string(), "3.0");
        assert_eq!(attendees[3].surname, "");
        assert_eq!(attendees[3].phone, "true");
    }

    #[test]
    fn attendees_body_should_detect_error_shape() {
        let list: AttendeesBody = serde_json::from_value(json!([
            {"id": 1, "name": "Jane", "surname": "Doe", "email": "jane@doe.com", "phone": "+1"}
        ]))
        .unwrap();
        let error: AttendeesBody = serde_json::from_value(json!({"error": "x"})).unwrap();

        assert!(matches!(list, AttendeesBody::Attendees(attendees) if attendees.len() == 1));
        assert!(matches!(error, AttendeesBody::Error { .. }));
    }

    #[test]
    fn create_attendee_request_should_send_user_id_in_camel_case() {
        let request = CreateAttendeeRequest {
            name: "Jane".to_owned(),
            surname: "Doe".to_owned(),
            email: "jane@doe.com".to_owned(),
            phone: "+1".to_owned(),
            user_id: UserId::from("u1"),
        };

        let value = serde_json::to_value(request).unwrap();

        assert_eq!(value["userId"], json!("u1"));
        assert!(value.get("user_id").is_none());
    }
}
