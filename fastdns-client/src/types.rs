//! Public data model and wire types for the FastDNS API.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============ Session ============

/// Bearer credential obtained from the `login_token` exchange.
///
/// `expire` is the Unix timestamp (seconds) the provider attaches to the
/// token. The client stores the session and sends the token on every call,
/// but never checks or refreshes expiry — that is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session token, sent as `Authorization: Bearer <token>`.
    pub token: String,
    /// Expiry as a Unix timestamp in seconds.
    pub expire: i64,
}

impl Session {
    /// Expiry as a UTC datetime; `None` when the timestamp is out of range.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.expire, 0)
    }

    /// Whether the expiry lies in the past.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at().is_some_and(|at| at <= Utc::now())
    }
}

// ============ Mail service ============

/// Mail service selector used when creating a domain.
///
/// The provider identifies mail backends by integer; these three values are
/// the documented ones. On responses the selector stays a raw integer (see
/// [`Domain::mail_service`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MailService {
    /// Provider-hosted mail (wire value 0).
    #[default]
    Main,
    /// Gmail (wire value 1).
    Gmail,
    /// Yandex (wire value 2).
    Yandex,
}

impl MailService {
    /// Integer value used on the wire.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Main => 0,
            Self::Gmail => 1,
            Self::Yandex => 2,
        }
    }
}

// ============ Domains ============

/// A domain as returned by the API.
///
/// Secondary fields are optional — the provider omits them on some endpoints
/// and their presence is not part of the documented contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Domain {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Raw mail service selector (0 = main, 1 = Gmail, 2 = Yandex).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail_service: Option<u32>,
    /// Undocumented provider flag, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<i64>,
}

// ============ Records ============

/// A DNS record as returned by the API.
///
/// `record_type` stays a plain string ("A", "MX", ...): the provider owns
/// the set of valid types and which secondary fields apply to each; nothing
/// is validated client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    /// Time-to-live in seconds.
    pub ttl: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,
}

/// Parameters for creating a DNS record. Serializes 1:1 into the request
/// body (`record_type` goes on the wire as `type`).
///
/// [`new`](Self::new) fills the secondary fields with the provider defaults
/// (`tag: ""`, `flag: 0`, `priority: 5`, `weight: 0`, `port: 0`). Which of
/// them the provider actually reads depends on the record type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecordRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    /// Time-to-live in seconds.
    pub ttl: u32,
    pub tag: String,
    pub flag: u32,
    pub priority: u32,
    pub weight: u32,
    pub port: u32,
}

impl CreateRecordRequest {
    /// New request with the provider's default secondary fields.
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        content: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            content: content.into(),
            ttl,
            tag: String::new(),
            flag: 0,
            priority: 5,
            weight: 0,
            port: 0,
        }
    }
}

/// Parameters for updating a DNS record.
///
/// The field set mirrors [`CreateRecordRequest`] so callers can reuse the
/// same data, but only `content` and `name` are ever sent — the provider
/// rejects update bodies that include `type`, `ttl`, `tag`, `flag`,
/// `priority`, `weight` or `port` with a duplicate-record conflict.
#[derive(Debug, Clone)]
pub struct UpdateRecordRequest {
    pub name: String,
    pub record_type: String,
    pub content: String,
    /// Time-to-live in seconds. Accepted for parity; not sent.
    pub ttl: u32,
    pub tag: String,
    pub flag: u32,
    pub priority: u32,
    pub weight: u32,
    pub port: u32,
}

impl UpdateRecordRequest {
    /// New request with the same defaults as record creation.
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        content: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            content: content.into(),
            ttl,
            tag: String::new(),
            flag: 0,
            priority: 5,
            weight: 0,
            port: 0,
        }
    }
}

/// Wire body for record updates: the permitted subset of
/// [`UpdateRecordRequest`], nothing else.
#[derive(Debug, Serialize)]
pub(crate) struct UpdateRecordBody<'a> {
    pub content: &'a str,
    pub name: &'a str,
}

impl<'a> From<&'a UpdateRecordRequest> for UpdateRecordBody<'a> {
    fn from(request: &'a UpdateRecordRequest) -> Self {
        Self {
            content: &request.content,
            name: &request.name,
        }
    }
}

// ============ Wire errors ============

/// Failure payload as emitted by the API.
///
/// Both documented failure shapes deserialize into this struct:
/// `{code, message}` and `{errors: {field: reason}}`. Anything else,
/// including non-JSON bodies, falls back to [`Self::default`] and the
/// dispatcher degrades to the raw body text.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<HashMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ---- Session ----

    #[test]
    fn session_expires_at() {
        let session = Session {
            token: "abc".to_string(),
            expire: 1_700_000_000,
        };
        let at = session.expires_at().unwrap();
        assert_eq!(at.timestamp(), 1_700_000_000);
    }

    #[test]
    fn session_in_the_past_is_expired() {
        let session = Session {
            token: "abc".to_string(),
            expire: 1,
        };
        assert!(session.is_expired());
    }

    #[test]
    fn session_far_in_the_future_is_not_expired() {
        let session = Session {
            token: "abc".to_string(),
            expire: 4_000_000_000,
        };
        assert!(!session.is_expired());
    }

    #[test]
    fn session_deserializes_from_login_response() {
        let session: Session = serde_json::from_str(r#"{"token":"abc","expire":123}"#).unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.expire, 123);
    }

    // ---- MailService ----

    #[test]
    fn mail_service_wire_values() {
        assert_eq!(MailService::Main.code(), 0);
        assert_eq!(MailService::Gmail.code(), 1);
        assert_eq!(MailService::Yandex.code(), 2);
    }

    #[test]
    fn mail_service_default_is_main() {
        assert_eq!(MailService::default(), MailService::Main);
    }

    // ---- Domain / DnsRecord deserialization ----

    #[test]
    fn domain_deserializes_without_secondary_fields() {
        let domain: Domain = serde_json::from_str(r#"{"id":1,"name":"example.com"}"#).unwrap();
        assert_eq!(domain.id, 1);
        assert_eq!(domain.name, "example.com");
        assert!(domain.ip.is_none());
        assert!(domain.mail_service.is_none());
        assert!(domain.required.is_none());
    }

    #[test]
    fn domain_ignores_unknown_fields() {
        let domain: Domain =
            serde_json::from_str(r#"{"id":1,"name":"example.com","nameservers":["a","b"]}"#)
                .unwrap();
        assert_eq!(domain.id, 1);
    }

    #[test]
    fn record_deserializes_with_type_rename() {
        let record: DnsRecord = serde_json::from_str(
            r#"{"id":"r1","name":"www","type":"A","content":"1.2.3.4","ttl":3600}"#,
        )
        .unwrap();
        assert_eq!(record.record_type, "A");
        assert!(record.priority.is_none());
    }

    // ---- Request bodies ----

    #[test]
    fn create_record_defaults_serialize_exactly() {
        let request = CreateRecordRequest::new("www", "A", "1.2.3.4", 3600);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "www",
                "type": "A",
                "content": "1.2.3.4",
                "ttl": 3600,
                "tag": "",
                "flag": 0,
                "priority": 5,
                "weight": 0,
                "port": 0,
            })
        );
    }

    #[test]
    fn update_body_carries_only_name_and_content() {
        let mut request = UpdateRecordRequest::new("www", "MX", "mail.example.com", 600);
        request.tag = "issue".to_string();
        request.flag = 128;
        request.priority = 10;
        request.weight = 20;
        request.port = 8443;

        let body = serde_json::to_value(UpdateRecordBody::from(&request)).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["name"], "www");
        assert_eq!(object["content"], "mail.example.com");
    }

    // ---- ApiErrorBody ----

    #[test]
    fn error_body_parses_code_message_shape() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"code":401,"message":"bad token"}"#).unwrap();
        assert_eq!(body.code, Some(401));
        assert_eq!(body.message.as_deref(), Some("bad token"));
        assert!(body.errors.is_none());
    }

    #[test]
    fn error_body_parses_field_errors_shape() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"errors":{"name":"must be unique"}}"#).unwrap();
        assert!(body.code.is_none());
        assert_eq!(
            body.errors.unwrap().get("name").map(String::as_str),
            Some("must be unique")
        );
    }
}
