//! Response and request shapes of the REST API.
//!
//! Every response type derives [`serde::Deserialize`]; that is the whole decode
//! contract the transport relies on. Fields the server may omit are `Option`s or
//! default to empty collections, and unknown fields are ignored.

mod account;
mod app;
mod instance;
mod media;
mod notification;
mod search;
mod status;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

pub use account::{Account, Field, Relationship};
pub use app::{AccessToken, AppRegistration, Application};
pub use instance::{Instance, InstanceStats, InstanceUrls};
pub use media::{Attachment, Focus, MediaMeta};
pub use notification::{Notification, NotificationPleroma, PushAlerts, PushSubscription};
pub use search::Results;
pub use status::{
    Card, Context, Conversation, Emoji, EmojiReaction, Mention, Poll, PollOption, Source, Status,
    StatusHistory, StatusPleroma, Tag, Visibility,
};

/// Opaque entity identifier.
///
/// Servers order ids in their own way; treat them as tokens and never parse them
/// as integers. Some servers send numeric ids as JSON numbers; those decode to
/// their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Id(String);

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Id(s),
            Raw::Unsigned(n) => Id(n.to_string()),
            Raw::Signed(n) => Id(n.to_string()),
        })
    }
}

impl Id {
    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the empty id.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Id(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id(value.to_owned())
    }
}

impl From<&Id> for Id {
    fn from(value: &Id) -> Self {
        value.clone()
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Deserialize an optional boolean that some servers send as a string
/// (`"true"`/`"false"`).
pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Bool(b)) => Ok(Some(b)),
        Some(Raw::Text(s)) => match s.as_str() {
            "true" | "t" | "1" | "TRUE" | "True" => Ok(Some(true)),
            "false" | "f" | "0" | "FALSE" | "False" => Ok(Some(false)),
            other => Err(serde::de::Error::custom(format!(
                "invalid boolean string `{other}`"
            ))),
        },
    }
}

/// Deserialize `null` as the type's default value.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_an_opaque_string() {
        let id: Id = serde_json::from_str(r#""0098zQx""#).unwrap();
        assert_eq!(id.as_str(), "0098zQx");
        assert_eq!(id.to_string(), "0098zQx");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""0098zQx""#);
        assert!(Id::default().is_empty());
    }

    #[test]
    fn numeric_id_decodes_to_its_decimal_text() {
        let id: Id = serde_json::from_str("328183").unwrap();
        assert_eq!(id, Id::from("328183"));
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""328183""#);

        assert!(serde_json::from_str::<Id>("1.5").is_err());
        assert!(serde_json::from_str::<Id>("null").is_err());
    }

    #[test]
    fn lenient_bool_accepts_strings() {
        #[derive(Deserialize)]
        struct T {
            #[serde(default, deserialize_with = "lenient_bool")]
            v: Option<bool>,
        }
        let t: T = serde_json::from_str(r#"{"v":"true"}"#).unwrap();
        assert_eq!(t.v, Some(true));
        let t: T = serde_json::from_str(r#"{"v":false}"#).unwrap();
        assert_eq!(t.v, Some(false));
        let t: T = serde_json::from_str(r#"{"v":null}"#).unwrap();
        assert_eq!(t.v, None);
        let t: T = serde_json::from_str("{}").unwrap();
        assert_eq!(t.v, None);
        assert!(serde_json::from_str::<T>(r#"{"v":"maybe"}"#).is_err());
    }
}
