use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{Emoji, Id, null_default};

/// A user account, local or remote.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub id: Id,
    pub username: String,
    pub acct: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub locked: bool,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub followers_count: i64,
    #[serde(default)]
    pub following_count: i64,
    #[serde(default)]
    pub statuses_count: i64,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub avatar_static: String,
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub header_static: String,
    #[serde(default, deserialize_with = "null_default")]
    pub emojis: Vec<Emoji>,
    /// The account this one moved to, if any.
    pub moved: Option<Box<Account>>,
    #[serde(default, deserialize_with = "null_default")]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub bot: bool,
}

/// A profile metadata pair.
#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub verified_at: Option<DateTime<Utc>>,
}

/// How the authenticated user relates to another account.
#[derive(Debug, Clone, Deserialize)]
pub struct Relationship {
    pub id: Id,
    #[serde(default)]
    pub following: bool,
    #[serde(default)]
    pub followed_by: bool,
    #[serde(default)]
    pub blocking: bool,
    #[serde(default)]
    pub muting: bool,
    #[serde(default)]
    pub muting_notifications: bool,
    #[serde(default)]
    pub requested: bool,
    #[serde(default)]
    pub domain_blocking: bool,
    #[serde(default)]
    pub showing_reblogs: bool,
    #[serde(default)]
    pub endorsed: bool,
}
