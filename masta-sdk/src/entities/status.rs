use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Account, Application, Attachment, Id, null_default};

/// A posted message.
#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    pub id: Id,
    pub uri: String,
    pub url: Option<String>,
    pub account: Account,
    pub in_reply_to_id: Option<Id>,
    pub in_reply_to_account_id: Option<Id>,
    pub reblog: Option<Box<Status>>,
    #[serde(default)]
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub edited_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_default")]
    pub emojis: Vec<Emoji>,
    #[serde(default)]
    pub replies_count: i64,
    #[serde(default)]
    pub reblogs_count: i64,
    #[serde(default)]
    pub favourites_count: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub reblogged: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub favourited: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub bookmarked: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub muted: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub pinned: bool,
    #[serde(default)]
    pub sensitive: bool,
    #[serde(default)]
    pub spoiler_text: String,
    #[serde(default)]
    pub visibility: String,
    #[serde(default, deserialize_with = "null_default")]
    pub media_attachments: Vec<Attachment>,
    #[serde(default, deserialize_with = "null_default")]
    pub mentions: Vec<Mention>,
    #[serde(default, deserialize_with = "null_default")]
    pub tags: Vec<Tag>,
    pub card: Option<Card>,
    pub poll: Option<Poll>,
    pub application: Option<Application>,
    pub language: Option<String>,
    pub pleroma: Option<StatusPleroma>,
}

/// Pleroma extensions of [`Status`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatusPleroma {
    pub direct_conversation_id: Option<i64>,
    pub in_reply_to_account_acct: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub emoji_reactions: Vec<EmojiReaction>,
    #[serde(deserialize_with = "null_default")]
    pub content: HashMap<String, String>,
    #[serde(rename = "spoiler_text", deserialize_with = "null_default")]
    pub spoiler_content: HashMap<String, String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub parent_visible: Option<bool>,
    pub pinned_at: Option<DateTime<Utc>>,
}

/// A Pleroma emoji reaction and who reacted.
#[derive(Debug, Clone, Deserialize)]
pub struct EmojiReaction {
    #[serde(rename = "name")]
    pub emoji: String,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub me: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub accounts: Vec<Account>,
}

/// One revision of an edited status.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusHistory {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub spoiler_text: String,
    pub account: Account,
    #[serde(default)]
    pub sensitive: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_default")]
    pub emojis: Vec<Emoji>,
    #[serde(default, deserialize_with = "null_default")]
    pub media_attachments: Vec<Attachment>,
}

/// The thread around a status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Context {
    #[serde(default)]
    pub ancestors: Vec<Status>,
    #[serde(default)]
    pub descendants: Vec<Status>,
}

/// Link preview card.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Card {
    pub url: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub author_name: String,
    pub author_url: String,
    pub provider_name: String,
    pub provider_url: String,
    pub html: String,
    pub width: i64,
    pub height: i64,
}

/// Plain-text source of a status, for editing.
#[derive(Debug, Clone, Deserialize)]
pub struct Source {
    pub id: Id,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub spoiler_text: String,
    /// Pleroma only.
    pub content_type: Option<String>,
}

/// A direct-message conversation.
#[derive(Debug, Clone, Deserialize)]
pub struct Conversation {
    pub id: Id,
    #[serde(default, deserialize_with = "null_default")]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub unread: bool,
    pub last_status: Option<Status>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Mention {
    pub id: Id,
    pub url: String,
    pub username: String,
    pub acct: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub name: String,
    pub url: String,
}

/// Custom emoji.
#[derive(Debug, Clone, Deserialize)]
pub struct Emoji {
    pub shortcode: String,
    pub url: String,
    pub static_url: String,
    #[serde(default = "visible_default")]
    pub visible_in_picker: bool,
}

fn visible_default() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct Poll {
    pub id: Id,
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expired: bool,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub votes_count: i64,
    pub voters_count: Option<i64>,
    #[serde(default)]
    pub options: Vec<PollOption>,
    pub voted: Option<bool>,
    #[serde(default, deserialize_with = "null_default")]
    pub own_votes: Vec<i64>,
    #[serde(default, deserialize_with = "null_default")]
    pub emojis: Vec<Emoji>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollOption {
    pub title: String,
    pub votes_count: Option<i64>,
}

/// Who may see a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Unlisted,
    Private,
    Direct,
    /// Pleroma: visible on the local instance only.
    Local,
    /// Pleroma: visible to members of a list.
    List,
}

impl Visibility {
    /// Wire name of the visibility.
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Unlisted => "unlisted",
            Visibility::Private => "private",
            Visibility::Direct => "direct",
            Visibility::Local => "local",
            Visibility::List => "list",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Visibility::Public),
            "unlisted" => Ok(Visibility::Unlisted),
            "private" => Ok(Visibility::Private),
            "direct" => Ok(Visibility::Direct),
            "local" => Ok(Visibility::Local),
            "list" => Ok(Visibility::List),
            other => Err(format!("unknown visibility `{other}`")),
        }
    }
}
