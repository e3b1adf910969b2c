use serde::Deserialize;

use super::{Account, null_default};

/// Server metadata (`/api/v1/instance`).
#[derive(Debug, Clone, Deserialize)]
pub struct Instance {
    pub uri: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub version: String,
    pub thumbnail: Option<String>,
    pub urls: Option<InstanceUrls>,
    pub stats: Option<InstanceStats>,
    #[serde(default, deserialize_with = "null_default")]
    pub languages: Vec<String>,
    pub contact_account: Option<Account>,
    pub max_toot_chars: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstanceUrls {
    pub streaming_api: String,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct InstanceStats {
    pub user_count: i64,
    pub status_count: i64,
    pub domain_count: i64,
}
