use serde::Deserialize;

use super::{Account, Status, Tag};

/// Result of `/api/v2/search`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Results {
    pub accounts: Vec<Account>,
    pub statuses: Vec<Status>,
    pub hashtags: Vec<Tag>,
}
