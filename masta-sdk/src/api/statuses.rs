use chrono::{DateTime, Utc};
use reqwest::Method;

use crate::client::http::Body;
use crate::entities::{
    Account, Card, Context, EmojiReaction, Id, Source, Status, StatusHistory, Visibility,
};
use crate::params::Params;
use crate::{MastaClient, Pagination, Result};

/// A status to post or an edit to apply.
///
/// Media and polls cannot be combined: when [`Toot::media_ids`] is non-empty the
/// poll is silently left out of the request.
#[derive(Debug, Clone, Default)]
pub struct Toot {
    pub status: String,
    pub in_reply_to_id: Option<Id>,
    pub media_ids: Vec<Id>,
    pub poll: Option<TootPoll>,
    pub visibility: Option<Visibility>,
    pub language: Option<String>,
    pub sensitive: bool,
    pub spoiler_text: Option<String>,
    /// Pleroma: MIME type of `status`, e.g. `text/markdown`.
    pub content_type: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
}

/// Poll attached to a [`Toot`].
#[derive(Debug, Clone, Default)]
pub struct TootPoll {
    pub options: Vec<String>,
    pub expires_in_seconds: u64,
    pub multiple: bool,
    pub hide_totals: bool,
}

impl Toot {
    /// A plain public-default status with only text.
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..Self::default()
        }
    }

    pub(crate) fn params(&self) -> Params {
        let mut params = Params::new();
        params.push("status", &self.status);
        params.push_opt("in_reply_to_id", self.in_reply_to_id.as_ref());
        for id in &self.media_ids {
            params.push("media_ids[]", id);
        }
        // Can't use media and a poll at the same time.
        if let Some(poll) = self.poll.as_ref().filter(|_| self.media_ids.is_empty()) {
            for option in &poll.options {
                params.push("poll[options][]", option);
            }
            params.push("poll[expires_in]", poll.expires_in_seconds);
            params.push_flag("poll[multiple]", poll.multiple);
            params.push_flag("poll[hide_totals]", poll.hide_totals);
        }
        params.push_opt("visibility", self.visibility);
        params.push_opt("language", self.language.as_deref());
        params.push_flag("sensitive", self.sensitive);
        params.push_opt("spoiler_text", self.spoiler_text.as_deref());
        params.push_opt("content_type", self.content_type.as_deref());
        params.push_opt("scheduled_at", self.scheduled_at.map(|t| t.to_rfc3339()));
        params
    }
}

impl MastaClient {
    /// Returns the status specified by id.
    pub async fn get_status(&self, id: &Id) -> Result<Status> {
        self.call(Method::GET, &["api", "v1", "statuses", id.as_str()], Body::Empty, None)
            .await
    }

    /// Returns the ancestors and descendants of a status.
    pub async fn get_status_context(&self, id: &Id) -> Result<Context> {
        self.call(
            Method::GET,
            &["api", "v1", "statuses", id.as_str(), "context"],
            Body::Empty,
            None,
        )
        .await
    }

    /// Returns the preview card of a status.
    pub async fn get_status_card(&self, id: &Id) -> Result<Card> {
        self.call(
            Method::GET,
            &["api", "v1", "statuses", id.as_str(), "card"],
            Body::Empty,
            None,
        )
        .await
    }

    /// Returns the editable source of a status.
    pub async fn get_status_source(&self, id: &Id) -> Result<Source> {
        self.call(
            Method::GET,
            &["api", "v1", "statuses", id.as_str(), "source"],
            Body::Empty,
            None,
        )
        .await
    }

    /// Returns the edit history of a status.
    pub async fn get_status_history(&self, id: &Id) -> Result<Vec<StatusHistory>> {
        self.call(
            Method::GET,
            &["api", "v1", "statuses", id.as_str(), "history"],
            Body::Empty,
            None,
        )
        .await
    }

    /// Returns the accounts that reblogged a status.
    pub async fn get_reblogged_by(
        &self,
        id: &Id,
        pg: Option<&mut Pagination>,
    ) -> Result<Vec<Account>> {
        self.call(
            Method::GET,
            &["api", "v1", "statuses", id.as_str(), "reblogged_by"],
            Body::Empty,
            pg,
        )
        .await
    }

    /// Returns the accounts that favourited a status.
    pub async fn get_favourited_by(
        &self,
        id: &Id,
        pg: Option<&mut Pagination>,
    ) -> Result<Vec<Account>> {
        self.call(
            Method::GET,
            &["api", "v1", "statuses", id.as_str(), "favourited_by"],
            Body::Empty,
            pg,
        )
        .await
    }

    /// Returns the favourites of the current user.
    pub async fn get_favourites(&self, pg: Option<&mut Pagination>) -> Result<Vec<Status>> {
        self.call(Method::GET, &["api", "v1", "favourites"], Body::Empty, pg)
            .await
    }

    /// Returns the bookmarks of the current user.
    pub async fn get_bookmarks(&self, pg: Option<&mut Pagination>) -> Result<Vec<Status>> {
        self.call(Method::GET, &["api", "v1", "bookmarks"], Body::Empty, pg)
            .await
    }

    /// Pleroma: returns the emoji reactions of a status and who reacted.
    pub async fn pl_get_reactions(&self, id: &Id, with_muted: bool) -> Result<Vec<EmojiReaction>> {
        let mut params = Params::new();
        params.push_flag("with_muted", with_muted);
        self.call(
            Method::GET,
            &["api", "v1", "pleroma", "statuses", id.as_str(), "reactions"],
            params,
            None,
        )
        .await
    }

    /// Reblogs a status and returns the reblog.
    pub async fn reblog(&self, id: &Id) -> Result<Status> {
        self.status_action(id, "reblog").await
    }

    /// Undoes a reblog and returns the original status.
    pub async fn unreblog(&self, id: &Id) -> Result<Status> {
        self.status_action(id, "unreblog").await
    }

    /// Favourites a status.
    pub async fn favourite(&self, id: &Id) -> Result<Status> {
        self.status_action(id, "favourite").await
    }

    /// Removes a status from the favourites.
    pub async fn unfavourite(&self, id: &Id) -> Result<Status> {
        self.status_action(id, "unfavourite").await
    }

    /// Bookmarks a status.
    pub async fn bookmark(&self, id: &Id) -> Result<Status> {
        self.status_action(id, "bookmark").await
    }

    /// Removes a status from the bookmarks.
    pub async fn unbookmark(&self, id: &Id) -> Result<Status> {
        self.status_action(id, "unbookmark").await
    }

    /// Pins a status to the profile.
    pub async fn pin(&self, id: &Id) -> Result<Status> {
        self.status_action(id, "pin").await
    }

    /// Unpins a status from the profile.
    pub async fn unpin(&self, id: &Id) -> Result<Status> {
        self.status_action(id, "unpin").await
    }

    /// Mutes notifications from the thread `id` belongs to.
    pub async fn mute_conversation(&self, id: &Id) -> Result<Status> {
        self.status_action(id, "mute").await
    }

    /// Unmutes the thread `id` belongs to.
    pub async fn unmute_conversation(&self, id: &Id) -> Result<Status> {
        self.status_action(id, "unmute").await
    }

    /// Posts a status.
    pub async fn post_status(&self, toot: &Toot) -> Result<Status> {
        self.call(Method::POST, &["api", "v1", "statuses"], toot.params(), None)
            .await
    }

    /// Replaces the content of an existing status.
    pub async fn update_status(&self, toot: &Toot, id: &Id) -> Result<Status> {
        self.call(
            Method::PUT,
            &["api", "v1", "statuses", id.as_str()],
            toot.params(),
            None,
        )
        .await
    }

    /// Deletes a status.
    pub async fn delete_status(&self, id: &Id) -> Result<()> {
        self.call_discard(
            Method::DELETE,
            &["api", "v1", "statuses", id.as_str()],
            Body::Empty,
        )
        .await
    }

    async fn status_action(&self, id: &Id, action: &str) -> Result<Status> {
        self.call(
            Method::POST,
            &["api", "v1", "statuses", id.as_str(), action],
            Body::Empty,
            None,
        )
        .await
    }
}
