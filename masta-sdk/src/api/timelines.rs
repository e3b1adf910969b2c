use reqwest::Method;

use crate::client::http::Body;
use crate::entities::{Conversation, Id, Status};
use crate::params::Params;
use crate::{MastaClient, Pagination, Result};

impl MastaClient {
    /// Returns statuses from the home timeline.
    pub async fn get_timeline_home(&self, pg: Option<&mut Pagination>) -> Result<Vec<Status>> {
        self.call(Method::GET, &["api", "v1", "timelines", "home"], Body::Empty, pg)
            .await
    }

    /// Returns statuses from the federated timeline, or the local one if `local`.
    pub async fn get_timeline_public(
        &self,
        local: bool,
        pg: Option<&mut Pagination>,
    ) -> Result<Vec<Status>> {
        let mut params = Params::new();
        params.push_flag("local", local);
        self.public_timeline(params, pg).await
    }

    /// Pleroma: returns the public timeline of another instance as seen from this
    /// server. An empty `instance` is the local timeline.
    pub async fn pl_get_timeline_remote(
        &self,
        instance: &str,
        pg: Option<&mut Pagination>,
    ) -> Result<Vec<Status>> {
        if instance.is_empty() {
            return self.get_timeline_public(true, pg).await;
        }
        let mut params = Params::new();
        params.push("instance", instance);
        self.public_timeline(params, pg).await
    }

    /// Returns statuses tagged with `tag` (without the leading `#`).
    pub async fn get_timeline_hashtag(
        &self,
        tag: &str,
        local: bool,
        pg: Option<&mut Pagination>,
    ) -> Result<Vec<Status>> {
        let mut params = Params::new();
        params.push_flag("local", local);
        self.call(
            Method::GET,
            &["api", "v1", "timelines", "tag", tag],
            params,
            pg,
        )
        .await
    }

    /// Returns statuses from a list timeline.
    pub async fn get_timeline_list(
        &self,
        id: &Id,
        pg: Option<&mut Pagination>,
    ) -> Result<Vec<Status>> {
        self.call(
            Method::GET,
            &["api", "v1", "timelines", "list", id.as_str()],
            Body::Empty,
            pg,
        )
        .await
    }

    /// Returns public statuses that carry media.
    pub async fn get_timeline_media(
        &self,
        local: bool,
        pg: Option<&mut Pagination>,
    ) -> Result<Vec<Status>> {
        let mut params = Params::new();
        params.push_flag("only_media", true).push_flag("local", local);
        self.public_timeline(params, pg).await
    }

    /// Returns the last status of every direct conversation.
    ///
    /// Conversations without a last status are skipped, so a page may hold fewer
    /// statuses than conversations; the cursor still follows the conversations.
    pub async fn get_timeline_direct(&self, pg: Option<&mut Pagination>) -> Result<Vec<Status>> {
        let conversations = self.get_conversations(pg).await?;
        Ok(conversations
            .into_iter()
            .filter_map(|c| c.last_status)
            .collect())
    }

    /// Returns direct conversations.
    pub async fn get_conversations(
        &self,
        pg: Option<&mut Pagination>,
    ) -> Result<Vec<Conversation>> {
        self.call(Method::GET, &["api", "v1", "conversations"], Body::Empty, pg)
            .await
    }

    /// Removes a conversation from the list. Its statuses are kept.
    pub async fn delete_conversation(&self, id: &Id) -> Result<()> {
        self.call_discard(
            Method::DELETE,
            &["api", "v1", "conversations", id.as_str()],
            Body::Empty,
        )
        .await
    }

    /// Marks a conversation as read.
    pub async fn mark_conversation_as_read(&self, id: &Id) -> Result<()> {
        self.call_discard(
            Method::POST,
            &["api", "v1", "conversations", id.as_str(), "read"],
            Body::Empty,
        )
        .await
    }

    async fn public_timeline(
        &self,
        params: Params,
        pg: Option<&mut Pagination>,
    ) -> Result<Vec<Status>> {
        self.call(Method::GET, &["api", "v1", "timelines", "public"], params, pg)
            .await
    }
}
