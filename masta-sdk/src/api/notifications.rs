use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use reqwest::Method;

use crate::client::http::Body;
use crate::entities::{Id, Notification, PushAlerts, PushSubscription};
use crate::params::Params;
use crate::{MastaClient, Pagination, Result};

/// Narrows [`MastaClient::get_notifications_of`] by notification type or author.
#[derive(Debug, Clone, Default)]
pub struct NotificationFilter {
    /// Only these types (`mention`, `follow`, ...).
    pub include: Vec<String>,
    /// Never these types.
    pub exclude: Vec<String>,
    /// Only notifications caused by this account.
    pub account_id: Option<Id>,
}

impl NotificationFilter {
    fn params(&self) -> Params {
        let mut params = Params::new();
        for kind in &self.include {
            params.push_non_empty("types[]", kind);
        }
        for kind in &self.exclude {
            params.push_non_empty("exclude_types[]", kind);
        }
        params.push_opt("account_id", self.account_id.as_ref());
        params
    }
}

fn push_alerts(params: &mut Params, alerts: &PushAlerts) {
    for (key, value) in alerts.fields() {
        params.push(key, value);
    }
}

impl MastaClient {
    /// Returns the notifications of the current user.
    pub async fn get_notifications(
        &self,
        pg: Option<&mut Pagination>,
    ) -> Result<Vec<Notification>> {
        self.call(Method::GET, &["api", "v1", "notifications"], Body::Empty, pg)
            .await
    }

    /// Returns the notifications that pass `filter`.
    pub async fn get_notifications_of(
        &self,
        filter: &NotificationFilter,
        pg: Option<&mut Pagination>,
    ) -> Result<Vec<Notification>> {
        self.call(
            Method::GET,
            &["api", "v1", "notifications"],
            filter.params(),
            pg,
        )
        .await
    }

    /// Returns one notification.
    pub async fn get_notification(&self, id: &Id) -> Result<Notification> {
        self.call(
            Method::GET,
            &["api", "v1", "notifications", id.as_str()],
            Body::Empty,
            None,
        )
        .await
    }

    /// Deletes one notification.
    pub async fn dismiss_notification(&self, id: &Id) -> Result<()> {
        self.call_discard(
            Method::POST,
            &["api", "v1", "notifications", id.as_str(), "dismiss"],
            Body::Empty,
        )
        .await
    }

    /// Deletes every notification.
    pub async fn clear_notifications(&self) -> Result<()> {
        self.call_discard(
            Method::POST,
            &["api", "v1", "notifications", "clear"],
            Body::Empty,
        )
        .await
    }

    /// Pleroma: marks one notification as read.
    pub async fn pl_read_notification(&self, id: &Id) -> Result<()> {
        let mut params = Params::new();
        params.push("id", id);
        self.call_discard(
            Method::POST,
            &["api", "v1", "pleroma", "notifications", "read"],
            params,
        )
        .await
    }

    /// Pleroma: marks every notification up to and including `id` as read.
    pub async fn pl_read_notifications_to(&self, id: &Id) -> Result<()> {
        let mut params = Params::new();
        params.push("max_id", id);
        self.call_discard(
            Method::POST,
            &["api", "v1", "pleroma", "notifications", "read"],
            params,
        )
        .await
    }

    /// Registers a Web Push subscription for the current token, replacing any
    /// previous one.
    ///
    /// `p256dh` is the subscriber's uncompressed P-256 public key (65 bytes) and
    /// `auth` the shared authentication secret. Both are sent unpadded base64url.
    pub async fn add_push_subscription(
        &self,
        endpoint: &str,
        p256dh: &[u8],
        auth: &[u8],
        alerts: &PushAlerts,
    ) -> Result<PushSubscription> {
        let mut params = Params::new();
        params
            .push("subscription[endpoint]", endpoint)
            .push("subscription[keys][p256dh]", URL_SAFE_NO_PAD.encode(p256dh))
            .push("subscription[keys][auth]", URL_SAFE_NO_PAD.encode(auth));
        push_alerts(&mut params, alerts);
        self.call(
            Method::POST,
            &["api", "v1", "push", "subscription"],
            params,
            None,
        )
        .await
    }

    /// Changes which notification types are pushed. Unset toggles keep their value.
    pub async fn update_push_subscription(&self, alerts: &PushAlerts) -> Result<PushSubscription> {
        let mut params = Params::new();
        push_alerts(&mut params, alerts);
        self.call(
            Method::PUT,
            &["api", "v1", "push", "subscription"],
            params,
            None,
        )
        .await
    }

    /// Deletes the push subscription of the current token.
    pub async fn remove_push_subscription(&self) -> Result<()> {
        self.call_discard(
            Method::DELETE,
            &["api", "v1", "push", "subscription"],
            Body::Empty,
        )
        .await
    }

    /// Returns the push subscription of the current token.
    pub async fn get_push_subscription(&self) -> Result<PushSubscription> {
        self.call(
            Method::GET,
            &["api", "v1", "push", "subscription"],
            Body::Empty,
            None,
        )
        .await
    }
}
