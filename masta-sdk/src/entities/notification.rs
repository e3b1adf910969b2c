use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{Account, Id, Status, lenient_bool};

/// Something that happened to the authenticated user.
#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub account: Account,
    pub status: Option<Status>,
    /// Pleroma: the emoji of an `pleroma:emoji_reaction` notification.
    pub emoji: Option<String>,
    pub pleroma: Option<NotificationPleroma>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct NotificationPleroma {
    pub is_seen: bool,
}

/// A Web Push subscription registered for the current token.
#[derive(Debug, Clone, Deserialize)]
pub struct PushSubscription {
    pub id: Id,
    pub endpoint: String,
    pub server_key: String,
    pub alerts: Option<PushAlerts>,
}

/// Which notification kinds trigger a push.
///
/// Every toggle is tri-state: `None` leaves the server setting unchanged,
/// `Some(false)` switches it off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PushAlerts {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub follow: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub favourite: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub reblog: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub mention: Option<bool>,
}

impl PushAlerts {
    /// Form fields for the toggles that are set, in a stable order.
    pub(crate) fn fields(&self) -> impl Iterator<Item = (&'static str, bool)> {
        [
            ("data[alerts][follow]", self.follow),
            ("data[alerts][favourite]", self.favourite),
            ("data[alerts][reblog]", self.reblog),
            ("data[alerts][mention]", self.mention),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_set_toggles_are_emitted() {
        let alerts = PushAlerts {
            follow: Some(true),
            ..PushAlerts::default()
        };
        assert_eq!(
            alerts.fields().collect::<Vec<_>>(),
            vec![("data[alerts][follow]", true)]
        );

        let alerts = PushAlerts {
            favourite: Some(false),
            mention: Some(true),
            ..PushAlerts::default()
        };
        assert_eq!(
            alerts.fields().collect::<Vec<_>>(),
            vec![("data[alerts][favourite]", false), ("data[alerts][mention]", true)]
        );
    }

    #[test]
    fn decodes_string_booleans() {
        let sub: PushSubscription = serde_json::from_str(
            r#"{"id":"1","endpoint":"https://push.example/x","server_key":"k","alerts":{"follow":"true","mention":false}}"#,
        )
        .unwrap();
        let alerts = sub.alerts.unwrap();
        assert_eq!(alerts.follow, Some(true));
        assert_eq!(alerts.mention, Some(false));
        assert_eq!(alerts.reblog, None);
    }

    #[test]
    fn decodes_numeric_subscription_id() {
        let sub: PushSubscription = serde_json::from_str(
            r#"{"id":328183,"endpoint":"https://push.example/x","server_key":"k","alerts":{"follow":true}}"#,
        )
        .unwrap();
        assert_eq!(sub.id, Id::from("328183"));
        assert_eq!(sub.alerts.unwrap().follow, Some(true));
    }
}
