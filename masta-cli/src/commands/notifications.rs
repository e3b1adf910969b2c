use std::io::Write;

use anyhow::Result;
use clap::Args;
use masta::{MastaClient, Pagination};

use super::plain_text;

#[derive(Args, Debug)]
pub struct NotificationsArgs {
    /// Number of pages to fetch
    #[arg(long, default_value_t = 1)]
    pub pages: u32,
}

pub async fn run(client: &MastaClient, args: NotificationsArgs, out: &mut impl Write) -> Result<()> {
    let mut pg = Pagination::default();
    for _ in 0..args.pages {
        for n in client.get_notifications(Some(&mut pg)).await? {
            write!(out, "{} {} @{}", n.id, n.kind, n.account.acct)?;
            if let Some(status) = &n.status {
                let text = plain_text(&status.content);
                write!(out, ": {}", text.lines().next().unwrap_or_default())?;
            }
            writeln!(out)?;
        }
        if !pg.has_next() {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::commands::test_util::{account, client, status};

    #[tokio::test]
    async fn prints_one_line_per_notification() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/notifications");
                then.status(200).json_body(json!([
                    {
                        "id": "2",
                        "type": "mention",
                        "created_at": "2024-01-01T00:00:00Z",
                        "account": account("5", "bob"),
                        "status": status("9", "<p>hi <span>@alice</span></p><p>second</p>"),
                    },
                    {
                        "id": "1",
                        "type": "follow",
                        "created_at": "2024-01-01T00:00:00Z",
                        "account": account("6", "carol"),
                    },
                ]));
            })
            .await;

        let mut out = Vec::new();
        run(&client(&server), NotificationsArgs { pages: 3 }, &mut out)
            .await
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2 mention @bob: hi @alice\n1 follow @carol\n"
        );
    }
}
