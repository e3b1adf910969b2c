use std::io::Write;

use anyhow::Result;
use clap::Args;
use masta::MastaClient;
use tracing::warn;

#[derive(Args, Debug)]
pub struct FollowArgs {
    /// Accounts to follow (`user@domain`)
    #[arg(required = true)]
    pub accounts: Vec<String>,
}

/// Looks each account up and follows the best match. Unknown accounts are skipped;
/// any request failure stops the run.
pub async fn run(client: &MastaClient, args: FollowArgs, out: &mut impl Write) -> Result<()> {
    for acct in &args.accounts {
        let found = client.accounts_search(acct, 1).await?;
        let Some(account) = found.first() else {
            warn!(%acct, "no such account");
            continue;
        };
        let relationship = client.account_follow(&account.id).await?;
        let state = if relationship.requested {
            "requested"
        } else {
            "following"
        };
        writeln!(out, "{state} @{}", account.acct)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::commands::test_util::{account, client};

    #[tokio::test]
    async fn unknown_accounts_are_skipped() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/accounts/search")
                    .query_param("q", "ghost@example.social")
                    .query_param("limit", "1");
                then.status(200).json_body(json!([]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/accounts/search")
                    .query_param("q", "bob@example.social");
                then.status(200)
                    .json_body(json!([account("42", "bob@example.social")]));
            })
            .await;
        let follow = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v1/accounts/42/follow");
                then.status(200).json_body(json!({ "id": "42", "following": true }));
            })
            .await;

        let mut out = Vec::new();
        let args = FollowArgs {
            accounts: vec!["ghost@example.social".into(), "bob@example.social".into()],
        };
        run(&client(&server), args, &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "following @bob@example.social\n");
        follow.assert_async().await;
    }
}
