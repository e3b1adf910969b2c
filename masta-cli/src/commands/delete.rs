use std::io::Write;

use anyhow::Result;
use clap::Args;
use masta::{Id, MastaClient};
use tracing::info;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Ids of the statuses to delete, in order
    #[arg(required = true)]
    pub ids: Vec<String>,
}

/// Deletes statuses one by one and stops at the first failure. Deletions that
/// already succeeded stay applied.
pub async fn run(client: &MastaClient, args: DeleteArgs, out: &mut impl Write) -> Result<()> {
    for id in args.ids {
        client.delete_status(&Id::from(id.as_str())).await?;
        info!(%id, "status deleted");
        writeln!(out, "deleted {id}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::commands::test_util::client;

    #[tokio::test]
    async fn stops_at_the_first_failure() {
        let server = MockServer::start_async().await;
        let first = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/v1/statuses/1");
                then.status(200).json_body(json!({}));
            })
            .await;
        let second = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/v1/statuses/2");
                then.status(404).json_body(json!({ "error": "Record not found" }));
            })
            .await;
        let third = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/v1/statuses/3");
                then.status(200).json_body(json!({}));
            })
            .await;

        let mut out = Vec::new();
        let args = DeleteArgs {
            ids: vec!["1".into(), "2".into(), "3".into()],
        };
        let err = run(&client(&server), args, &mut out).await.unwrap_err();

        assert!(err.to_string().contains("Record not found"));
        assert_eq!(String::from_utf8(out).unwrap(), "deleted 1\n");
        first.assert_hits_async(1).await;
        second.assert_hits_async(1).await;
        third.assert_hits_async(0).await;
    }
}
