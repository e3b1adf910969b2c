use std::io::Write;

use anyhow::Result;
use masta::MastaClient;

/// Prints one federated peer hostname per line.
pub async fn run(client: &MastaClient, out: &mut impl Write) -> Result<()> {
    for peer in client.get_instance_peers().await? {
        writeln!(out, "{peer}")?;
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
    async fn prints_peers() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/instance/peers");
                then.status(200)
                    .json_body(json!(["a.example", "b.example"]));
            })
            .await;

        let mut out = Vec::new();
        run(&client(&server), &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a.example\nb.example\n");
    }
}
