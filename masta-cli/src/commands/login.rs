use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use masta::{AppConfig, MastaClient};
use tracing::info;

use crate::config::ConfigToml;

const CLIENT_NAME: &str = "plem";

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Server URL, e.g. https://example.social
    #[arg(long)]
    pub server: String,
    /// Login e-mail or username
    #[arg(long)]
    pub username: String,
}

/// Registers the CLI as an application, asks for the password and stores the
/// resulting credentials in the config file.
pub async fn run(args: LoginArgs, config_path: &Path, out: &mut impl Write) -> Result<()> {
    let password = rpassword::prompt_password("Password: ").context("reading the password")?;
    let config = login(&args.server, &args.username, &password).await?;
    config
        .save(config_path)
        .with_context(|| format!("writing {}", config_path.display()))?;
    writeln!(out, "credentials saved to {}", config_path.display())?;
    Ok(())
}

/// Register an app on `server` and run the password grant with it.
pub async fn login(server: &str, username: &str, password: &str) -> Result<ConfigToml> {
    let anon = MastaClient::builder().server(server).build()?;
    let app = anon.register_app(&AppConfig::new(CLIENT_NAME)).await?;
    info!(client_id = %app.client_id, "registered application");

    let mut config = ConfigToml {
        server: server.to_string(),
        client_id: app.client_id,
        client_secret: app.client_secret,
        access_token: String::new(),
    };
    let client = config
        .client_builder()
        .build()?
        .authenticate(username, password)
        .await?;
    let me = client.get_account_current_user().await?;
    info!(acct = %me.acct, "logged in");

    config.access_token = client
        .config()
        .access_token()
        .unwrap_or_default()
        .to_string();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::commands::test_util::account;

    #[tokio::test]
    async fn login_collects_app_and_token() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1/apps")
                    .x_www_form_urlencoded_tuple("client_name", "plem");
                then.status(200).json_body(json!({
                    "client_id": "cid",
                    "client_secret": "csecret",
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/oauth/token")
                    .x_www_form_urlencoded_tuple("client_id", "cid")
                    .x_www_form_urlencoded_tuple("username", "alice")
                    .x_www_form_urlencoded_tuple("password", "pw");
                then.status(200).json_body(json!({ "access_token": "tok" }));
            })
            .await;
        let me = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/accounts/verify_credentials")
                    .header("Authorization", "Bearer tok");
                then.status(200).json_body(account("1", "alice"));
            })
            .await;

        let config = login(&server.base_url(), "alice", "pw").await.unwrap();
        assert_eq!(config.client_id, "cid");
        assert_eq!(config.client_secret, "csecret");
        assert_eq!(config.access_token, "tok");
        me.assert_async().await;
    }

    #[tokio::test]
    async fn wrong_password_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v1/apps");
                then.status(200)
                    .json_body(json!({ "client_id": "cid", "client_secret": "csecret" }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/oauth/token");
                then.status(400).json_body(json!({
                    "error": "invalid_grant",
                    "error_description": "Invalid credentials",
                }));
            })
            .await;

        let err = login(&server.base_url(), "alice", "nope").await.unwrap_err();
        assert!(err.to_string().contains("Invalid credentials"));
    }
}
