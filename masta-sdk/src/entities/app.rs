use serde::Deserialize;

use super::Id;

/// The application a status was posted from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Application {
    #[serde(default)]
    pub name: String,
    pub website: Option<String>,
}

/// Result of registering an OAuth application with a server.
#[derive(Debug, Clone, Deserialize)]
pub struct AppRegistration {
    pub id: Option<Id>,
    #[serde(default)]
    pub name: String,
    pub client_id: String,
    pub client_secret: String,
    #[serde(default)]
    pub redirect_uri: String,
    pub vapid_key: Option<String>,
}

/// Result of an OAuth token exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub scope: String,
    pub created_at: Option<i64>,
}
