#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(any(), deny(clippy::unwrap_used))]

mod api;
mod client;
pub mod entities;
pub mod errors;
pub mod pagination;
mod params;
mod util;

// --- PUBLIC API EXPORTS ---
// Transport
pub use client::core::{Config, MastaClient, MastaClientBuilder};
// Cursor
pub use pagination::Pagination;
// Request shapes
pub use api::auth::{AppConfig, OOB_REDIRECT_URI};
pub use api::media::{Media, MediaFile, MediaUpdate};
pub use api::notifications::NotificationFilter;
pub use api::search::{SearchOptions, SearchType};
pub use api::statuses::{Toot, TootPoll};

// Error types
pub use errors::{BuildError, Error, RequestError, Result};

// Export common entity types
pub use entities::{
    Account, Attachment, Focus, Id, Notification, PushAlerts, Results, Status, Visibility,
};

// Re-exports
pub use reqwest::{Method, StatusCode};
pub use tokio_util::sync::CancellationToken;
