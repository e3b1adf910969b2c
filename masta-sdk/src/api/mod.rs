//! Typed endpoint methods of [`MastaClient`](crate::MastaClient), grouped by resource.

pub(crate) mod accounts;
pub(crate) mod auth;
pub(crate) mod media;
pub(crate) mod notifications;
pub(crate) mod search;
pub(crate) mod statuses;
pub(crate) mod timelines;
