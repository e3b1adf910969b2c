use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use masta::{Id, MastaClient, Pagination, Status};
use tracing::debug;

use super::write_status;

#[derive(Args, Debug)]
pub struct TimelineArgs {
    #[command(subcommand)]
    pub kind: Option<TimelineKind>,
    /// Number of pages to fetch
    #[arg(long, default_value_t = 1)]
    pub pages: u32,
    /// Statuses per page
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TimelineKind {
    /// Statuses of followed accounts (default)
    Home,
    /// Federated timeline
    Public,
    /// Statuses of this server only
    Local,
    /// Direct messages
    Direct,
    /// Statuses with a hashtag
    Tag { tag: String },
    /// Statuses of a list
    List { id: String },
}

pub async fn run(client: &MastaClient, args: TimelineArgs, out: &mut impl Write) -> Result<()> {
    let kind = args.kind.unwrap_or(TimelineKind::Home);
    let mut pg = Pagination {
        limit: args.limit,
        ..Pagination::default()
    };

    for page in 1..=args.pages {
        let statuses = fetch(client, &kind, &mut pg).await?;
        debug!(page, count = statuses.len(), "fetched timeline page");
        for status in &statuses {
            write_status(out, status)?;
        }
        if !pg.has_next() {
            break;
        }
    }
    Ok(())
}

async fn fetch(
    client: &MastaClient,
    kind: &TimelineKind,
    pg: &mut Pagination,
) -> masta::Result<Vec<Status>> {
    match kind {
        TimelineKind::Home => client.get_timeline_home(Some(pg)).await,
        TimelineKind::Public => client.get_timeline_public(false, Some(pg)).await,
        TimelineKind::Local => client.get_timeline_public(true, Some(pg)).await,
        TimelineKind::Direct => client.get_timeline_direct(Some(pg)).await,
        TimelineKind::Tag { tag } => {
            let tag = tag.trim_start_matches('#');
            client.get_timeline_hashtag(tag, false, Some(pg)).await
        }
        TimelineKind::List { id } => {
            client
                .get_timeline_list(&Id::from(id.as_str()), Some(pg))
                .await
        }
    }
}
