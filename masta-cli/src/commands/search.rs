use std::io::Write;

use anyhow::Result;
use clap::{Args, ValueEnum};
use masta::{MastaClient, SearchOptions, SearchType};

use super::write_status;

#[derive(Args, Debug)]
pub struct SearchArgs {
    pub query: String,
    /// Only return one kind of result
    #[arg(long = "type", value_enum)]
    pub kind: Option<Kind>,
    /// Look up remote accounts and statuses through WebFinger
    #[arg(long)]
    pub resolve: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Kind {
    Accounts,
    Hashtags,
    Statuses,
}

impl From<Kind> for SearchType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Accounts => SearchType::Accounts,
            Kind::Hashtags => SearchType::Hashtags,
            Kind::Statuses => SearchType::Statuses,
        }
    }
}

pub async fn run(client: &MastaClient, args: SearchArgs, out: &mut impl Write) -> Result<()> {
    let opts = SearchOptions {
        kind: args.kind.map(SearchType::from),
        resolve: args.resolve,
        ..SearchOptions::default()
    };
    let results = client.search(&args.query, &opts, None).await?;

    for account in &results.accounts {
        let line = format!("@{} {}", account.acct, account.display_name);
        writeln!(out, "{}", line.trim_end())?;
    }
    for tag in &results.hashtags {
        writeln!(out, "#{}", tag.name)?;
    }
    for status in &results.statuses {
        write_status(out, status)?;
    }
    Ok(())
}
