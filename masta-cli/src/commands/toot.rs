use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use masta::{Id, MastaClient, Toot, Visibility};
use tokio::io::AsyncReadExt;

#[derive(Args, Debug)]
pub struct TootArgs {
    /// Text of the status; words are joined with spaces
    pub text: Vec<String>,
    /// Read the text from a file, or from stdin with `-`
    #[arg(long = "ff", value_name = "FILE")]
    pub from_file: Option<PathBuf>,
    /// Id of the status to reply to
    #[arg(short = 'i', long = "in-reply-to", value_name = "ID")]
    pub in_reply_to: Option<String>,
    /// public, unlisted, private, direct, local or list
    #[arg(long)]
    pub visibility: Option<Visibility>,
    /// Content warning shown before the text
    #[arg(long)]
    pub spoiler: Option<String>,
}

pub async fn run(client: &MastaClient, args: TootArgs, out: &mut impl Write) -> Result<()> {
    let text = match &args.from_file {
        Some(path) => read_text(path).await?,
        None if args.text.is_empty() => bail!("nothing to post: give TEXT or --ff"),
        None => args.text.join(" "),
    };

    let toot = Toot {
        in_reply_to_id: args.in_reply_to.map(Id::from),
        visibility: args.visibility,
        spoiler_text: args.spoiler,
        ..Toot::new(text)
    };
    let status = client.post_status(&toot).await?;
    writeln!(out, "{}", status.url.as_deref().unwrap_or(status.id.as_str()))?;
    Ok(())
}

async fn read_text(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("reading the status from stdin")?;
        return Ok(text);
    }
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading the status from {}", path.display()))
}
