use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use masta::{Focus, MastaClient, Media, MediaFile};

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// File to upload
    pub file: PathBuf,
    /// Preview image for video and audio
    #[arg(long, value_name = "FILE")]
    pub thumbnail: Option<PathBuf>,
    /// Alt text
    #[arg(long)]
    pub description: Option<String>,
    /// Focal point as `x,y`, each in -1.0..=1.0
    #[arg(long, allow_hyphen_values = true)]
    pub focus: Option<Focus>,
}

/// Uploads a file and prints the attachment id to use with `toot`.
pub async fn run(client: &MastaClient, args: UploadArgs, out: &mut impl Write) -> Result<()> {
    let thumbnail = match &args.thumbnail {
        Some(path) => Some(MediaFile::open(path).await?),
        None => None,
    };
    let media = Media {
        thumbnail,
        description: args.description,
        focus: args.focus,
        ..Media::new(MediaFile::open(&args.file).await?)
    };

    let attachment = client.upload_media_from_media(media).await?;
    writeln!(
        out,
        "{} {}",
        attachment.id,
        attachment.url.as_deref().unwrap_or_default()
    )?;
    Ok(())
}
