use std::io::Write;

use anyhow::Result;
use masta::MastaClient;

use super::plain_text;

/// Shows the account the configured token belongs to.
pub async fn run(client: &MastaClient, out: &mut impl Write) -> Result<()> {
    let me = client.get_account_current_user().await?;
    writeln!(out, "@{} ({})", me.acct, me.id)?;
    if !me.display_name.is_empty() {
        writeln!(out, "name:      {}", me.display_name)?;
    }
    writeln!(out, "statuses:  {}", me.statuses_count)?;
    writeln!(out, "following: {}", me.following_count)?;
    writeln!(out, "followers: {}", me.followers_count)?;
    let note = plain_text(&me.note);
    if !note.is_empty() {
        writeln!(out)?;
        writeln!(out, "{note}")?;
    }
    Ok(())
}
