pub mod account;
pub mod delete;
pub mod follow;
pub mod instance_peers;
pub mod login;
pub mod notifications;
pub mod search;
pub mod timeline;
pub mod toot;
pub mod upload;

use std::io::Write;

use masta::Status;

/// Render status HTML as terminal text: paragraphs and `<br>` become newlines,
/// other tags are dropped and the common entities decoded.
pub(crate) fn plain_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let Some(len) = rest[start..].find('>') else {
            rest = &rest[start..];
            break;
        };
        let tag = rest[start + 1..start + len].trim().to_ascii_lowercase();
        if tag.starts_with("br") || tag == "/p" {
            out.push('\n');
        }
        rest = &rest[start + len + 1..];
    }
    out.push_str(rest);

    out.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
        .trim_end()
        .to_string()
}

/// One status, reblogs unwrapped.
pub(crate) fn write_status(out: &mut impl Write, status: &Status) -> std::io::Result<()> {
    match &status.reblog {
        Some(inner) => {
            writeln!(out, "{} @{} reblogged:", status.id, status.account.acct)?;
            write_status(out, inner)
        }
        None => {
            writeln!(out, "{} @{}", status.id, status.account.acct)?;
            if !status.spoiler_text.is_empty() {
                writeln!(out, "CW: {}", status.spoiler_text)?;
            }
            for line in plain_text(&status.content).lines() {
                writeln!(out, "    {line}")?;
            }
            for media in &status.media_attachments {
                writeln!(out, "    [{}] {}", media.kind, media.url.as_deref().unwrap_or(""))?;
            }
            Ok(())
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_to_text() {
        assert_eq!(
            plain_text("<p>hello <a href=\"x\">@bob</a></p><p>a &amp; b<br/>c &lt;3</p>"),
            "hello @bob\na & b\nc <3"
        );
        assert_eq!(plain_text("no tags"), "no tags");
        assert_eq!(plain_text("broken <tag"), "broken <tag");
    }
}
