use std::path::Path;

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use tokio_util::io::ReaderStream;

use crate::client::http::Body;
use crate::entities::{Attachment, Focus, Id};
use crate::params::Params;
use crate::{MastaClient, Result};

const DEFAULT_FILE_NAME: &str = "upload";

/// Content of one multipart file part.
#[derive(Debug)]
pub struct MediaFile {
    name: String,
    source: Source,
}

#[derive(Debug)]
enum Source {
    /// Streamed from disk with a known length.
    File { file: tokio::fs::File, len: u64 },
    Bytes(Bytes),
}

impl MediaFile {
    /// Open a file for upload. The file is streamed, never read into memory.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = tokio::fs::File::open(path).await?;
        let len = file.metadata().await?.len();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());
        Ok(Self {
            name,
            source: Source::File { file, len },
        })
    }

    /// In-memory content sent under `name`.
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            source: Source::Bytes(bytes.into()),
        }
    }

    /// File name reported to the server.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// MIME type sent with the part, guessed from the file name.
    pub fn content_type(&self) -> String {
        mime_guess::from_path(&self.name)
            .first_or_octet_stream()
            .to_string()
    }

    fn into_part(self) -> Result<Part> {
        let content_type = self.content_type();
        let part = match self.source {
            Source::File { file, len } => Part::stream_with_length(
                reqwest::Body::wrap_stream(ReaderStream::new(file)),
                len,
            ),
            Source::Bytes(bytes) => {
                let len = bytes.len() as u64;
                Part::stream_with_length(reqwest::Body::from(bytes), len)
            }
        };
        Ok(part.file_name(self.name).mime_str(&content_type)?)
    }
}

/// A media attachment to upload.
#[derive(Debug)]
pub struct Media {
    pub file: MediaFile,
    pub thumbnail: Option<MediaFile>,
    pub description: Option<String>,
    pub focus: Option<Focus>,
}

impl Media {
    pub fn new(file: MediaFile) -> Self {
        Self {
            file,
            thumbnail: None,
            description: None,
            focus: None,
        }
    }

    /// Named multipart parts in wire order. Absent optional parts are left out.
    pub(crate) fn into_parts(self) -> Result<Vec<(&'static str, Part)>> {
        let mut parts = vec![("file", self.file.into_part()?)];
        if let Some(thumbnail) = self.thumbnail {
            parts.push(("thumbnail", thumbnail.into_part()?));
        }
        if let Some(description) = self.description.filter(|d| !d.is_empty()) {
            parts.push(("description", Part::text(description)));
        }
        if let Some(focus) = self.focus {
            parts.push(("focus", Part::text(focus.to_string())));
        }
        Ok(parts)
    }

    fn into_form(self) -> Result<Form> {
        Ok(self
            .into_parts()?
            .into_iter()
            .fold(Form::new(), |form, (name, part)| form.part(name, part)))
    }
}

/// Changes to an uploaded attachment that is not yet attached to a status.
#[derive(Debug, Clone, Default)]
pub struct MediaUpdate {
    pub thumbnail: Option<Id>,
    pub description: Option<String>,
    pub focus: Option<Focus>,
}

impl MediaUpdate {
    fn params(&self) -> Params {
        let mut params = Params::new();
        params
            .push_opt("thumbnail", self.thumbnail.as_ref())
            .push_opt("description", self.description.as_deref())
            .push_opt("focus", self.focus);
        params
    }
}

impl MastaClient {
    /// Uploads the file at `path`.
    pub async fn upload_media(&self, path: impl AsRef<Path>) -> Result<Attachment> {
        let file = MediaFile::open(path).await?;
        self.upload_media_from_media(Media::new(file)).await
    }

    /// Uploads in-memory content.
    pub async fn upload_media_from_bytes(&self, bytes: impl Into<Bytes>) -> Result<Attachment> {
        let file = MediaFile::from_bytes(DEFAULT_FILE_NAME, bytes);
        self.upload_media_from_media(Media::new(file)).await
    }

    /// Uploads a media attachment with its optional thumbnail, description and focus.
    pub async fn upload_media_from_media(&self, media: Media) -> Result<Attachment> {
        self.call(
            Method::POST,
            &["api", "v1", "media"],
            Body::Multipart(media.into_form()?),
            None,
        )
        .await
    }

    /// Updates an attachment's metadata.
    pub async fn update_media(&self, id: &Id, update: &MediaUpdate) -> Result<Attachment> {
        self.call(
            Method::PUT,
            &["api", "v1", "media", id.as_str()],
            update.params(),
            None,
        )
        .await
    }
}
