//! Picture encoding.
//!
//! A picture is stored as a self-contained `data:` URL so the record never
//! points back at the local file system.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;

use crate::error::EncodeError;
use crate::record::{Attachment, AttachmentContent};

/// Turns an attachment into a portable string.
///
/// Stored in the submission pipeline as `Arc<dyn PictureEncoder>`.
#[async_trait]
pub trait PictureEncoder: Send + Sync {
    /// Reads the attachment and encodes it.
    ///
    /// This is the only suspension point of a submission; it may be
    /// abandoned part-way when the submission is cancelled.
    async fn encode(&self, attachment: &Attachment) -> Result<String, EncodeError>;
}

/// Encodes attachments as `data:<media-type>;base64,<payload>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlEncoder;

impl DataUrlEncoder {
    pub fn new() -> Self {
        Self
    }

    async fn read(attachment: &Attachment) -> Result<Bytes, EncodeError> {
        match attachment.content() {
            AttachmentContent::Bytes(bytes) => Ok(bytes.clone()),
            AttachmentContent::Path(path) => tokio::fs::read(path)
                .await
                .map(Bytes::from)
                .map_err(|source| EncodeError::Io {
                    path: path.clone(),
                    source,
                }),
            AttachmentContent::Unavailable => Err(EncodeError::MissingContent {
                file_name: attachment.file_name().to_string(),
            }),
        }
    }
}

#[async_trait]
impl PictureEncoder for DataUrlEncoder {
    async fn encode(&self, attachment: &Attachment) -> Result<String, EncodeError> {
        let bytes = Self::read(attachment).await?;
        Ok(data_url(attachment.media_type(), &bytes))
    }
}

/// Formats bytes as a base64 `data:` URL.
pub fn data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{media_type};base64,{}", STANDARD.encode(bytes))
}
