//! Revocable handle over a downloaded video byte stream.

use tracing::warn;

/// Opaque, revocable reference to a video byte stream.
///
/// The handle exclusively owns the downloaded bytes. `revoke` releases them
/// and must run exactly once per handle: replacement and teardown paths call
/// it so the bytes are not kept alive behind a forgotten Movie.
#[derive(Debug)]
pub struct VideoHandle {
    bytes: Option<Vec<u8>>,
    mime_type: String,
}

impl VideoHandle {
    /// Wrap downloaded video bytes.
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes: Some(bytes),
            mime_type: mime_type.into(),
        }
    }

    /// MIME type reported by the download.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Borrow the video bytes, or `None` once revoked.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }

    /// Byte length of the stream, zero once revoked.
    pub fn len(&self) -> usize {
        self.bytes.as_ref().map(Vec::len).unwrap_or(0)
    }

    /// Check whether the handle holds no data.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether the handle has been revoked.
    pub fn is_revoked(&self) -> bool {
        self.bytes.is_none()
    }

    /// Release the underlying bytes.
    ///
    /// Returns `true` if this call performed the release. A second revoke is
    /// a warned no-op rather than an error, so teardown paths can run
    /// unconditionally.
    pub fn revoke(&mut self) -> bool {
        if self.bytes.take().is_some() {
            true
        } else {
            warn!("video handle revoked twice");
            false
        }
    }
}
