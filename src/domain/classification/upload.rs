use bytes::Bytes;

/// An image selected by the user, held only for the duration of one
/// classification request. The payload is opaque: filename and MIME
/// type are forwarded to the remote API unvalidated, since it is the
/// authority on acceptable formats.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

impl UploadedImage {
    pub fn new(filename: String, content_type: String, data: Bytes) -> Self {
        Self {
            filename,
            content_type,
            data,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
