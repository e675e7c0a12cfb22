use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::extension::DocumentExtension;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

/// An uploaded document, alive for the duration of a single request.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub extension: DocumentExtension,
    pub content_type: String,
    pub size_bytes: u64,
}

impl Document {
    pub fn new(
        filename: String,
        extension: DocumentExtension,
        content_type: String,
        size_bytes: u64,
    ) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            extension,
            content_type,
            size_bytes,
        }
    }

    pub fn file_metadata(&self) -> FileMetadata {
        FileMetadata {
            file_name: self.filename.clone(),
            content_type: self.content_type.clone(),
            extension: self.extension.as_str().to_string(),
            size: self.size_bytes,
        }
    }
}

/// One text-bearing segment of a parsed document, typically a page.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSegment {
    pub text: String,
    pub page: Option<u32>,
}

impl DocumentSegment {
    pub fn new(text: String, page: Option<u32>) -> Self {
        Self { text, page }
    }
}

/// Upload-derived metadata, independent of document content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub file_name: String,
    pub content_type: String,
    pub extension: String,
    pub size: u64,
}
