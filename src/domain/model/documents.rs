use crate::domain::model::notices::Notice;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Available,
    Failed,
    Pending,
    Processing,
    /// A value this client does not know yet, kept as sent.
    #[serde(untagged)]
    Unrecognized(String),
}

impl DocumentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DocumentStatus::Available => "available",
            DocumentStatus::Failed => "failed",
            DocumentStatus::Pending => "pending",
            DocumentStatus::Processing => "processing",
            DocumentStatus::Unrecognized(value) => value,
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentAcceptedStatus {
    Processing,
    Pending,
    #[serde(untagged)]
    Unrecognized(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteDocumentStatus {
    Deleted,
    #[serde(untagged)]
    Unrecognized(String),
}

/// Content types accepted for uploaded documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileContentType {
    #[serde(rename = "application/json")]
    Json,
    #[serde(rename = "application/msword")]
    MsWord,
    #[serde(rename = "application/vnd.openxmlformats-officedocument.wordprocessingml.document")]
    WordprocessingMl,
    #[serde(rename = "application/pdf")]
    Pdf,
    #[serde(rename = "text/html")]
    Html,
    #[serde(rename = "application/xhtml+xml")]
    Xhtml,
}

impl FileContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileContentType::Json => "application/json",
            FileContentType::MsWord => "application/msword",
            FileContentType::WordprocessingMl => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            FileContentType::Pdf => "application/pdf",
            FileContentType::Html => "text/html",
            FileContentType::Xhtml => "application/xhtml+xml",
        }
    }
}

impl std::fmt::Display for FileContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentDetailsChildren {
    pub have_notices: Option<bool>,
    pub count: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentDetails {
    pub document_id: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub status: Option<DocumentStatus>,
    pub notices: Option<Vec<Notice>>,
    pub children: Option<DocumentDetailsChildren>,
    pub filename: Option<String>,
    pub file_type: Option<String>,
    pub sha256: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListDocumentsResponse {
    pub matching_results: Option<i64>,
    pub documents: Option<Vec<DocumentDetails>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentAccepted {
    pub document_id: Option<String>,
    pub status: Option<DocumentAcceptedStatus>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteDocumentResponse {
    pub document_id: Option<String>,
    pub status: Option<DeleteDocumentStatus>,
}

/// Multipart payload shared by `add_document`, `update_document` and `analyze_document`.
///
/// `metadata` is sent as its own form part holding a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentUpload {
    pub file: Option<Vec<u8>>,
    pub filename: Option<String>,
    pub file_content_type: Option<FileContentType>,
    pub metadata: Option<serde_json::Value>,
    pub x_watson_discovery_force: Option<bool>,
}

impl DocumentUpload {
    pub fn from_bytes(
        file: impl Into<Vec<u8>>,
        filename: impl Into<String>,
        content_type: FileContentType,
    ) -> Self {
        Self {
            file: Some(file.into()),
            filename: Some(filename.into()),
            file_content_type: Some(content_type),
            ..Default::default()
        }
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.x_watson_discovery_force = Some(force);
        self
    }
}

/// Filters for `list_documents`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListDocumentsOptions {
    pub count: Option<i64>,
    pub status: Option<Vec<DocumentStatus>>,
    pub has_notices: Option<bool>,
    pub is_parent: Option<bool>,
    pub parent_document_id: Option<String>,
    pub sha256: Option<String>,
}
