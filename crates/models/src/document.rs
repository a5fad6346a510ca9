use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Information returned after an uploaded document is accepted.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentAccepted {
    /// The unique identifier of the ingested document.
    pub document_id: Option<String>,
    /// Status of the document in the ingestion process. A status of `processing`
    /// is returned for documents that are ingested with a *version* date before
    /// `2019-01-01`. The `pending` status is returned for all others.
    pub status: Option<String>,
}

/// Information returned when a document is deleted.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteDocumentResponse {
    pub document_id: Option<String>,
    /// Status of the document. A deleted document has the status deleted.
    pub status: Option<String>,
}

pub mod document_status {
    pub const PROCESSING: &str = "processing";
    pub const PENDING: &str = "pending";
    pub const AVAILABLE: &str = "available";
    pub const FAILED: &str = "failed";
    pub const DELETED: &str = "deleted";
}

/// Information about a document.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentDetails {
    pub document_id: Option<String>,
    /// Date and time that the document is added to the collection.
    pub created: Option<String>,
    /// Date and time that the document is finished being processed and is
    /// indexed.
    pub updated: Option<String>,
    pub status: Option<String>,
    /// Array of JSON objects for notices, meaning warning or error messages,
    /// that are produced by the document ingestion process.
    pub notices: Option<Vec<Notice>>,
    pub children: Option<DocumentDetailsChildren>,
    /// Name of the original source file (if available).
    pub filename: Option<String>,
    /// The type of the original source file, such as `csv`, `excel`, `html`,
    /// `json`, `pdf`, `text`, `word`, and so on.
    pub file_type: Option<String>,
    /// The SHA-256 hash of the original source file.
    pub sha256: Option<String>,
}

/// Information about the child documents that are generated from a single
/// document during ingestion or other processing.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentDetailsChildren {
    /// Indicates whether the child documents have any notices.
    pub have_notices: Option<bool>,
    /// Number of child documents.
    pub count: Option<i64>,
}

/// Response object that contains an array of documents.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListDocumentsResponse {
    /// The number of matching results for the document query.
    pub matching_results: Option<i64>,
    pub documents: Option<Vec<DocumentDetails>>,
}

/// An object that contains the converted document and any identified enrichments.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalyzedDocument {
    /// Array of notices that are triggered when the files are processed.
    pub notices: Option<Vec<Notice>>,
    pub result: Option<AnalyzedResult>,
}

/// Result of the document analysis. Enrichment output sits next to
/// `metadata` and is kept in `enrichments`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalyzedResult {
    /// Metadata that was specified with the request.
    pub metadata: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub enrichments: Map<String, Value>,
}

/// A notice produced for the collection.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Notice {
    /// Identifies the notice. Many notices might have the same ID. This field
    /// exists so that user applications can programmatically identify a notice
    /// and take automatic corrective action.
    pub notice_id: Option<String>,
    /// The creation date of the collection in the format yyyy-MM-dd'T'HH:mm:ss.SSS'Z'.
    pub created: Option<String>,
    /// Unique identifier of the document.
    pub document_id: Option<String>,
    /// Unique identifier of the collection.
    pub collection_id: Option<String>,
    /// Unique identifier of the query used for relevance training.
    pub query_id: Option<String>,
    /// Severity level of the notice. See [`notice_severity`].
    pub severity: Option<String>,
    /// Ingestion or training step in which the notice occurred.
    pub step: Option<String>,
    /// The description of the notice.
    pub description: Option<String>,
}

impl Notice {
    pub fn is_error(&self) -> bool {
        self.severity.as_deref() == Some(notice_severity::ERROR)
    }
}

pub mod notice_severity {
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

/// Object that contains notice query results.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryNoticesResponse {
    /// The number of matching results.
    pub matching_results: Option<i64>,
    /// Array of document results that match the query.
    pub notices: Option<Vec<Notice>>,
}

/// Object that contains field details.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Field {
    /// The name of the field.
    pub field: Option<String>,
    /// The type of the field. See [`field_type`].
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    /// The collection Id of the collection where the field was found.
    pub collection_id: Option<String>,
}

pub mod field_type {
    pub const NESTED: &str = "nested";
    pub const STRING: &str = "string";
    pub const DATE: &str = "date";
    pub const LONG: &str = "long";
    pub const INTEGER: &str = "integer";
    pub const SHORT: &str = "short";
    pub const BYTE: &str = "byte";
    pub const DOUBLE: &str = "double";
    pub const FLOAT: &str = "float";
    pub const BOOLEAN: &str = "boolean";
    pub const BINARY: &str = "binary";
}

/// The list of fetched fields.
///
/// The fields are returned using a fully qualified name format, however, the
/// format differs slightly from that used by the query operations.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListFieldsResponse {
    pub fields: Option<Vec<Field>>,
}
