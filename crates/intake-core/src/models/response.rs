use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Success body returned by the submission endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmitAck {
    /// Always `true`; failures use [`SubmitFailure`].
    pub success: bool,
    pub file_name: String,
    /// Shareable link to the stored document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<jiff::Timestamp>,
}

impl SubmitAck {
    /// Compose the success ack for a stored document.
    pub fn for_document(document: StoredDocument, submitted_at: jiff::Timestamp) -> Self {
        Self {
            success: true,
            file_name: document.file_name,
            drive_url: Some(document.drive_url),
            form_id: Some(document.doc_id),
            submitted_at: Some(submitted_at),
        }
    }
}

/// One rendered document after storage: where it lives and how to reach it.
/// The server builds this from the render/store pipeline and folds it into
/// the [`SubmitAck`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StoredDocument {
    /// Storage key of the object, unique per document.
    pub file_id: String,
    pub file_name: String,
    /// Presigned shareable link to the object.
    pub drive_url: String,
    /// Submission id, also recorded as metadata on the stored object.
    pub doc_id: Uuid,
}

/// Failure body returned by the submission endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmitFailure {
    /// Always `false`.
    pub success: bool,
    pub error: String,
}
