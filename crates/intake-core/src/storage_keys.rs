//! S3 key conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of stored documents in the intake bucket: one folder per specialty,
//! one object per exported document.

pub const SUBMISSIONS_PREFIX: &str = "submissions/";

/// Folder prefix holding one specialty's exported documents.
pub fn specialty_prefix(specialty: &str) -> String {
    format!("submissions/{specialty}/")
}

/// Full key for one exported document.
pub fn submission_document(specialty: &str, file_name: &str) -> String {
    format!("submissions/{specialty}/{file_name}")
}
