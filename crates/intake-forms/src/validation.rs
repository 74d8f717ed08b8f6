use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// A single schema violation found in a submitted payload.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    /// The offending field, or `group[index].field` for record fields.
    pub field: String,
    pub message: String,
}
