//! intake-core
//!
//! Pure domain types, S3 key conventions, and document file naming.
//! No AWS dependency — this is the shared vocabulary of the intake system.

pub mod filenames;
pub mod models;
pub mod storage_keys;
