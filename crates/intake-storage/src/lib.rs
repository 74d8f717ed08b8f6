//! intake-storage
//!
//! S3 operations. Thin wrapper around the AWS S3 SDK.

pub mod client;
pub mod error;
pub mod objects;
