//! intake-export
//!
//! Document rendering: declarative template + submitted form data →
//! markdown-ish intermediate → PDF or DOCX bytes.

pub mod docx;
pub mod error;
pub mod pdf;
pub mod render;
pub mod styles;
