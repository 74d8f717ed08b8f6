use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A declarative document template: an ordered list of sections interpreted
/// by the renderer. Section order is the rendering order, independent of
/// payload key order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DocTemplate {
    pub sections: Vec<Section>,
}

/// One section of a document template.
///
/// `Static` and `Conditional` bodies are Jinja2-syntax prose; every scalar
/// field of the form is addressable as `{{ name }}` and substitutes to the
/// submitted value, or to a visible underscore blank when absent or empty.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Section {
    /// A fixed heading line, level 1–3.
    Heading { level: u8, text: String },

    /// Fixed prose with placeholder substitution.
    Static { body: String },

    /// Prose included only when the `gate` field has a non-empty submitted
    /// value; omitted entirely otherwise, heading included.
    Conditional {
        gate: String,
        heading: Option<String>,
        body: String,
    },

    /// A table built from a repeatable group: the group's fixed header row,
    /// then one row per record in payload order. Entirely-empty records are
    /// skipped; a group with no remaining rows omits the whole section.
    Table {
        group: String,
        heading: Option<String>,
    },
}
