use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The input widget a scalar field renders as in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    Text,
    Date,
    Email,
    Tel,
}

/// How a scalar field is pre-filled when a form instance is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldDefault {
    Empty,
    /// Today's date as ISO 8601 (`YYYY-MM-DD`). Only meaningful for date fields.
    Today,
}

/// One scalar field of a form.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldDef {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub default: FieldDefault,
}

/// One column of a repeatable group: the record field it reads and the fixed
/// table header it renders under.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ColumnDef {
    pub field: String,
    pub header: String,
}

/// A named, ordered, resizable list of uniformly-shaped sub-records
/// (medications, family-history rows, ...). Insertion order is preserved and
/// is the order rendered into the output document.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GroupSchema {
    pub name: String,
    pub label: String,
    pub columns: Vec<ColumnDef>,
    /// The controller never lets the group shrink below this many rows.
    /// 1 for primary groups.
    pub min_rows: usize,
}

/// Everything the controller and the renderer need to know about one form
/// type. Field and group names are the wire contract between the two — the
/// renderer falls back to a visible blank for any scalar it does not find.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormSchema {
    pub form_type: String,
    pub title: String,
    pub specialty: String,
    pub fields: Vec<FieldDef>,
    pub groups: Vec<GroupSchema>,
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn group(&self, name: &str) -> Option<&GroupSchema> {
        self.groups.iter().find(|g| g.name == name)
    }
}
