pub mod lmn_immunology;
pub mod lmn_thyroid;
pub mod medication_reconciliation;
pub mod progress_note;
pub mod provider_attestation;

use intake_core::models::schema::{ColumnDef, FieldDef, FieldDefault, FieldKind};

pub(crate) fn field(name: &str, label: &str, kind: FieldKind, required: bool) -> FieldDef {
    FieldDef {
        name: name.to_string(),
        label: label.to_string(),
        kind,
        required,
        default: FieldDefault::Empty,
    }
}

pub(crate) fn text(name: &str, label: &str, required: bool) -> FieldDef {
    field(name, label, FieldKind::Text, required)
}

/// A required date field pre-filled with today's date.
pub(crate) fn date_today(name: &str, label: &str) -> FieldDef {
    FieldDef {
        name: name.to_string(),
        label: label.to_string(),
        kind: FieldKind::Date,
        required: true,
        default: FieldDefault::Today,
    }
}

pub(crate) fn col(field: &str, header: &str) -> ColumnDef {
    ColumnDef {
        field: field.to_string(),
        header: header.to_string(),
    }
}
