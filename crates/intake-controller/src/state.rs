use std::collections::BTreeMap;

use intake_core::models::payload::GroupRecord;
use intake_core::models::schema::{FieldDefault, FormSchema, GroupSchema};

/// Submission lifecycle for one form instance. `Success` returns to `Idle`
/// after a fixed display delay; `Error` returns to `Idle` on the next edit
/// or resubmission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Success {
        file_name: String,
        drive_url: Option<String>,
    },
    Error {
        message: String,
    },
}

/// Live, mutable value of one form instance: scalar field values plus one
/// ordered record sequence per repeatable group. Mutated exclusively through
/// [`crate::FormController`] operations.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub fields: BTreeMap<String, String>,
    pub groups: BTreeMap<String, Vec<GroupRecord>>,
}

impl FormState {
    /// Build the initial state for a schema: scalar defaults (today's date,
    /// ISO 8601, for `Today` defaults) and `min_rows` blank records per
    /// group.
    pub fn from_schema(schema: &FormSchema, today: jiff::civil::Date) -> Self {
        let fields = schema
            .fields
            .iter()
            .map(|f| {
                let value = match f.default {
                    FieldDefault::Empty => String::new(),
                    FieldDefault::Today => today.to_string(),
                };
                (f.name.clone(), value)
            })
            .collect();

        let groups = schema
            .groups
            .iter()
            .map(|g| {
                let rows = (0..g.min_rows).map(|_| blank_record(g)).collect();
                (g.name.clone(), rows)
            })
            .collect();

        Self { fields, groups }
    }
}

/// A new record with every column defaulted to the empty string.
pub(crate) fn blank_record(group: &GroupSchema) -> GroupRecord {
    group
        .columns
        .iter()
        .map(|c| (c.field.clone(), String::new()))
        .collect()
}
