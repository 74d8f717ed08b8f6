use std::sync::LazyLock;

use intake_core::models::schema::{FieldKind, FormSchema, GroupSchema};
use intake_core::models::template::{DocTemplate, Section};

use crate::FormDefinition;

use super::{col, date_today, field, text};

/// Medication reconciliation worksheet.
pub struct MedicationReconciliation;

impl FormDefinition for MedicationReconciliation {
    fn form_type(&self) -> &str {
        "medication-reconciliation"
    }

    fn schema(&self) -> &FormSchema {
        static SCHEMA: LazyLock<FormSchema> = LazyLock::new(|| FormSchema {
            form_type: "medication-reconciliation".to_string(),
            title: "Medication Reconciliation".to_string(),
            specialty: "internal-medicine".to_string(),
            fields: vec![
                date_today("reviewDate", "Review Date"),
                text("patientName", "Patient Name", true),
                field("patientDob", "Date of Birth", FieldKind::Date, true),
                text("reviewedBy", "Reviewed By", true),
                text("pharmacyName", "Preferred Pharmacy", false),
                field("pharmacyPhone", "Pharmacy Phone", FieldKind::Tel, false),
                text("allergies", "Known Allergies", false),
                text("reconciliationNotes", "Reconciliation Notes", false),
            ],
            groups: vec![
                GroupSchema {
                    name: "medications".to_string(),
                    label: "Active Medications".to_string(),
                    columns: vec![
                        col("name", "Medication"),
                        col("dosage", "Dosage"),
                        col("frequency", "Frequency"),
                    ],
                    min_rows: 1,
                },
                // Secondary group; may legitimately be empty.
                GroupSchema {
                    name: "discontinuedMedications".to_string(),
                    label: "Discontinued Medications".to_string(),
                    columns: vec![
                        col("name", "Medication"),
                        col("reason", "Reason Discontinued"),
                    ],
                    min_rows: 0,
                },
            ],
        });
        &SCHEMA
    }

    fn template(&self) -> &DocTemplate {
        static TEMPLATE: LazyLock<DocTemplate> = LazyLock::new(|| DocTemplate {
            sections: vec![
                Section::Heading {
                    level: 1,
                    text: "Medication Reconciliation".to_string(),
                },
                Section::Static {
                    body: "Patient: **{{ patientName }}** (DOB: {{ patientDob }})\n\
                           Review date: {{ reviewDate }}\n\
                           Reviewed by: {{ reviewedBy }}\n\
                           Preferred pharmacy: {{ pharmacyName }} ({{ pharmacyPhone }})"
                        .to_string(),
                },
                Section::Conditional {
                    gate: "allergies".to_string(),
                    heading: Some("Known Allergies".to_string()),
                    body: "{{ allergies }}".to_string(),
                },
                Section::Table {
                    group: "medications".to_string(),
                    heading: Some("Active Medications".to_string()),
                },
                Section::Table {
                    group: "discontinuedMedications".to_string(),
                    heading: Some("Discontinued Medications".to_string()),
                },
                Section::Conditional {
                    gate: "reconciliationNotes".to_string(),
                    heading: Some("Reconciliation Notes".to_string()),
                    body: "{{ reconciliationNotes }}".to_string(),
                },
            ],
        });
        &TEMPLATE
    }
}
