use std::sync::LazyLock;

use intake_core::models::schema::{FieldKind, FormSchema, GroupSchema};
use intake_core::models::template::{DocTemplate, Section};

use crate::FormDefinition;

use super::{col, date_today, field, text};

/// Visit progress note (SOAP layout).
pub struct ProgressNote;

impl FormDefinition for ProgressNote {
    fn form_type(&self) -> &str {
        "progress-note"
    }

    fn schema(&self) -> &FormSchema {
        static SCHEMA: LazyLock<FormSchema> = LazyLock::new(|| FormSchema {
            form_type: "progress-note".to_string(),
            title: "Progress Note".to_string(),
            specialty: "primary-care".to_string(),
            fields: vec![
                date_today("visitDate", "Visit Date"),
                text("patientName", "Patient Name", true),
                field("patientDob", "Date of Birth", FieldKind::Date, true),
                text("providerName", "Provider Name", true),
                text("subjective", "Subjective", true),
                text("objective", "Objective", false),
                text("assessment", "Assessment", true),
                text("plan", "Plan", true),
                text("medicalManagement", "Medical Management Considerations", false),
            ],
            groups: vec![GroupSchema {
                name: "currentMedications".to_string(),
                label: "Current Medications".to_string(),
                columns: vec![
                    col("name", "Medication"),
                    col("dosage", "Dosage"),
                    col("frequency", "Frequency"),
                ],
                min_rows: 0,
            }],
        });
        &SCHEMA
    }

    fn template(&self) -> &DocTemplate {
        static TEMPLATE: LazyLock<DocTemplate> = LazyLock::new(|| DocTemplate {
            sections: vec![
                Section::Heading {
                    level: 1,
                    text: "Progress Note".to_string(),
                },
                Section::Static {
                    body: "Patient: **{{ patientName }}** (DOB: {{ patientDob }})\n\
                           Visit date: {{ visitDate }}\n\
                           Provider: {{ providerName }}"
                        .to_string(),
                },
                Section::Heading {
                    level: 2,
                    text: "Subjective".to_string(),
                },
                Section::Static {
                    body: "{{ subjective }}".to_string(),
                },
                Section::Conditional {
                    gate: "objective".to_string(),
                    heading: Some("Objective".to_string()),
                    body: "{{ objective }}".to_string(),
                },
                Section::Heading {
                    level: 2,
                    text: "Assessment".to_string(),
                },
                Section::Static {
                    body: "{{ assessment }}".to_string(),
                },
                Section::Heading {
                    level: 2,
                    text: "Plan".to_string(),
                },
                Section::Static {
                    body: "{{ plan }}".to_string(),
                },
                Section::Conditional {
                    gate: "medicalManagement".to_string(),
                    heading: Some("Medical Management Considerations".to_string()),
                    body: "{{ medicalManagement }}".to_string(),
                },
                Section::Table {
                    group: "currentMedications".to_string(),
                    heading: Some("Current Medications".to_string()),
                },
            ],
        });
        &TEMPLATE
    }
}
