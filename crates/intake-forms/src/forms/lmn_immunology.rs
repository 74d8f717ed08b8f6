use std::sync::LazyLock;

use intake_core::models::schema::{FieldKind, FormSchema, GroupSchema};
use intake_core::models::template::{DocTemplate, Section};

use crate::FormDefinition;

use super::{col, date_today, field, text};

/// Letter of medical necessity, immunology (primary immunodeficiency) variant.
pub struct LmnImmunology;

impl FormDefinition for LmnImmunology {
    fn form_type(&self) -> &str {
        "letter-medical-necessity-immunodeficiency"
    }

    fn schema(&self) -> &FormSchema {
        static SCHEMA: LazyLock<FormSchema> = LazyLock::new(|| FormSchema {
            form_type: "letter-medical-necessity-immunodeficiency".to_string(),
            title: "Letter of Medical Necessity — Immunodeficiency".to_string(),
            specialty: "immunology".to_string(),
            fields: vec![
                date_today("letterDate", "Letter Date"),
                text("patientName", "Patient Name", true),
                field("patientDob", "Date of Birth", FieldKind::Date, true),
                text("diagnosis", "Primary Diagnosis", true),
                text("requestedService", "Requested Therapy", true),
                text("infectionHistory", "Infection History Summary", false),
                text("clinicalJustification", "Clinical Justification", false),
                text("providerName", "Provider Name", true),
                text("providerCredentials", "Credentials", false),
                field("providerPhone", "Provider Phone", FieldKind::Tel, false),
                field("providerEmail", "Provider Email", FieldKind::Email, false),
            ],
            groups: vec![
                GroupSchema {
                    name: "patientConditions".to_string(),
                    label: "Immune History".to_string(),
                    columns: vec![
                        col("condition", "Immune Conditions"),
                        col("dxAge", "Dx Age"),
                    ],
                    min_rows: 1,
                },
                GroupSchema {
                    name: "familyHistory".to_string(),
                    label: "Family History".to_string(),
                    columns: vec![
                        col("relative", "Relative"),
                        col("side", "Side"),
                        col("relationship", "Relationship"),
                        col("condition", "Condition"),
                        col("dxAge", "Dx Age"),
                    ],
                    min_rows: 1,
                },
                GroupSchema {
                    name: "medications".to_string(),
                    label: "Current Medications".to_string(),
                    columns: vec![
                        col("name", "Medication"),
                        col("dosage", "Dosage"),
                        col("frequency", "Frequency"),
                    ],
                    min_rows: 1,
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
                    text: "Letter of Medical Necessity".to_string(),
                },
                Section::Static {
                    body: "Date: {{ letterDate }}\n\nTo Whom It May Concern,\n\nI am writing \
                           on behalf of my patient, **{{ patientName }}** (DOB: \
                           {{ patientDob }}), to attest to the medical necessity of \
                           {{ requestedService }} for the management of {{ diagnosis }}."
                        .to_string(),
                },
                Section::Table {
                    group: "patientConditions".to_string(),
                    heading: Some("Patient Immune History".to_string()),
                },
                Section::Conditional {
                    gate: "infectionHistory".to_string(),
                    heading: Some("Infection History".to_string()),
                    body: "{{ infectionHistory }}".to_string(),
                },
                Section::Table {
                    group: "familyHistory".to_string(),
                    heading: Some("Family History".to_string()),
                },
                Section::Table {
                    group: "medications".to_string(),
                    heading: Some("Current Medications".to_string()),
                },
                Section::Conditional {
                    gate: "clinicalJustification".to_string(),
                    heading: Some("Clinical Justification".to_string()),
                    body: "{{ clinicalJustification }}".to_string(),
                },
                Section::Static {
                    body: "Please do not hesitate to contact my office at \
                           {{ providerPhone }} or {{ providerEmail }} with any questions.\n\n\
                           Sincerely,\n\n**{{ providerName }}**, {{ providerCredentials }}"
                        .to_string(),
                },
            ],
        });
        &TEMPLATE
    }
}
