use std::sync::LazyLock;

use intake_core::models::schema::{FieldKind, FormSchema};
use intake_core::models::template::{DocTemplate, Section};

use crate::FormDefinition;

use super::{date_today, field, text};

/// Provider attestation statement. No repeatable groups — scalar fields only.
pub struct ProviderAttestation;

impl FormDefinition for ProviderAttestation {
    fn form_type(&self) -> &str {
        "provider-attestation"
    }

    fn schema(&self) -> &FormSchema {
        static SCHEMA: LazyLock<FormSchema> = LazyLock::new(|| FormSchema {
            form_type: "provider-attestation".to_string(),
            title: "Provider Attestation".to_string(),
            specialty: "administration".to_string(),
            fields: vec![
                date_today("attestationDate", "Attestation Date"),
                text("patientName", "Patient Name", true),
                text("providerName", "Provider Name", true),
                text("providerNpi", "Provider NPI", true),
                text("serviceDescription", "Service Provided", true),
                field("serviceDate", "Date of Service", FieldKind::Date, true),
                text("additionalNotes", "Additional Notes", false),
            ],
            groups: vec![],
        });
        &SCHEMA
    }

    fn template(&self) -> &DocTemplate {
        static TEMPLATE: LazyLock<DocTemplate> = LazyLock::new(|| DocTemplate {
            sections: vec![
                Section::Heading {
                    level: 1,
                    text: "Provider Attestation".to_string(),
                },
                Section::Static {
                    body: "I, **{{ providerName }}** (NPI {{ providerNpi }}), attest that \
                           {{ serviceDescription }} was provided to {{ patientName }} on \
                           {{ serviceDate }}, and that the documentation submitted in support \
                           of this service is accurate and complete to the best of my \
                           knowledge."
                        .to_string(),
                },
                Section::Conditional {
                    gate: "additionalNotes".to_string(),
                    heading: Some("Additional Notes".to_string()),
                    body: "{{ additionalNotes }}".to_string(),
                },
                Section::Static {
                    body: "Signed: **{{ providerName }}**\nDate: {{ attestationDate }}"
                        .to_string(),
                },
            ],
        });
        &TEMPLATE
    }
}
