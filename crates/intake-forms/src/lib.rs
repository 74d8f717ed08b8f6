//! intake-forms
//!
//! Declarative form definitions. Pure data — no AWS dependency. One module
//! per form type defines its field set, repeatable groups, and document
//! template; a single generic engine (controller + renderer) interprets them.

pub mod forms;
pub mod validation;

use intake_core::models::payload::FormData;
use intake_core::models::schema::FormSchema;
use intake_core::models::template::DocTemplate;

use validation::ValidationError;

/// Trait implemented by each intake form type.
pub trait FormDefinition: Send + Sync {
    /// Unique form type key (e.g. "letter-medical-necessity-thyroid").
    fn form_type(&self) -> &str;

    /// The scalar fields and repeatable groups this form collects.
    fn schema(&self) -> &FormSchema;

    /// The document template rendered for this form type.
    fn template(&self) -> &DocTemplate;

    fn title(&self) -> &str {
        &self.schema().title
    }

    fn specialty(&self) -> &str {
        &self.schema().specialty
    }

    /// Validate submitted data against this form's schema.
    ///
    /// Flags missing required scalars, groups the schema does not define,
    /// and record fields outside a group's column set. Extra scalar fields
    /// are tolerated — the renderer simply never reads them.
    fn validate(&self, data: &FormData) -> Vec<ValidationError> {
        let schema = self.schema();
        let mut errors = Vec::new();

        for field in &schema.fields {
            if field.required && !data.has_value(&field.name) {
                errors.push(ValidationError {
                    field: field.name.clone(),
                    message: format!("{}: '{}' is required", self.title(), field.label),
                });
            }
        }

        for (group_name, records) in &data.groups {
            let Some(group) = schema.group(group_name) else {
                errors.push(ValidationError {
                    field: group_name.clone(),
                    message: format!(
                        "{}: unknown repeatable group '{group_name}'",
                        self.title()
                    ),
                });
                continue;
            };
            for (index, record) in records.iter().enumerate() {
                for key in record.keys() {
                    if !group.columns.iter().any(|c| &c.field == key) {
                        errors.push(ValidationError {
                            field: format!("{group_name}[{index}].{key}"),
                            message: format!(
                                "{}: group '{}' has no field '{key}'",
                                self.title(),
                                group.label
                            ),
                        });
                    }
                }
            }
        }

        errors
    }
}

/// Return all registered form definitions.
pub fn all_forms() -> Vec<Box<dyn FormDefinition>> {
    vec![
        Box::new(forms::lmn_immunology::LmnImmunology),
        Box::new(forms::lmn_thyroid::LmnThyroid),
        Box::new(forms::medication_reconciliation::MedicationReconciliation),
        Box::new(forms::progress_note::ProgressNote),
        Box::new(forms::provider_attestation::ProviderAttestation),
    ]
}

/// Look up a form definition by its form type key.
pub fn get_form(form_type: &str) -> Option<Box<dyn FormDefinition>> {
    all_forms().into_iter().find(|f| f.form_type() == form_type)
}
