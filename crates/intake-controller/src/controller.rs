use std::time::Duration;

use intake_core::models::payload::{FormData, SubmissionPayload};
use intake_forms::FormDefinition;
use uuid::Uuid;

use crate::endpoint::SubmissionEndpoint;
use crate::state::{FormState, FormStatus, blank_record};

/// How long the success view stays up before the form resets to defaults.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(3);

/// Owns the live state of one form instance and produces validated
/// submission payloads. One outstanding network call at a time; the busy
/// flag is cleared on every exit path.
pub struct FormController {
    form: Box<dyn FormDefinition>,
    state: FormState,
    status: FormStatus,
    busy: bool,
}

impl FormController {
    pub fn new(form: Box<dyn FormDefinition>) -> Self {
        let today = jiff::Zoned::now().date();
        let state = FormState::from_schema(form.schema(), today);
        Self {
            form,
            state,
            status: FormStatus::Idle,
            busy: false,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Any user edit dismisses a displayed error.
    fn dismiss_error(&mut self) {
        if matches!(self.status, FormStatus::Error { .. }) {
            self.status = FormStatus::Idle;
        }
    }

    /// Overwrite one scalar field. Any string is accepted at this layer —
    /// required-field checks happen at submit time.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.state.fields.insert(name.to_string(), value.into());
        self.dismiss_error();
    }

    /// Append a blank record to the named group. Existing rows and their
    /// order are untouched.
    ///
    /// # Panics
    ///
    /// Panics if the schema does not define `group`. Group names come from
    /// the schema at render time, so this indicates a caller bug.
    pub fn add_row(&mut self, group: &str) {
        self.dismiss_error();
        let group_schema = self
            .form
            .schema()
            .group(group)
            .unwrap_or_else(|| panic!("no group '{group}' in schema"));
        self.state
            .groups
            .entry(group.to_string())
            .or_default()
            .push(blank_record(group_schema));
    }

    /// Replace one field of the record at `index`, leaving every other
    /// record and field untouched. The updated record is a fresh value —
    /// no shared reference to the old row survives.
    ///
    /// # Panics
    ///
    /// Panics if `group` is unknown or `index` is out of range; indices are
    /// always derived from the current render, so this indicates a caller
    /// bug.
    pub fn update_row(&mut self, group: &str, index: usize, field: &str, value: impl Into<String>) {
        self.dismiss_error();
        let rows = self
            .state
            .groups
            .get_mut(group)
            .unwrap_or_else(|| panic!("no group '{group}' in state"));
        let mut updated = rows[index].clone();
        updated.insert(field.to_string(), value.into());
        rows[index] = updated;
    }

    /// Remove the record at `index`, shifting subsequent records down.
    /// Refuses (no-op) when removal would drop the group below its
    /// `min_rows`.
    ///
    /// # Panics
    ///
    /// Panics if `group` is unknown or `index` is out of range.
    pub fn remove_row(&mut self, group: &str, index: usize) {
        self.dismiss_error();
        let min_rows = self
            .form
            .schema()
            .group(group)
            .map(|g| g.min_rows)
            .unwrap_or_else(|| panic!("no group '{group}' in schema"));
        let rows = self
            .state
            .groups
            .get_mut(group)
            .unwrap_or_else(|| panic!("no group '{group}' in state"));

        assert!(index < rows.len(), "row index {index} out of range");
        if rows.len() <= min_rows {
            return;
        }
        rows.remove(index);
    }

    /// Required scalars that are still blank — the counterpart of the
    /// browser's native required-field markers. Submission is not attempted
    /// while this is non-empty.
    pub fn missing_required(&self) -> Vec<&str> {
        self.form
            .schema()
            .fields
            .iter()
            .filter(|f| {
                f.required
                    && self
                        .state
                        .fields
                        .get(&f.name)
                        .is_none_or(|v| v.trim().is_empty())
            })
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Immutable snapshot of the current state, stamped with the submit
    /// time and a fresh submission id.
    pub fn snapshot(&self, at: jiff::Timestamp) -> SubmissionPayload {
        SubmissionPayload {
            form_type: self.form.form_type().to_string(),
            specialty: Some(self.form.specialty().to_string()),
            form_data: FormData {
                fields: self.state.fields.clone(),
                groups: self.state.groups.clone(),
            },
            timestamp: at,
            submission_id: Uuid::new_v4(),
        }
    }

    /// Assemble the payload and post it. On success the status becomes
    /// `Success` (call [`Self::reset_after_delay`] to return to defaults);
    /// on any failure the status carries one normalized message and the
    /// form contents stay intact for correction.
    pub async fn submit<E: SubmissionEndpoint>(&mut self, endpoint: &E) -> &FormStatus {
        if self.busy {
            tracing::debug!("submit ignored: a submission is already in flight");
            return &self.status;
        }

        let missing = self.missing_required();
        if let Some(first) = missing.first() {
            let label = self
                .form
                .schema()
                .field(first)
                .map(|f| f.label.clone())
                .unwrap_or_else(|| (*first).to_string());
            self.status = FormStatus::Error {
                message: format!("'{label}' is required"),
            };
            return &self.status;
        }

        self.busy = true;
        self.status = FormStatus::Submitting;
        let payload = self.snapshot(jiff::Timestamp::now());

        match endpoint.submit(&payload).await {
            Ok(ack) => {
                self.status = FormStatus::Success {
                    file_name: ack.file_name,
                    drive_url: ack.drive_url,
                };
            }
            Err(e) => {
                tracing::warn!(error = %e, form_type = self.form.form_type(), "submission failed");
                self.status = FormStatus::Error {
                    message: e.user_message(),
                };
            }
        }

        self.busy = false;
        &self.status
    }

    /// Hold the success view for [`SUCCESS_RESET_DELAY`], then reset.
    pub async fn reset_after_delay(&mut self) {
        tokio::time::sleep(SUCCESS_RESET_DELAY).await;
        self.reset();
    }

    /// Clear the form back to schema defaults and return to `Idle`.
    pub fn reset(&mut self) {
        let today = jiff::Zoned::now().date();
        self.state = FormState::from_schema(self.form.schema(), today);
        self.status = FormStatus::Idle;
    }
}
