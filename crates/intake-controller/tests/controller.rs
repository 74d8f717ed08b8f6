use std::sync::atomic::{AtomicUsize, Ordering};

use intake_controller::error::EndpointError;
use intake_controller::{FormController, FormStatus, SubmissionEndpoint};
use intake_core::models::payload::SubmissionPayload;
use intake_core::models::response::SubmitAck;
use intake_forms::get_form;

fn controller(form_type: &str) -> FormController {
    FormController::new(get_form(form_type).unwrap())
}

fn fill_required(c: &mut FormController) {
    for name in c.missing_required().into_iter().map(str::to_string).collect::<Vec<_>>() {
        c.set_field(&name, "filled");
    }
}

struct Accepting {
    calls: AtomicUsize,
}

impl Accepting {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

impl SubmissionEndpoint for Accepting {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<SubmitAck, EndpointError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(SubmitAck {
            success: true,
            file_name: format!("{}_test.pdf", payload.form_type),
            drive_url: Some("https://example.org/doc".to_string()),
            form_id: Some(payload.submission_id),
            submitted_at: Some(payload.timestamp),
        })
    }
}

struct FailingWith(u16);

impl SubmissionEndpoint for FailingWith {
    async fn submit(&self, _payload: &SubmissionPayload) -> Result<SubmitAck, EndpointError> {
        Err(EndpointError::Status(self.0))
    }
}

struct Rejecting(&'static str);

impl SubmissionEndpoint for Rejecting {
    async fn submit(&self, _payload: &SubmissionPayload) -> Result<SubmitAck, EndpointError> {
        Err(EndpointError::Rejected(self.0.to_string()))
    }
}

#[test]
fn initial_state_has_min_rows_and_date_defaults() {
    let c = controller("letter-medical-necessity-thyroid");

    assert_eq!(c.state().groups["patientConditions"].len(), 1);
    assert_eq!(c.state().groups["familyHistory"].len(), 1);
    // Date field with a Today default is pre-filled ISO 8601.
    let letter_date = &c.state().fields["letterDate"];
    assert_eq!(letter_date.len(), 10);
    assert_eq!(&letter_date[4..5], "-");
    // Plain text fields start empty.
    assert_eq!(c.state().fields["patientName"], "");
}

#[test]
fn add_then_remove_round_trips() {
    let mut c = controller("letter-medical-necessity-thyroid");
    c.update_row("medications", 0, "name", "Levothyroxine");
    let before = c.state().clone();

    c.add_row("medications");
    assert_eq!(c.state().groups["medications"].len(), 2);

    c.remove_row("medications", 1);
    assert_eq!(c.state(), &before);
}

#[test]
fn add_row_appends_without_touching_existing_rows() {
    let mut c = controller("letter-medical-necessity-thyroid");
    c.update_row("medications", 0, "name", "Levothyroxine");

    c.add_row("medications");

    let rows = &c.state().groups["medications"];
    assert_eq!(rows[0]["name"], "Levothyroxine");
    assert!(rows[1].values().all(String::is_empty));
}

#[test]
fn remove_row_never_drops_a_primary_group_below_one() {
    let mut c = controller("letter-medical-necessity-thyroid");
    c.update_row("patientConditions", 0, "condition", "Hypothyroidism");

    c.remove_row("patientConditions", 0);

    let rows = &c.state().groups["patientConditions"];
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["condition"], "Hypothyroidism");
}

#[test]
fn secondary_group_can_be_emptied() {
    let mut c = controller("medication-reconciliation");
    c.add_row("discontinuedMedications");
    assert_eq!(c.state().groups["discontinuedMedications"].len(), 1);

    c.remove_row("discontinuedMedications", 0);
    assert!(c.state().groups["discontinuedMedications"].is_empty());
}

#[test]
fn update_row_touches_only_the_addressed_cell() {
    let mut c = controller("letter-medical-necessity-thyroid");
    c.add_row("medications");
    c.update_row("medications", 0, "name", "Levothyroxine");
    c.update_row("medications", 0, "dosage", "50mcg");
    c.update_row("medications", 1, "name", "Metformin");

    c.update_row("medications", 1, "dosage", "500mg");

    let rows = &c.state().groups["medications"];
    assert_eq!(rows[0]["name"], "Levothyroxine");
    assert_eq!(rows[0]["dosage"], "50mcg");
    assert_eq!(rows[0]["frequency"], "");
    assert_eq!(rows[1]["name"], "Metformin");
    assert_eq!(rows[1]["dosage"], "500mg");
}

#[tokio::test]
async fn missing_required_field_blocks_the_network_call() {
    let mut c = controller("provider-attestation");
    let endpoint = Accepting::new();

    let status = c.submit(&endpoint).await;

    assert!(matches!(status, FormStatus::Error { .. }));
    assert_eq!(endpoint.calls.load(Ordering::Relaxed), 0);
    assert!(!c.is_busy());
}

#[tokio::test]
async fn http_500_leaves_state_unchanged_and_busy_false() {
    let mut c = controller("letter-medical-necessity-thyroid");
    fill_required(&mut c);
    c.update_row("medications", 0, "name", "Levothyroxine");
    let before = c.state().clone();

    let status = c.submit(&FailingWith(500)).await;

    match status {
        FormStatus::Error { message } => {
            // Transport detail is normalized away from the user.
            assert!(!message.contains("500"));
        }
        other => panic!("expected error status, got {other:?}"),
    }
    assert_eq!(c.state(), &before);
    assert!(!c.is_busy());
}

#[tokio::test]
async fn application_error_string_is_shown_as_is() {
    let mut c = controller("letter-medical-necessity-thyroid");
    fill_required(&mut c);

    let status = c.submit(&Rejecting("template not found")).await;

    assert_eq!(
        status,
        &FormStatus::Error {
            message: "template not found".to_string()
        }
    );
}

#[tokio::test]
async fn next_edit_dismisses_a_displayed_error() {
    let mut c = controller("letter-medical-necessity-thyroid");
    fill_required(&mut c);
    c.submit(&FailingWith(502)).await;
    assert!(matches!(c.status(), FormStatus::Error { .. }));

    c.set_field("patientName", "Jane Doe");

    assert_eq!(c.status(), &FormStatus::Idle);
}

#[tokio::test]
async fn row_edits_also_dismiss_a_displayed_error() {
    let mut c = controller("letter-medical-necessity-thyroid");
    fill_required(&mut c);

    c.submit(&FailingWith(502)).await;
    assert!(matches!(c.status(), FormStatus::Error { .. }));
    c.add_row("medications");
    assert_eq!(c.status(), &FormStatus::Idle);

    c.submit(&FailingWith(502)).await;
    c.update_row("medications", 0, "name", "Levothyroxine");
    assert_eq!(c.status(), &FormStatus::Idle);

    c.submit(&FailingWith(502)).await;
    c.remove_row("medications", 1);
    assert_eq!(c.status(), &FormStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn successful_submission_shows_ack_then_resets_to_defaults() {
    let mut c = controller("letter-medical-necessity-thyroid");
    fill_required(&mut c);
    c.update_row("medications", 0, "name", "Levothyroxine");

    let status = c.submit(&Accepting::new()).await;
    match status {
        FormStatus::Success { file_name, drive_url } => {
            assert_eq!(file_name, "letter-medical-necessity-thyroid_test.pdf");
            assert!(drive_url.is_some());
        }
        other => panic!("expected success status, got {other:?}"),
    }
    assert!(!c.is_busy());

    c.reset_after_delay().await;

    assert_eq!(c.status(), &FormStatus::Idle);
    assert_eq!(c.state().fields["patientName"], "");
    assert_eq!(c.state().groups["medications"].len(), 1);
    assert!(c.state().groups["medications"][0].values().all(String::is_empty));
}

#[tokio::test]
async fn snapshot_carries_the_full_wire_shape() {
    let mut c = controller("letter-medical-necessity-thyroid");
    fill_required(&mut c);
    c.update_row("patientConditions", 0, "condition", "Hypothyroidism");

    let payload = c.snapshot("2026-08-27T14:35:22Z".parse().unwrap());
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["formType"], "letter-medical-necessity-thyroid");
    assert_eq!(json["specialty"], "endocrinology");
    assert_eq!(
        json["formData"]["patientConditions"][0]["condition"],
        "Hypothyroidism"
    );
    assert!(json["submissionId"].is_string());
}
