use std::time::Duration;

use axum::Json;
use axum::extract::State;

use intake_core::filenames;
use intake_core::models::payload::SubmissionPayload;
use intake_core::models::response::{StoredDocument, SubmitAck};
use intake_core::storage_keys;
use intake_export::pdf::generate_pdf;
use intake_export::render::render_document;
use intake_forms::get_form;
use intake_storage::objects;

use crate::error::ApiError;
use crate::state::AppState;

/// S3 allows at most 7 days for presigned URLs.
const SHARE_LINK_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// The submission endpoint: validate, render, export, store, share.
/// The first failing step aborts the rest — no partial document is ever
/// referencable by the caller.
pub async fn create_submission(
    State(state): State<AppState>,
    Json(payload): Json<SubmissionPayload>,
) -> Result<Json<SubmitAck>, ApiError> {
    let form = get_form(&payload.form_type).ok_or_else(|| {
        ApiError::BadRequest(format!("unknown form type: {}", payload.form_type))
    })?;

    let violations = form.validate(&payload.form_data);
    if let Some(first) = violations.first() {
        return Err(ApiError::BadRequest(first.to_string()));
    }

    let rendered = render_document(form.schema(), form.template(), &payload.form_data)?;
    let pdf = generate_pdf(&rendered, form.title())?;

    let received_at = jiff::Timestamp::now();
    let patient = payload.form_data.field("patientName").unwrap_or("");
    let file_name =
        filenames::document_file_name(&payload.form_type, patient, received_at, "pdf");
    let specialty = payload
        .specialty
        .clone()
        .unwrap_or_else(|| form.specialty().to_string());
    let key = storage_keys::submission_document(&specialty, &file_name);

    let doc_id = payload.submission_id.to_string();
    objects::put_object(
        &state.s3,
        &state.bucket,
        &key,
        pdf,
        Some("application/pdf"),
        &[("doc-id", &doc_id)],
    )
    .await?;
    let drive_url = objects::presign_get(&state.s3, &state.bucket, &key, SHARE_LINK_TTL).await?;

    let document = StoredDocument {
        file_id: key,
        file_name,
        drive_url,
        doc_id: payload.submission_id,
    };

    tracing::info!(
        form_type = %payload.form_type,
        doc_id = %document.doc_id,
        key = %document.file_id,
        "stored submission document"
    );

    Ok(Json(SubmitAck::for_document(document, received_at)))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use intake_core::models::payload::FormData;
    use uuid::Uuid;

    use super::*;

    // The rejection branches run before the first S3 call, so an unusable
    // client is enough state for them.
    fn stub_state() -> AppState {
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::new("stub", "stub", None, None, "stub"))
            .build();
        AppState {
            s3: aws_sdk_s3::Client::from_conf(config),
            bucket: "intake-test".to_string(),
        }
    }

    fn payload(form_type: &str, fields: &[(&str, &str)]) -> SubmissionPayload {
        SubmissionPayload {
            form_type: form_type.to_string(),
            specialty: None,
            form_data: FormData {
                fields: fields
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                groups: BTreeMap::new(),
            },
            timestamp: jiff::Timestamp::now(),
            submission_id: Uuid::new_v4(),
        }
    }

    async fn failure_body(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn unknown_form_type_is_rejected_with_failure_body() {
        let result =
            create_submission(State(stub_state()), Json(payload("no-such-form", &[]))).await;

        let (status, body) = failure_body(result.unwrap_err()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], serde_json::json!(false));
        assert!(body["error"].as_str().unwrap().contains("no-such-form"));
    }

    #[tokio::test]
    async fn schema_violation_returns_the_first_violation() {
        // attestationDate filled, every other required scalar blank: the
        // first violation in schema order is patientName.
        let result = create_submission(
            State(stub_state()),
            Json(payload(
                "provider-attestation",
                &[("attestationDate", "2026-08-28")],
            )),
        )
        .await;

        let (status, body) = failure_body(result.unwrap_err()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], serde_json::json!(false));
        assert_eq!(
            body["error"],
            serde_json::json!("Provider Attestation: 'Patient Name' is required")
        );
    }
}
