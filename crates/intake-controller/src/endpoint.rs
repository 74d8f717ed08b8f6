use intake_core::models::payload::SubmissionPayload;
use intake_core::models::response::{SubmitAck, SubmitFailure};

use crate::error::EndpointError;

/// Where a finished payload goes. The HTTP implementation posts JSON to the
/// backend submission endpoint; tests substitute their own.
pub trait SubmissionEndpoint {
    fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> impl Future<Output = Result<SubmitAck, EndpointError>> + Send;
}

/// Posts payloads as JSON to a fixed URL. Non-2xx status is failure
/// regardless of body; an explicit `{success: false}` body is failure even
/// on 2xx.
pub struct HttpEndpoint {
    client: reqwest::Client,
    url: String,
}

impl HttpEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl SubmissionEndpoint for HttpEndpoint {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<SubmitAck, EndpointError> {
        let resp = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| EndpointError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            // The failure body may still carry the application error string.
            if let Ok(failure) = resp.json::<SubmitFailure>().await {
                return Err(EndpointError::Rejected(failure.error));
            }
            return Err(EndpointError::Status(status.as_u16()));
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| EndpointError::Transport(e.to_string()))?;

        if body.get("success").and_then(serde_json::Value::as_bool) == Some(false) {
            let error = body
                .get("error")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("submission rejected")
                .to_string();
            return Err(EndpointError::Rejected(error));
        }

        serde_json::from_value(body).map_err(|e| EndpointError::Transport(e.to_string()))
    }
}
