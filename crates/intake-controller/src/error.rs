use thiserror::Error;

/// Failure modes of one submission attempt, as seen by the controller.
#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("server returned HTTP {0}")]
    Status(u16),

    /// The backend explicitly answered `{success: false, error}`.
    #[error("{0}")]
    Rejected(String),
}

impl EndpointError {
    /// The single normalized message shown to the user. Application errors
    /// are shown as-is; transport and status detail is logged only.
    pub fn user_message(&self) -> String {
        match self {
            EndpointError::Rejected(msg) => msg.clone(),
            EndpointError::Transport(_) | EndpointError::Status(_) => {
                "Submission failed. Please check your connection and try again.".to_string()
            }
        }
    }
}
