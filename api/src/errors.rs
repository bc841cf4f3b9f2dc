use crate::models::upload::UploadEnvelope;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;

pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected server error occurred.";

#[derive(ThisError, Debug)]
pub enum UploadError {
    /// The bot token is still the startup placeholder
    #[error("Server Error: BOTTOKEN is not configured.")]
    NotConfigured,

    /// No `file` part, or `file` was sent as a plain text field
    #[error("No file part in the request (Field name must be 'file').")]
    MissingFile,

    /// The request body could not be read as multipart/form-data
    #[error("{0}")]
    MalformedBody(String),

    /// Telegram answered with a non-2xx status
    #[error("Telegram API Upload Failed: {status} - {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The request to Telegram never produced a usable response
    #[error(transparent)]
    Transport(reqwest::Error),

    /// Telegram answered 2xx but with `ok: false`
    #[error("Telegram API Error: {}", .description.as_deref().filter(|d| !d.is_empty()).unwrap_or("Unknown error"))]
    Upstream { description: Option<String> },

    /// Telegram reported success without the fields we need
    #[error("{0}")]
    UnexpectedResponse(String),
}

impl UploadError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            UploadError::MissingFile => StatusCode::BAD_REQUEST,
            UploadError::NotConfigured
            | UploadError::MalformedBody(_)
            | UploadError::UpstreamStatus { .. }
            | UploadError::Transport(_)
            | UploadError::Upstream { .. }
            | UploadError::UnexpectedResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the JSON envelope; never empty.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}

// The request URL carries the bot token, so it is dropped before the error can reach a client.
impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        UploadError::Transport(err.without_url())
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            UploadError::NotConfigured => {
                tracing::error!("upload rejected: bot token is not configured")
            }
            UploadError::MissingFile => tracing::warn!("upload rejected: {}", self),
            _ => tracing::error!(error = ?self, "upload failed: {}", self),
        }
        (status, Json(UploadEnvelope::failure(self.user_message()))).into_response()
    }
}
