use crate::errors::UploadError;
use crate::models::upload::{FileUploadRequest, UploadEnvelope, UploadReceipt};
use crate::route::AppState;
use crate::services::upload_service;
use axum::{
    Json,
    extract::{FromRequest, Multipart, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[utoipa::path(
    post,
    path = "/upload_file",
    tag = "uploads",
    request_body(content = FileUploadRequest, content_type = "multipart/form-data", description = "File to relay to the configured Telegram chat"),
    responses(
        (status = 200, description = "File relayed; body carries the Telegram file_id", body = UploadEnvelope),
        (status = 400, description = "No binary 'file' part in the form", body = UploadEnvelope),
        (status = 500, description = "Bot not configured, unreadable body, or Telegram failure", body = UploadEnvelope)
    )
)]
pub async fn upload_file(State(state): State<AppState>, request: Request) -> Response {
    match handle_upload(&state, request).await {
        Ok(receipt) => (StatusCode::OK, Json(UploadEnvelope::uploaded(receipt))).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn handle_upload(state: &AppState, request: Request) -> Result<UploadReceipt, UploadError> {
    // Checked before the body is touched so a missing secret never costs an upload.
    if !state.config.bot_token_configured() {
        return Err(UploadError::NotConfigured);
    }

    let multipart = Multipart::from_request(request, state)
        .await
        .map_err(|rejection| UploadError::MalformedBody(rejection.body_text()))?;

    upload_service::relay_upload(state, multipart).await
}
