use crate::errors::UploadError;
use crate::helpers::relay_config::RelayConfig;
use crate::models::upload::{IncomingFile, SendDocumentResponse, UploadReceipt};
use crate::route::AppState;
use axum::extract::Multipart;
use reqwest::multipart::{Form, Part};

pub const FILE_FIELD: &str = "file";

/// Pulls the relayable file out of the form and sends it on to Telegram.
pub async fn relay_upload(
    state: &AppState,
    mut multipart: Multipart,
) -> Result<UploadReceipt, UploadError> {
    let file = extract_file(&mut multipart).await?;
    send_document(&state.client, &state.config, file).await
}

/// Returns the first `file` part. A `file` part without a filename is a text
/// field and is rejected the same way as a missing one.
pub async fn extract_file(multipart: &mut Multipart) -> Result<IncomingFile, UploadError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::MalformedBody(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let Some(filename) = field.file_name().map(str::to_owned) else {
            return Err(UploadError::MissingFile);
        };
        let content_type = field.content_type().map(str::to_owned);
        let data = field
            .bytes()
            .await
            .map_err(|e| UploadError::MalformedBody(e.body_text()))?;

        return Ok(IncomingFile {
            filename,
            content_type,
            data,
        });
    }

    Err(UploadError::MissingFile)
}

/// Posts the file to `sendDocument` and maps the reply to a receipt.
pub async fn send_document(
    client: &reqwest::Client,
    config: &RelayConfig,
    file: IncomingFile,
) -> Result<UploadReceipt, UploadError> {
    let size = file.data.len();
    let caption = file.caption();

    let mut document = Part::stream_with_length(file.data, size as u64).file_name(file.filename.clone());
    if let Some(content_type) = file.content_type.as_deref() {
        document = document.mime_str(content_type)?;
    }

    let form = Form::new()
        .text("chat_id", config.chat_id.clone())
        .text("caption", caption)
        .part("document", document);

    tracing::debug!(
        "forwarding {:?} ({} bytes) to {}",
        file.filename,
        size,
        config.redacted_send_document_url()
    );

    let response = client
        .post(config.send_document_url())
        .multipart(form)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await?;
        return Err(UploadError::UpstreamStatus {
            status: status.as_u16(),
            body,
        });
    }

    let reply: SendDocumentResponse = response.json().await?;
    if !reply.ok {
        return Err(UploadError::Upstream {
            description: reply.description,
        });
    }

    let document = reply
        .result
        .and_then(|message| message.document)
        .ok_or_else(|| {
            UploadError::UnexpectedResponse(
                "Telegram API response is missing result.document.file_id".to_string(),
            )
        })?;

    tracing::info!(
        filename = %file.filename,
        bytes = size,
        stored_as = ?document.file_name,
        stored_size = ?document.file_size,
        file_id = %document.file_id,
        "document relayed to Telegram"
    );

    Ok(UploadReceipt {
        file_id: document.file_id,
        filename: file.filename,
    })
}
