use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded successfully, ready for client streaming.";
pub const CAPTION_PREFIX: &str = "Uploaded via Web App: ";

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct FileUploadRequest {
    /// Must be sent as a file part (with a filename), not as a text field.
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

/// JSON body returned to the browser for every non-preflight request.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct UploadEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "File uploaded successfully, ready for client streaming.")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "BQACAgQAAxkDAAIBZ2Z")]
    pub file_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "report.pdf")]
    pub filename: Option<String>,
}

impl UploadEnvelope {
    pub fn uploaded(receipt: UploadReceipt) -> Self {
        Self {
            success: true,
            message: Some(UPLOAD_SUCCESS_MESSAGE.to_string()),
            file_id: Some(receipt.file_id),
            filename: Some(receipt.filename),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            file_id: None,
            filename: None,
        }
    }
}

/// Outcome of a relayed upload: the Telegram reference plus the name the client sent.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadReceipt {
    pub file_id: String,
    pub filename: String,
}

/// The `file` part pulled out of the incoming form.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: axum::body::Bytes,
}

impl IncomingFile {
    pub fn caption(&self) -> String {
        format!("{}{}", CAPTION_PREFIX, self.filename)
    }
}

/// Body of a Bot API `sendDocument` reply.
#[derive(Debug, Deserialize)]
pub struct SendDocumentResponse {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<SentMessage>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SentMessage {
    #[serde(default)]
    pub document: Option<TelegramDocument>,
}

#[derive(Debug, Deserialize)]
pub struct TelegramDocument {
    pub file_id: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
}
