use crate::handlers::upload_handler;
use crate::helpers::{cors, relay_config::RelayConfig};
use crate::models::upload::{FileUploadRequest, UploadEnvelope};
use crate::routes::upload_route;
use axum::{Router, extract::DefaultBodyLimit, middleware};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(upload_handler::upload_file),
    components(schemas(UploadEnvelope, FileUploadRequest)),
    info(title = "Telegram Upload Relay API", version = "0.1.0")
)]
pub struct ApiDoc;

/// Shared by every request; nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: RelayConfig) -> Result<Self, String> {
        // No timeout: large documents can take a long time to reach Telegram.
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }
}

pub fn create_api_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .merge(upload_route::router())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(cors::cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_documents_upload_endpoint() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/upload_file"));
        let schemas = doc.components.expect("components").schemas;
        assert!(schemas.contains_key("UploadEnvelope"));
        assert!(schemas.contains_key("FileUploadRequest"));
    }
}
